//! The runnable-check capability.
//!
//! A plugin ships ad-hoc, manually invoked check routines: smoke tests against the
//! host document, sanity checks after a migration, and the like. This trait is the
//! polymorphism seam that lets a harness hold heterogeneous check objects and invoke
//! them uniformly without knowing the concrete variant.

/// A self-contained check routine that can be invoked with no arguments.
///
/// The trait imposes no semantics on what "running" means and defines no failure
/// channel; by convention a failing check panics, and harness layers capture the
/// panic (see `gatecheck::Suite`). The trait is object-safe so checks can be
/// collected as `Box<dyn RunnableTest>`.
pub trait RunnableTest {
    /// Execute the check.
    fn run(&self);
}

/// Any zero-argument closure is a runnable check.
impl<F: Fn()> RunnableTest for F {
    fn run(&self) {
        self()
    }
}
