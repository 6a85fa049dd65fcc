//! Provide the shared vocabulary for plugins talking to a host CAD application.
//!
//! This crate is intentionally small and dependency-light. It defines the contracts a plugin
//! exposes at the host boundary:
//! - opaque handles for host-owned objects ([`ElementHandle`], [`ReferenceHandle`]),
//! - the selection gates a host picking loop consults ([`SelectionFilter`]),
//! - the runnable-check capability a harness invokes ([`RunnableTest`]).
//!
//! ## Notes
//!
//! - This is a "boundary vocabulary" crate: **no IO**, no global state, and no harness-specific
//!   types. The harness layer lives in the `gatecheck` crate.
//! - Handles are supplied by the host and are never owned, stored, or mutated here.

pub mod geom;
pub mod handle;
pub mod run;
pub mod select;

// Re-export commonly used items
pub use geom::Point3;
pub use handle::{ElementHandle, ReferenceHandle};
pub use run::RunnableTest;
pub use select::{AcceptAll, RejectAll, SelectionFilter};
