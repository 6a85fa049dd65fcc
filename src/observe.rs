//! Trace-level observability for selection gates.
//!
//! Gate decisions are invisible by nature: the host asks, the filter answers, and
//! the user only sees what does or does not highlight. [`Traced`] wraps any filter
//! and emits a `tracing` event per decision so a plugin session can be replayed
//! from its logs.

use gatecheck_core::geom::Point3;
use gatecheck_core::handle::{ElementHandle, ReferenceHandle};
use gatecheck_core::select::SelectionFilter;

/// Wrap a selection filter and log every gate decision.
///
/// Verdicts are forwarded unchanged; the wrapper adds nothing but a
/// trace-level event per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traced<F> {
    inner: F,
}

impl<F: SelectionFilter> Traced<F> {
    /// Wrap `inner`.
    pub fn new(inner: F) -> Self {
        Traced { inner }
    }

    /// Unwrap and return the inner filter.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: SelectionFilter> SelectionFilter for Traced<F> {
    fn allow_element(&self, element: ElementHandle) -> bool {
        let allowed = self.inner.allow_element(element);
        tracing::trace!(element = element.raw(), allowed, "element gate");
        allowed
    }

    fn allow_reference(&self, reference: ReferenceHandle, hit: Point3) -> bool {
        let allowed = self.inner.allow_reference(reference, hit);
        tracing::trace!(
            reference = reference.raw(),
            x = hit.x,
            y = hit.y,
            z = hit.z,
            allowed,
            "reference gate"
        );
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatecheck_core::select::{AcceptAll, RejectAll};

    #[test]
    fn test_traced_forwards_rejections() {
        let filter = Traced::new(RejectAll);
        assert!(!filter.allow_element(ElementHandle::from_raw(1)));
        assert!(!filter.allow_reference(ReferenceHandle::from_raw(1), Point3::ORIGIN));
    }

    #[test]
    fn test_traced_forwards_acceptances() {
        let filter = Traced::new(AcceptAll);
        assert!(filter.allow_element(ElementHandle::null()));
        assert!(filter.allow_reference(ReferenceHandle::null(), Point3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_into_inner() {
        let filter = Traced::new(RejectAll);
        assert_eq!(filter.into_inner(), RejectAll);
    }
}
