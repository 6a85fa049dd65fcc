//! Selection gates consulted by a host picking loop.
//!
//! During an interactive pick the host offers each candidate to the active filter
//! before highlighting or accepting it. The host's selection protocol distinguishes
//! whole elements from geometric sub-references (a point on a face, a spot on an
//! edge), so the two gates are independent: a filter can admit elements while
//! suppressing sub-references, or the other way round.
//!
//! Implement [`SelectionFilter`] to define a gating strategy. The constant filters
//! [`RejectAll`] and [`AcceptAll`] cover the two ends of the spectrum: disabling
//! selection entirely (e.g. when a view click should only supply a position) and
//! gating nothing.

use crate::geom::Point3;
use crate::handle::{ElementHandle, ReferenceHandle};

/// A gating strategy for interactive selection.
///
/// Both gates must be pure: no side effects, no failure mode, the same verdict for
/// the same input however often and from however many threads they are called.
/// The host calls them on every candidate under the cursor, so they sit on a hot
/// path and should stay cheap.
pub trait SelectionFilter {
    /// Decide whether an already-placed element may be selected.
    fn allow_element(&self, element: ElementHandle) -> bool;

    /// Decide whether a geometric sub-reference may be selected.
    ///
    /// ## Parameters
    /// - `reference`: the sub-part the host is offering.
    /// - `hit`: where the pick ray met it, in model coordinates.
    fn allow_reference(&self, reference: ReferenceHandle, hit: Point3) -> bool;
}

impl<F: SelectionFilter + ?Sized> SelectionFilter for &F {
    fn allow_element(&self, element: ElementHandle) -> bool {
        (**self).allow_element(element)
    }

    fn allow_reference(&self, reference: ReferenceHandle, hit: Point3) -> bool {
        (**self).allow_reference(reference, hit)
    }
}

impl<F: SelectionFilter + ?Sized> SelectionFilter for Box<F> {
    fn allow_element(&self, element: ElementHandle) -> bool {
        (**self).allow_element(element)
    }

    fn allow_reference(&self, reference: ReferenceHandle, hit: Point3) -> bool {
        (**self).allow_reference(reference, hit)
    }
}

/// Reject every candidate, element or sub-reference.
///
/// Used to disable interactive selection entirely: the user can still click in a
/// view for directional or positional input, but nothing gets snapped, highlighted,
/// or selected along the way. Neither input is inspected, so both gates are total
/// over degenerate and placeholder handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectAll;

impl SelectionFilter for RejectAll {
    fn allow_element(&self, _element: ElementHandle) -> bool {
        false
    }

    fn allow_reference(&self, _reference: ReferenceHandle, _hit: Point3) -> bool {
        false
    }
}

/// Admit every candidate; the filter a session uses when it gates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcceptAll;

impl SelectionFilter for AcceptAll {
    fn allow_element(&self, _element: ElementHandle) -> bool {
        true
    }

    fn allow_reference(&self, _reference: ReferenceHandle, _hit: Point3) -> bool {
        true
    }
}
