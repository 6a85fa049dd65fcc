//! Opaque handles for host-owned objects.
//!
//! Hosts identify placed elements and their geometric sub-parts by stable integer ids.
//! These newtypes carry that identity across the plugin boundary without giving plugin
//! code anything to inspect: a handle is compared, stored in a set, or passed back to
//! the host, never dereferenced here.
//!
//! Raw id `0` is reserved as the placeholder ("null") id. Hosts hand it out for
//! degenerate picks, and plugin code can construct it explicitly via [`ElementHandle::null`]
//! or [`ReferenceHandle::null`].

/// Identify an already-placed object in a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Wrap a raw host id.
    ///
    /// ## Parameters
    /// - `raw`: stable id assigned by the host; `0` denotes the placeholder handle.
    pub const fn from_raw(raw: u64) -> Self {
        ElementHandle(raw)
    }

    /// Return the raw host id.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Return the placeholder handle (raw id `0`).
    pub const fn null() -> Self {
        ElementHandle(0)
    }

    /// Check whether this is the placeholder handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Identify a geometric sub-part of an element (e.g. a point on a face or edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceHandle(u64);

impl ReferenceHandle {
    /// Wrap a raw host id.
    ///
    /// ## Parameters
    /// - `raw`: stable id assigned by the host; `0` denotes the placeholder handle.
    pub const fn from_raw(raw: u64) -> Self {
        ReferenceHandle(raw)
    }

    /// Return the raw host id.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Return the placeholder handle (raw id `0`).
    pub const fn null() -> Self {
        ReferenceHandle(0)
    }

    /// Check whether this is the placeholder handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_handle_roundtrip() {
        let handle = ElementHandle::from_raw(42);
        assert_eq!(handle.raw(), 42);
    }

    #[test]
    fn test_element_handle_null() {
        assert!(ElementHandle::null().is_null());
        assert_eq!(ElementHandle::null(), ElementHandle::from_raw(0));
        assert!(!ElementHandle::from_raw(1).is_null());
    }

    #[test]
    fn test_reference_handle_roundtrip() {
        let handle = ReferenceHandle::from_raw(7);
        assert_eq!(handle.raw(), 7);
    }

    #[test]
    fn test_reference_handle_null() {
        assert!(ReferenceHandle::null().is_null());
        assert!(!ReferenceHandle::from_raw(u64::MAX).is_null());
    }

    #[test]
    fn test_handles_are_identity_only() {
        // Equality is raw-id equality, nothing else.
        assert_eq!(ElementHandle::from_raw(3), ElementHandle::from_raw(3));
        assert_ne!(ElementHandle::from_raw(3), ElementHandle::from_raw(4));
    }
}
