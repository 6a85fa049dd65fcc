#![no_main]

use gatecheck::{ElementHandle, Point3, ReferenceHandle, RejectAll, SelectionFilter};
use libfuzzer_sys::fuzz_target;

fn take_u64(data: &[u8], at: usize) -> u64 {
    let mut bytes = [0u8; 8];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = data.get(at + i).copied().unwrap_or(0);
    }
    u64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    // Derive handles and a hit position from the raw bytes; the gates must
    // reject whatever comes out, including bit patterns that decode to NaN.
    let element = ElementHandle::from_raw(take_u64(data, 0));
    let reference = ReferenceHandle::from_raw(take_u64(data, 8));
    let hit = Point3::new(
        f64::from_bits(take_u64(data, 16)),
        f64::from_bits(take_u64(data, 24)),
        f64::from_bits(take_u64(data, 32)),
    );

    assert!(!RejectAll.allow_element(element));
    assert!(!RejectAll.allow_reference(reference, hit));
});
