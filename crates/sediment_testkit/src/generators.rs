//! Property-based test generators using proptest.
//!
//! Records are generated as `(segment index, offset)` coordinates rather
//! than as `Record` values, because identity handles only mean something
//! relative to one store; tests turn coordinates into records through a
//! [`FakeStore`](crate::FakeStore) they construct themselves.

use proptest::prelude::*;
use sediment_core::CanonicalId;

/// Strategy for record offsets within a segment.
pub fn offset_strategy() -> impl Strategy<Value = u32> {
    0u32..=0x00ff_ffff
}

/// Strategy for record coordinates over `segment_count` segments.
///
/// # Panics
///
/// Panics if `segment_count` is zero.
pub fn record_coords_strategy(segment_count: usize) -> impl Strategy<Value = (usize, u32)> {
    assert!(segment_count > 0, "need at least one segment");
    (0..segment_count, offset_strategy())
}

/// Strategy for arbitrary canonical identities.
pub fn canonical_id_strategy() -> impl Strategy<Value = CanonicalId> {
    (any::<u64>(), any::<u64>(), any::<u64>())
        .prop_map(|(msb, lsb, offset)| CanonicalId::new(msb, lsb, offset))
}
