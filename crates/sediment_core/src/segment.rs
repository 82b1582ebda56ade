//! Segment identity.
//!
//! Segments are immutable, append-only containers holding many records
//! contiguously. This module only names them: the segment binary layout,
//! identifier allocation, and garbage collection belong to other layers.
//!
//! ## Invariants
//!
//! - [`SegmentId`] equality is **identity-based**: two handles are equal
//!   only if they come from the same allocation. The store's tracker must
//!   vend exactly one handle per physical segment; handles allocated
//!   separately for the same UUID compare unequal.
//! - A [`SegmentId`] never changes after construction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// Serialized width in bytes of one record identifier inside a record:
/// a 2-byte segment reference number followed by a 4-byte offset.
///
/// Composite records use this to locate embedded child identifiers without
/// re-parsing; see [`Record::offset_of_parts`](crate::Record::offset_of_parts).
pub const RECORD_ID_BYTES: u32 = 6;

#[derive(Debug)]
struct SegmentIdInner {
    uuid: Uuid,
}

/// Identity handle for one live segment.
///
/// Cheap to clone; all clones of one handle compare equal, while a handle
/// allocated independently for the same UUID does not. This matches the
/// tracker contract above and keeps the no-relocation equality fast path a
/// single pointer comparison.
#[derive(Debug, Clone)]
pub struct SegmentId {
    inner: Arc<SegmentIdInner>,
}

impl SegmentId {
    /// Creates a new segment identity for the given UUID.
    ///
    /// Callers other than the store's tracker (or a test fake standing in
    /// for it) should not create handles; they should obtain them from the
    /// store so that identity comparison is meaningful.
    #[must_use]
    pub fn new(uuid: Uuid) -> Self {
        Self {
            inner: Arc::new(SegmentIdInner { uuid }),
        }
    }

    /// Returns the segment's UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.inner.uuid
    }

    /// Returns the most significant 64 bits of the segment UUID.
    ///
    /// Relocation keys and canonical triples are built from this pair, so
    /// they survive handle re-allocation across store restarts.
    #[must_use]
    pub fn msb(&self) -> u64 {
        self.inner.uuid.as_u64_pair().0
    }

    /// Returns the least significant 64 bits of the segment UUID.
    #[must_use]
    pub fn lsb(&self) -> u64 {
        self.inner.uuid.as_u64_pair().1
    }

    /// Returns the identity hash of this handle.
    ///
    /// Stable for the lifetime of the handle's allocation, consistent with
    /// identity equality, and deliberately independent of the UUID.
    #[must_use]
    pub fn identity_hash(&self) -> u64 {
        Arc::as_ptr(&self.inner) as usize as u64
    }
}

impl PartialEq for SegmentId {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for SegmentId {}

impl Hash for SegmentId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.inner) as usize).hash(state);
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.uuid)
    }
}

/// A live segment object resolved from a [`SegmentId`].
///
/// Equality between records never needs this; it exists for the layers
/// above that read record contents out of the container.
#[derive(Debug)]
pub struct Segment {
    /// Identity of this segment.
    pub id: SegmentId,
    /// Current size in bytes.
    pub size: u64,
    /// Whether this segment is sealed (immutable).
    pub sealed: bool,
}

impl Segment {
    /// Creates a new, empty, unsealed segment.
    #[must_use]
    pub fn new(id: SegmentId) -> Self {
        Self {
            id,
            size: 0,
            sealed: false,
        }
    }
}
