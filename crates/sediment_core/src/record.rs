//! Record identity values.
//!
//! A record is a logical unit of stored data addressed by
//! `(segment, offset)`. The values here are immutable and non-owning: a
//! [`Record`] holds a [`SegmentId`] handle, never the container bytes, and
//! must not outlive the store's validity guarantees for that segment.

use crate::error::CoreResult;
use crate::segment::{Segment, SegmentId, RECORD_ID_BYTES};
use crate::store::SegmentStore;
use std::fmt;
use std::sync::Arc;

/// The externally visible identifier of a record: `(segment, offset)`.
///
/// Equality and hashing here are **raw-address** based (identity-equal
/// segment handle plus exact offset) and ignore relocation; they exist so
/// record ids can serve as lookup keys and error payloads. Logical
/// equality between records goes through
/// [`fast_equals`](crate::fast_equals).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    segment: SegmentId,
    offset: u32,
}

impl RecordId {
    /// Creates a record id for the given segment and offset.
    #[must_use]
    pub fn new(segment: SegmentId, offset: u32) -> Self {
        Self { segment, offset }
    }

    /// Returns the segment holding the record.
    #[must_use]
    pub fn segment(&self) -> &SegmentId {
        &self.segment
    }

    /// Returns the byte offset of the record within its segment.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.offset, self.segment)
    }
}

/// Identity of one record within a segment.
///
/// Higher-level record types embed a `Record` and derive their field
/// offsets from it. `Record` deliberately implements neither `PartialEq`
/// nor `Hash`: equality semantics depend on the store's relocation state,
/// not on the address alone, so they live in
/// [`fast_equals`](crate::fast_equals) and
/// [`record_hash`](crate::record_hash).
#[derive(Debug, Clone)]
pub struct Record {
    segment: SegmentId,
    offset: u32,
}

impl Record {
    /// Creates an identity value for the record at `offset` in `segment`.
    #[must_use]
    pub fn new(segment: SegmentId, offset: u32) -> Self {
        Self { segment, offset }
    }

    /// Creates an identity value from a record id.
    #[must_use]
    pub fn from_id(id: RecordId) -> Self {
        Self {
            segment: id.segment,
            offset: id.offset,
        }
    }

    /// Returns the identifier of this record.
    #[must_use]
    pub fn id(&self) -> RecordId {
        RecordId::new(self.segment.clone(), self.offset)
    }

    /// Returns the segment holding this record.
    #[must_use]
    pub fn segment_id(&self) -> &SegmentId {
        &self.segment
    }

    /// Returns the segment offset of this record.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the segment offset of the given byte position in this record.
    #[must_use]
    pub fn offset_of(&self, position: u32) -> u32 {
        self.offset + position
    }

    /// Returns the segment offset of a byte position in this record,
    /// calculated from the number of raw bytes and record identifiers
    /// before it.
    ///
    /// The caller is responsible for keeping `bytes` and `ids` within the
    /// record's declared layout; no bounds check against the container's
    /// actual size happens here (that validation belongs to the record
    /// encoding layer).
    #[must_use]
    pub fn offset_of_parts(&self, bytes: u32, ids: u32) -> u32 {
        self.offset_of(bytes + ids * RECORD_ID_BYTES)
    }

    /// Resolves the live segment that contains this record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SegmentNotFound`](crate::CoreError::SegmentNotFound)
    /// if the store does not track this record's segment.
    pub fn segment<S: SegmentStore + ?Sized>(&self, store: &S) -> CoreResult<Arc<Segment>> {
        store.resolve_segment(&self.segment)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
