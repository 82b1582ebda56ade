//! Error types for Sediment core.

use crate::record::RecordId;
use crate::segment::SegmentId;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in Sediment core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The relocation index has no entry for a record id that was expected
    /// to be resolvable.
    ///
    /// Every record id reachable through the store when the index was built
    /// must have an entry, so a miss is a contract violation by the index
    /// (stale index, bogus record id, or store corruption), never a normal
    /// outcome. Callers must not interpret this as "not equal".
    #[error("relocation index has no entry for record {id}")]
    RelocationMiss {
        /// The record id that had no relocation entry.
        id: RecordId,
    },

    /// A segment identifier could not be resolved to a live segment.
    #[error("segment not tracked by store: {id}")]
    SegmentNotFound {
        /// The identifier that was not tracked.
        id: SegmentId,
    },
}

impl CoreError {
    /// Creates a relocation miss error.
    #[must_use]
    pub fn relocation_miss(id: RecordId) -> Self {
        Self::RelocationMiss { id }
    }

    /// Creates a segment not found error.
    #[must_use]
    pub fn segment_not_found(id: SegmentId) -> Self {
        Self::SegmentNotFound { id }
    }
}
