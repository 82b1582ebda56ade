//! Relocation index query surface.
//!
//! Compaction rewrites live records into new segments, so a record id that
//! was valid before a compaction cycle may no longer name the record's
//! physical location. The store maintains a relocation index mapping every
//! pre-compaction record id to the canonical triple where the logical
//! record now lives. This module owns only the read side of that index:
//! building and maintaining it belongs to the compaction machinery.
//!
//! ## Invariants
//!
//! - An index is total over every record id that was live when it was
//!   built; a miss is a contract violation, surfaced as
//!   [`CoreError::RelocationMiss`], never as "not equal".
//! - This layer never mutates an installed index; it is a read-only
//!   snapshot for the duration of one comparison.

use crate::error::{CoreError, CoreResult};
use crate::record::RecordId;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical post-relocation identity of a record:
/// `(segment msb, segment lsb, offset)`.
///
/// Built from UUID halves rather than segment handles so it stays
/// comparable across handle re-allocations; this is the ground truth for
/// logical equality once an index is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalId {
    /// Most significant 64 bits of the canonical segment UUID.
    pub segment_msb: u64,
    /// Least significant 64 bits of the canonical segment UUID.
    pub segment_lsb: u64,
    /// Offset of the record within the canonical segment.
    pub offset: u64,
}

impl CanonicalId {
    /// Creates a canonical identity from its components.
    #[must_use]
    pub const fn new(segment_msb: u64, segment_lsb: u64, offset: u64) -> Self {
        Self {
            segment_msb,
            segment_lsb,
            offset,
        }
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{:016x}{:016x}",
            self.offset, self.segment_msb, self.segment_lsb
        )
    }
}

/// Read-only query surface over the store's relocation index.
///
/// Implementations must be safe to query concurrently and must answer
/// every lookup against the same state for their whole lifetime; the store
/// installs a new index rather than mutating one in place.
pub trait RelocationIndex: Send + Sync {
    /// Resolves a record id to the canonical identity of its logical record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RelocationMiss`] when the index has no entry
    /// for `id`. Per the invariant above this indicates a stale index, a
    /// bogus record id, or store corruption.
    fn lookup(&self, id: &RecordId) -> CoreResult<CanonicalId>;
}

type RelocationKey = (u64, u64, u64);

/// A compact, sorted relocation table.
///
/// Keys are `(segment msb, segment lsb, offset)`, so lookups go by the
/// segment's UUID, not by handle identity: entries written by one
/// compaction cycle stay resolvable for record ids re-created later.
#[derive(Debug, Default)]
pub struct RelocationTable {
    entries: BTreeMap<RelocationKey, CanonicalId>,
}

impl RelocationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the logical record once at `id` now lives at
    /// `canonical`. Replaces any previous entry for `id`.
    pub fn insert(&mut self, id: &RecordId, canonical: CanonicalId) {
        self.entries.insert(Self::key(id), canonical);
    }

    /// Returns the number of relocation entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(id: &RecordId) -> RelocationKey {
        (
            id.segment().msb(),
            id.segment().lsb(),
            u64::from(id.offset()),
        )
    }
}

impl RelocationIndex for RelocationTable {
    fn lookup(&self, id: &RecordId) -> CoreResult<CanonicalId> {
        self.entries
            .get(&Self::key(id))
            .copied()
            .ok_or_else(|| CoreError::relocation_miss(id.clone()))
    }
}
