//! Fake store fixtures.
//!
//! [`FakeStore`] stands in for the real store in tests: it plays the
//! tracker role (one [`SegmentId`] handle per segment UUID) and holds a
//! swappable relocation index, which is all the identity layer ever asks
//! of a store.

use parking_lot::RwLock;
use sediment_core::{
    CanonicalId, CoreError, CoreResult, Record, RelocationIndex, RelocationTable, Segment,
    SegmentId, SegmentStore,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// An in-memory fake segment store.
///
/// Segments are interned per UUID, so repeated calls to
/// [`FakeStore::segment`] hand back the same identity handle — the
/// tracker guarantee the equality fast path relies on. The relocation
/// index starts absent and can be installed or cleared at any point to
/// simulate compaction cycles.
#[derive(Debug, Default)]
pub struct FakeStore {
    tracked: RwLock<HashMap<Uuid, (SegmentId, Arc<Segment>)>>,
    index: RwLock<Option<Arc<RelocationTable>>>,
}

impl FakeStore {
    /// Creates an empty fake store with no relocation index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity handle for the segment with the given UUID,
    /// creating and tracking it on first use.
    pub fn segment(&self, uuid: Uuid) -> SegmentId {
        let mut tracked = self.tracked.write();
        tracked
            .entry(uuid)
            .or_insert_with(|| {
                let id = SegmentId::new(uuid);
                let segment = Arc::new(Segment::new(id.clone()));
                (id, segment)
            })
            .0
            .clone()
    }

    /// Creates and tracks a segment with a random UUID.
    pub fn fresh_segment(&self) -> SegmentId {
        self.segment(Uuid::new_v4())
    }

    /// Creates a record identity in a tracked segment.
    #[must_use]
    pub fn record(&self, segment: &SegmentId, offset: u32) -> Record {
        Record::new(segment.clone(), offset)
    }

    /// Installs `table` as the active relocation index, replacing any
    /// previous one. Comparisons started before the swap keep the handle
    /// they already fetched.
    pub fn install_index(&self, table: RelocationTable) {
        debug!(entries = table.len(), "relocation index installed");
        *self.index.write() = Some(Arc::new(table));
    }

    /// Removes the active relocation index, returning the store to
    /// raw-address equality.
    pub fn clear_index(&self) {
        *self.index.write() = None;
    }

    /// Returns whether a relocation index is currently active.
    #[must_use]
    pub fn has_index(&self) -> bool {
        self.index.read().is_some()
    }
}

impl SegmentStore for FakeStore {
    fn relocation_index(&self) -> Option<Arc<dyn RelocationIndex>> {
        self.index
            .read()
            .clone()
            .map(|table| table as Arc<dyn RelocationIndex>)
    }

    fn resolve_segment(&self, id: &SegmentId) -> CoreResult<Arc<Segment>> {
        let tracked = self.tracked.read();
        match tracked.get(&id.uuid()) {
            // Only the interned handle resolves; a foreign allocation for
            // the same UUID is not this store's segment.
            Some((tracked_id, segment)) if tracked_id == id => Ok(Arc::clone(segment)),
            _ => Err(CoreError::segment_not_found(id.clone())),
        }
    }
}

/// Returns the canonical identity of the record at `offset` in `segment`,
/// for building relocation tables in tests.
#[must_use]
pub fn canonical_of(segment: &SegmentId, offset: u64) -> CanonicalId {
    CanonicalId::new(segment.msb(), segment.lsb(), offset)
}

/// Runs a test with a fresh fake store.
pub fn with_fake_store<F, R>(f: F) -> R
where
    F: FnOnce(&FakeStore) -> R,
{
    let store = FakeStore::new();
    f(&store)
}
