//! Store context for identity operations.

use crate::error::CoreResult;
use crate::relocation::RelocationIndex;
use crate::segment::{Segment, SegmentId};
use std::sync::Arc;

/// The store context a comparison or resolution runs against.
///
/// Every operation in this crate takes the store explicitly instead of
/// reaching through ambient state, so callers can substitute fakes and the
/// dependency stays visible.
///
/// # Invariants
///
/// - `relocation_index` hands out an owned snapshot handle. The store may
///   install a new index at any time, but an already-returned handle must
///   keep answering lookups against the state it was built from; both
///   lookups inside one equality check go through a single handle.
/// - `resolve_segment` vends exactly one [`SegmentId`] allocation per
///   physical segment, so identity comparison of handles is meaningful.
/// - Implementations must be safe to call concurrently; nothing in this
///   crate mutates the store.
pub trait SegmentStore: Send + Sync {
    /// Returns the active relocation index, or `None` when no compaction
    /// has relocated records (or relocation is not tracked).
    fn relocation_index(&self) -> Option<Arc<dyn RelocationIndex>>;

    /// Resolves a segment identifier to the live segment object.
    ///
    /// Equality never needs this; it exists for the layers above that read
    /// record contents.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SegmentNotFound`](crate::CoreError::SegmentNotFound)
    /// if the store does not track `id`.
    fn resolve_segment(&self, id: &SegmentId) -> CoreResult<Arc<Segment>>;
}
