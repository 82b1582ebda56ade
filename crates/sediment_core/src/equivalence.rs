//! Logical equality and hashing for record identities.
//!
//! Equality between two records depends on the store's relocation state,
//! so it lives here rather than on [`Record`] itself:
//!
//! - with no relocation index active, two records are equal iff their raw
//!   addresses match — one segment-identity comparison plus one offset
//!   comparison, no lookup of any kind;
//! - with an index active, both record ids are resolved to canonical
//!   triples through a single index snapshot and the triples are compared
//!   component-wise.
//!
//! ## hash / equals divergence
//!
//! [`record_hash`] hashes by raw address only and never consults the
//! relocation index. Before any index is active this is consistent with
//! [`fast_equals`]; once an index is installed, two records that compare
//! equal through the index may still hash differently if their raw
//! addresses differ. Hash-keyed containers holding records across a
//! compaction cycle must account for this. The divergence is deliberate
//! and regression-tested, not a bug to fix here: recomputing hashes
//! through the index would change observable container behavior, a call
//! that belongs to the store, not to this layer.

use crate::error::CoreResult;
use crate::record::Record;
use crate::store::SegmentStore;
use tracing::trace;

/// Decides whether `a` and `b` denote the same logical record under
/// `store`'s current relocation state.
///
/// Symmetric and reflexive by construction. Stateless: every call reads
/// the store's index afresh, and both lookups within one call observe the
/// same index snapshot.
///
/// # Errors
///
/// Returns [`CoreError::RelocationMiss`](crate::CoreError::RelocationMiss)
/// when an active index has no entry for either record id. There is no
/// fallback to raw-address comparison: silently doing so would under- or
/// over-merge logically distinct records, and the caller is better placed
/// to decide whether the index is stale or the store corrupted.
pub fn fast_equals<S>(a: &Record, b: &Record, store: &S) -> CoreResult<bool>
where
    S: SegmentStore + ?Sized,
{
    let Some(index) = store.relocation_index() else {
        return Ok(a.segment_id() == b.segment_id() && a.offset() == b.offset());
    };

    trace!(a = %a, b = %b, "resolving records through relocation index");
    let a_canonical = index.lookup(&a.id())?;
    let b_canonical = index.lookup(&b.id())?;
    Ok(a_canonical == b_canonical)
}

/// Hashes a record by its raw address: the segment handle's identity hash
/// XOR the offset.
///
/// Never consults the relocation index; see the module docs for what that
/// means once an index is active.
#[must_use]
pub fn record_hash(record: &Record) -> u64 {
    record.segment_id().identity_hash() ^ u64::from(record.offset())
}
