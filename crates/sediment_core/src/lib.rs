//! # Sediment Core
//!
//! Record identity and equivalence for a segment-organized, append-only
//! content store.
//!
//! Every stored record is addressed by a pair of segment identity and byte
//! offset. Compaction rewrites live records into new segments, so one
//! logical record may exist at several physical addresses over its lifetime.
//! This crate decides whether two record references denote the same logical
//! record:
//!
//! - [`Record`] is the immutable identity value `(segment, offset)` that
//!   higher-level record types embed.
//! - [`SegmentStore`] is the store context a comparison runs against. It
//!   supplies the active [`RelocationIndex`], if any.
//! - [`fast_equals`] compares two records: a plain address comparison when
//!   no relocation index is active, and a canonical-triple comparison
//!   through the index once compaction has relocated records.
//! - [`record_hash`] hashes by raw address only. See the [`equivalence`]
//!   module docs for the consequences once an index is active.
//!
//! This crate never mutates segments or the relocation index, never decides
//! when compaction runs, and caches nothing. It is a pure comparison and
//! addressing utility over whatever index the store currently holds.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod equivalence;
mod error;
mod record;
mod relocation;
mod segment;
mod store;

pub use equivalence::{fast_equals, record_hash};
pub use error::{CoreError, CoreResult};
pub use record::{Record, RecordId};
pub use relocation::{CanonicalId, RelocationIndex, RelocationTable};
pub use segment::{Segment, SegmentId, RECORD_ID_BYTES};
pub use store::SegmentStore;
