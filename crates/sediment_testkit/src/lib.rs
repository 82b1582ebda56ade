//! # Sediment Testkit
//!
//! Test utilities for Sediment.
//!
//! This crate provides:
//! - A fake segment store with an interning tracker and a swappable
//!   relocation index
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use sediment_core::fast_equals;
//! use sediment_testkit::prelude::*;
//!
//! let store = FakeStore::new();
//! let segment = store.fresh_segment();
//! let record = store.record(&segment, 64);
//! assert!(fast_equals(&record, &record, &store).unwrap());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
