//! Keyed associative storage
//!
//! A resizable hash table with chained buckets, used throughout the crate to
//! index nodes by label and to track settled nodes during a search. Inserts,
//! lookups, and removals are O(1) amortized; the table doubles its bucket
//! count before an insert would reach the load-factor threshold.

pub mod keyed;

pub use keyed::{KeyedStore, StoreError, StoreResult, DEFAULT_CAPACITY, LOAD_FACTOR};
