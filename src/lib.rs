//! chained-hashtable: a single-threaded hash table built from a bucket
//! array and per-bucket collision chains.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: O(1) expected put/get/remove over unique keys, with the bucket
//!   layout kept explicit so it can be inspected and resized on demand.
//! - Layers (leaves first):
//!   - `index`: maps a key hash to a slot in `[0, capacity)`. Every
//!     operation and every rehash goes through it.
//!   - `chain`: the bucket array. Slots hold the arena key of a chain head;
//!     nodes live in a `slotmap` arena and link to their successor by key,
//!     so each chain is owned by its slot without raw pointers.
//!   - `growth`: decides, before each put, whether the array doubles.
//!   - `hash_table`: the public `HashTable` operations.
//!   - `render`: a bucket-by-bucket text dump via `Display`.
//!
//! Constraints
//! - Single-threaded: no interior synchronization. Callers that share a
//!   table across threads must wrap it themselves.
//! - Keys are unique: a put on a present key overwrites the value in place.
//! - Capacity only grows automatically; `resize` may set any positive size.
//! - Capacity 0 is rejected at construction and in `resize`.
//!
//! Hasher and rehashing invariants
//! - Each entry stores the `u64` hash computed at insertion. Resizing
//!   relinks entries using the stored hash, so `K: Hash` is never invoked
//!   after insertion and the new bucket array replaces the old one in a
//!   single step.
//! - Lookups compare the stored hash before calling `K: Eq`.
//!
//! Notes and non-goals
//! - Iteration follows bucket layout and changes on resize; there is no
//!   stable order.
//! - No shrink-on-remove and no persistence.
//! - With the `logging` feature, growth and explicit resizes emit `log`
//!   records.

mod chain;
mod config;
mod error;
mod growth;
mod hash_table;
mod hash_table_proptest;
pub mod index;
mod render;
#[cfg(test)]
mod test_utils;

// Public surface
pub use chain::{Iter, ValuesMut};
pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
pub use error::TableError;
pub use hash_table::HashTable;
