//! Fixed-capacity string-keyed hash map
//!
//! This crate provides a hash map whose capacity is decided once, at
//! construction. The bucket array is sized to the next power of two and never
//! reallocated; once the map holds `capacity` distinct keys, inserting a new
//! key is refused instead of triggering a resize.
//!
//! # Features
//!
//! - **No Resizing**: One bucket-array allocation for the life of the map
//! - **Chained Buckets**: Collisions resolved with per-bucket linked chains
//! - **Supplemental Hashing**: High hash bits are mixed into the low bits
//!   before masking, so weak string hashes still spread out
//! - **Exact Accounting**: `size()` counts distinct keys; updates and failed
//!   deletes leave it alone
//! - **Flexible Hashing**: Support for custom hash builders
//!
//! # Example
//!
//! ```rust
//! use fixcap_map::FixedCapacityHashMap;
//!
//! let mut map = FixedCapacityHashMap::new(1000)?;
//!
//! for i in 0..1000 {
//!     assert!(map.set(&format!("key{}", i), format!("value{}", i)));
//! }
//!
//! // Full: new keys are refused, existing keys can still be updated.
//! assert!(!map.set("tooManyKeys", "x".to_string()));
//! assert!(map.set("key0", "updated".to_string()));
//!
//! for i in 0..500 {
//!     map.delete(&format!("key{}", i));
//! }
//! assert_eq!(map.load(), 0.5);
//! # Ok::<(), fixcap_map::Error>(())
//! ```
//!
//! # Concurrency
//!
//! The map has no internal synchronization. It is `Send` and `Sync` when its
//! value and hasher types are, so shared use goes through a single lock held
//! for each whole operation (e.g. `Mutex<FixedCapacityHashMap<V>>`).

#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bucket;
mod error;
pub mod hash;
mod map;

pub use error::Error;
pub use hash::{DefaultHashBuilder, Polynomial31};
pub use map::{ChainStats, FixedCapacityHashMap};
