//! # lrumap
//!
//! Bounded key-value map with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1))
//! - **LRU List**: doubly-linked list threaded through the arena by slot number (O(1))
//! - **Views**: lazy head-to-tail traversal of keys, values and entries
//!
//! Only inserting a new key moves an entry to the head. Reads leave the order
//! alone, and so do updates unless [`UpdatePolicy::Promote`] is configured.
//!
//! The map is not synchronized; wrap it in a mutex to share it across threads.
//!
//! ```
//! use lrumap::LruMap;
//!
//! let mut cache = LruMap::new(2)?;
//! cache.set("a", 1).set("b", 2).set("c", 3);
//!
//! assert!(!cache.has("a"));
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["c", "b"]);
//! # Ok::<(), lrumap::Error>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod iter;
mod lru;
mod stats;

pub use config::{LruConfig, UpdatePolicy, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use iter::{Iter, Keys, Values};
pub use lru::LruMap;
pub use stats::CacheStats;
