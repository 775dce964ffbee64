//! # lrukit
//!
//! Fixed-capacity key-value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1))
//! - **LRU List**: Doubly-linked list over arena slots for recency (O(1))
//! - **Eviction**: Inserting a new key into a full cache drops the tail
//!
//! ## Example
//! ```
//! use lrukit::{Error, LruCache};
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a").unwrap(); // "a" is now most recently used
//! cache.put("c", 3);        // evicts "b"
//!
//! assert_eq!(cache.get(&"b"), Err(Error::NotFound));
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), ["c", "a"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod lru;

pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use lru::{Iter, Keys, LruCache};
