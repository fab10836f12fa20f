//! Concurrent Cache Implementation
//!
//! This module provides a thread-safe wrapper around the bucket-chain LFU
//! cache.
//!
//! # Architecture
//!
//! The whole cache sits behind a single `parking_lot::Mutex`. Every
//! operation, `get` included, takes the lock for its full duration, so all
//! threads observe one global frequency ordering.
//!
//! ## Why One Lock Instead of Segments?
//!
//! Splitting the key space across independently locked segments would give
//! each segment its own bucket chain and its own minimum. Eviction would then
//! pick the least frequently used key *of one segment*, not of the cache.
//! A single lock keeps the eviction order exactly that of [`LfuCache`](crate::LfuCache).
//!
//! ## Why Mutex Instead of RwLock?
//!
//! Every `get()` promotes the entry to the next frequency bucket, so reads
//! mutate the structure. An `RwLock` would hand out write locks on every
//! access anyway; `Mutex` has less bookkeeping.
//!
//! # Example
//!
//! ```rust
//! use bucket_lfu::concurrent::ConcurrentLfuCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLfuCache::new(1000));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.set(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```
//!
//! # Zero-Copy Access
//!
//! `get()` clones the value so the lock is released before the caller uses
//! it. Use `get_with()` to work on the value while the lock is held instead:
//!
//! ```rust
//! use bucket_lfu::concurrent::ConcurrentLfuCache;
//!
//! let cache = ConcurrentLfuCache::new(10);
//! cache.set("greeting", String::from("hello world"));
//! assert_eq!(cache.get_with(&"greeting", |value| value.len()), Some(11));
//! ```

mod lfu;

pub use self::lfu::ConcurrentLfuCache;
