//! # restutils cache
//!
//! Generic in-memory cache that records when each entry was last written and
//! evicts entries older than a configured expiry, but only when asked to.
//!
//! Eviction is lazy: `get` keeps returning a stale value until
//! [`ExpiringCache::cleanup`] runs. Use [`ExpiringCache::get_fresh`] when a
//! stale value must not be observed.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use restutils_cache::ExpiringCache;
//!
//! let tokens: ExpiringCache<String, String> = ExpiringCache::with_expiry(Duration::from_secs(300));
//! tokens.set("client-1".to_string(), "secret".to_string());
//! assert_eq!(tokens.get("client-1").as_deref(), Some("secret"));
//!
//! // Called periodically by the owner, e.g. from a scheduler tick.
//! tokens.cleanup();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod cache;
mod clock;
mod config;

pub use cache::{CacheStats, ExpiringCache};
pub use clock::{Clock, SystemClock};
pub use config::CacheConfig;
