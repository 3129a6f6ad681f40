//! # restutils core
//!
//! Shared building blocks for the restutils crates:
//!
//! - **Errors**: the crate-wide error enum and `Result` alias
//! - **Constants**: environment variable names and defaults
//! - **Host**: domain-name and IPv4 address validation
//!
//! ## Example
//!
//! ```rust
//! use restutils_core::{validate_host, HostKind};
//!
//! assert_eq!(validate_host("192.168.0.1").unwrap(), HostKind::Ip);
//! assert_eq!(validate_host("example.com").unwrap(), HostKind::Domain);
//! assert!(validate_host("-bad-.com").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod host;

pub use constants::*;
pub use error::{RestUtilsError, Result};
pub use host::{is_valid_domain_name, is_valid_ip_address, validate_host, HostKind};
