//! Error types for the Arbiter library.
//!
//! This crate provides the foundation error types used throughout the Arbiter
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use arbiter_error::{ArbiterResult, ConfigError};
//!
//! fn load_settings() -> ArbiterResult<String> {
//!     Err(ConfigError::new("missing model name"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Loaded: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod model;
mod signal;

pub use config::ConfigError;
pub use error::{ArbiterError, ArbiterErrorKind, ArbiterResult};
pub use model::{ModelError, ModelErrorKind};
pub use signal::RateLimitSignal;
