//! Error types for the Tessera inference pipeline.
//!
//! This crate provides the foundation error types used throughout the Tessera
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use tessera_error::{TesseraResult, InferenceError, InferenceErrorKind};
//!
//! fn select() -> TesseraResult<()> {
//!     Err(InferenceError::new(InferenceErrorKind::Transport(
//!         "connection refused".into(),
//!     )))?
//! }
//!
//! match select() {
//!     Ok(_) => println!("selected"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coercion;
mod configuration;
mod error;
mod inference;
mod not_found;
mod schema;

pub use coercion::{CoercionError, CoercionErrorKind};
pub use configuration::{ConfigurationError, ConfigurationErrorKind};
pub use error::{TesseraError, TesseraErrorKind, TesseraResult};
pub use inference::{InferenceError, InferenceErrorKind};
pub use not_found::{NotFoundError, NotFoundErrorKind};
pub use schema::{SchemaError, SchemaErrorKind};
