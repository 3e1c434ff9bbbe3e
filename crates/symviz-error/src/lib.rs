//! # symviz-error
//!
//! Unified error handling for symviz.
//!
//! - **ErrorKind**: what went wrong (e.g. `ConfigInvalid`, `DeserializationFailed`)
//! - **Operation**: which stage raised it (e.g. `symbol::decode`)
//! - **Context**: key/value pairs that help locate the cause
//! - **Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use symviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ConfigInvalid, "unknown backend")
//!         .with_operation("render::dispatch")
//!         .with_context("backend", "svg"))
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using symviz Error
pub type Result<T> = std::result::Result<T, Error>;
