//! # sentinel-core - Core Domain Types
//!
//! Foundation crate for Sentinel Console. Provides domain types, the inbound
//! stream envelope, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`LogEntry`] - A single rendered log line with severity, origin, and timestamp
//! - [`Severity`] - Presentation severity (Default, Success, Info, Warning, Error)
//! - [`Origin`] - Whether an entry came from the log stream or a local notice
//! - [`FilterState`] - Case-insensitive substring filter
//! - [`Directive`] - A unit of remote work tracked by id, agent, task, and status
//!
//! ### Events (`events`)
//! - [`StreamMessage`] - Parsed inbound envelope (`log`, `directive_update`, `info`)
//! - [`parse_stream_message()`] - Parse one text frame into a [`StreamMessage`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sentinel_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Sentinel Console crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::{parse_stream_message, StreamMessage};
pub use types::{Directive, FilterState, LogEntry, Origin, Severity, StreamKind};
