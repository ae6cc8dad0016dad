#![forbid(unsafe_code)]

//! `patlayout` - Pattern layout engine for structured log events.
//!
//! Renders a [`LogEvent`] to text according to a printf-like pattern:
//! - Conversion directives (`%p` level, `%c` category, `%m` message data,
//!   `%d` date, `%r` time, `%n` line separator, `%%` literal percent)
//! - Per-directive padding and truncation (`%5.2p`, `%-8c`)
//! - Brace specifiers refining a directive (`%d{ISO8601}`, `%c{2}`)
//! - printf-style `%s`/`%d`/`%j` substitution inside message data
//!
//! Sinks, category trees, and level filtering live in the consuming logging
//! framework; this crate only compiles patterns and renders strings.
//!
//! # Example
//!
//! ```
//! use patlayout::{LogEvent, PatternLayout};
//!
//! let layout = PatternLayout::new("%-5p %c - %m%n").eol("\n");
//! let event = LogEvent::new("net.server", "info")
//!     .data("listening on port %d")
//!     .data(8080);
//!
//! assert!(layout.format(&event).ends_with("net.server - listening on port 8080\n"));
//! ```

pub mod date;
pub mod event;
mod internal;
pub mod layout;

// Re-exports for convenience
pub use event::{ErrorValue, LogEvent, Value};
pub use layout::token::{Alignment, Conv, Padding, Token};
pub use layout::{DEFAULT_PATTERN, PatternLayout};
