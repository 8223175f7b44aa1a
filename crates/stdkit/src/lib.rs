//! Stdkit - Small support helpers.
//!
//! Independent, stateless (or nearly so) utilities:
//!
//! - [`strings`]: camel casing, prefix checks, padded and trimmed splitting,
//!   width-aware truncation
//! - [`CsvWriter`]: CSV output for rows of serializable records
//! - [`ExponentialBackoff`]: retrying with doubling wait times, configurable
//!   through [`BackoffConfig`]
//! - [`OrderedValues`]: values yielded by an explicit integer order
//! - [`MessageContainer`]: collecting user-facing messages, reported by
//!   [`Validator`]s
//! - [`group_by`]: grouping consecutive items of a sorted sequence
//!
//! Filter trees live in the companion `stdkit-filter` crate.
//!
//! # Logging
//!
//! Retries are reported through [`tracing`]. Install a subscriber in the
//! application to see them; the library never installs one.

mod backoff;
mod csv_writer;
mod error;
mod groups;
mod messages;
mod order;
pub mod strings;

// Re-export public API
pub use backoff::{BackoffConfig, ExponentialBackoff, DEFAULT_MAX_MS, DEFAULT_MIN_MS};
pub use csv_writer::CsvWriter;
pub use error::{BackoffError, CsvError};
pub use groups::{group_by, GroupBy};
pub use messages::{MessageContainer, Messages, Validator};
pub use order::OrderedValues;
