//! A decoder turning Garmin's Flexible and Interoperable Data Transfer files
//! into typed activity tables.
//!
//! Cassette decodes FIT documents into seven tables (records, activities,
//! sessions, laps, devices, events, and user profiles), with units converted
//! and absent values left as `None`, ready for loading into a query engine.
//!
//! Most users should begin with the functions in the [`avec`] module. The
//! protocol layer beneath them, yielding one generic message per data message,
//! is exposed in the [`sans`] module for applications needing messages outside
//! the seven tables.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `glob`: enable decoding every file matching a pattern (default).

extern crate self as cassette;

pub mod avec;
pub mod error;
pub mod sans;

pub use error::{Error, FramingError, Result, Warning};
