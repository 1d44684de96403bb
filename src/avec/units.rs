//! Conversions from raw profile units.

use chrono::{DateTime, Utc};

/// Seconds between the Unix epoch and the FIT epoch (1989-12-31T00:00:00Z).
pub const FIT_EPOCH_OFFSET: i64 = 631_065_600;

const DEGREES_PER_SEMICIRCLE: f64 = 180.0 / (1u64 << 31) as f64;

/// Convert seconds since the FIT epoch to an absolute time.
pub fn fit_time(seconds: u32) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds as i64 + FIT_EPOCH_OFFSET, 0)
}

/// Convert a semicircle angle to degrees.
///
/// The sint32 'invalid' marker converts to `None`, never to a coordinate.
pub fn semicircles_to_degrees(semicircles: i32) -> Option<f64> {
    (semicircles != i32::MAX).then(|| semicircles as f64 * DEGREES_PER_SEMICIRCLE)
}

pub fn degrees_to_semicircles(degrees: f64) -> i32 {
    (degrees / DEGREES_PER_SEMICIRCLE).round() as i32
}

/// Apply a profile scale and offset: `raw / scale - offset`.
pub fn scale<T: Into<f64>>(raw: Option<T>, scale: f64, offset: f64) -> Option<f64> {
    raw.map(|x| x.into() / scale - offset)
}
