//! Convenience interfaces decoding documents into typed tables.
//!
//! The functions in this module decode a document from a slice, a reader, a
//! path, or every file matching a pattern, and return [`Tables`] of typed rows
//! along with any [`Diagnostic`]s raised on the way.
//!
//! ```
//! use cassette::avec::{Options, decode_path};
//!
//! let decoded = decode_path("rides/morning.fit", &Options::default())?;
//!
//! for record in &decoded.tables.records {
//!     println!("{:?} {:?}", record.timestamp, record.heart_rate);
//! }
//! ```
//!
//! Decoding runs in three steps. Each data message is projected into a typed
//! row by [`dispatch::dispatch`], keyed by global message number. The row is
//! then handed to a [`linker::Linker`], which threads activity and session
//! identifiers across rows. At the end of the document the linker applies the
//! session's sport to every record.

#[cfg(feature = "glob")]
pub mod glob;
pub mod dispatch;
pub mod linker;
pub mod names;
pub mod profile;
pub mod reader;
pub mod rows;
pub mod slice;
pub mod units;

#[cfg(feature = "glob")]
pub use self::glob::{decode as decode_glob, expand_pattern};
pub use reader::{decode as decode_reader, decode_path};
pub use rows::Tables;
pub use slice::decode as decode_slice;

use crate::{
    error::Warning,
    sans::data::{DecodedMessage, Value},
};

/// Derive [`FromFields`] for a struct holding the raw fields of a message.
///
/// # Example
///
/// To receive a value for a message field, add the `field(N)` attribute to an
/// `Option<T>` struct field, where `N` is the field number and `T` implements
/// [`FromValue`]. Values that cannot be represented as `T` are ignored.
///
/// ```
/// #[derive(Debug, Default, FromFields)]
/// struct Record {
///     #[field(253)]
///     timestamp: Option<u32>,
///     #[field(0)]
///     position_lat: Option<i32>,
///     #[field(2)]
///     altitude: Option<u16>,
/// }
/// ```
///
/// To receive values of another shape, supply an accumulator closure. The
/// second argument must be typed as `&Value`.
///
/// ```
/// #[derive(Debug, Default, FromFields)]
/// struct UserProfile {
///     #[field(23, |id, v: &Value| if let Value::Bytes(b) = v {
///         *id = Some(b.iter().rev().fold(0, |acc, x| acc << 8 | *x as u64))
///     })]
///     global_id: Option<u64>,
/// }
/// ```
pub use cassette_derive::FromFields;

/// Receive the field values of a message.
///
/// See the [`FromFields`](macro@FromFields) derive macro for an automatic
/// implementation of this trait.
pub trait FromFields {
    /// Add the value of a field to the message.
    fn add_field(&mut self, field: u8, value: &Value);

    /// Build from every field of a decoded message.
    fn from_message(message: &DecodedMessage) -> Self
    where
        Self: Default,
    {
        let mut fields = Self::default();
        for (field, value) in &message.fields {
            fields.add_field(*field, value);
        }
        fields
    }
}

/// Conversion from a decoded field value, accepting any base type that
/// represents the value losslessly.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value_integer {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    <$t>::try_from(value.as_i128()?).ok()
                }
            }
        )*
    };
}

from_value_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|x| x as f32)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }
}

/// Runtime options for a decode.
#[derive(Debug, Clone)]
pub struct Options {
    /// Tag stamped on every row and diagnostic. Path-based decodes default it
    /// to the path when empty.
    pub file_source: String,
    /// Compare header and document check values.
    pub verify_checksum: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_source: String::new(),
            verify_checksum: true,
        }
    }
}

impl Options {
    pub fn with_file_source(mut self, file_source: impl Into<String>) -> Self {
        self.file_source = file_source.into();
        self
    }

    pub fn with_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }
}

/// A warning raised while decoding a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_source: String,
    pub warning: Warning,
}

/// The result of decoding one or more documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub tables: Tables,
    pub diagnostics: Vec<Diagnostic>,
}

impl Decoded {
    /// Move the rows and diagnostics of another result to the end of this one.
    pub fn append(&mut self, other: &mut Decoded) {
        self.tables.append(&mut other.tables);
        self.diagnostics.append(&mut other.diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_convert_when_lossless() {
        assert_eq!(u16::from_value(&Value::U8(7)), Some(7));
        assert_eq!(u8::from_value(&Value::U16(300)), None);
        assert_eq!(i8::from_value(&Value::I32(-4)), Some(-4));
        assert_eq!(u32::from_value(&Value::I8(-1)), None);
        assert_eq!(u8::from_value(&Value::F32(1.0)), None);
    }

    #[test]
    fn floats_and_strings() {
        assert_eq!(f64::from_value(&Value::U32(5)), Some(5.0));
        assert_eq!(f32::from_value(&Value::F64(0.5)), Some(0.5));
        assert_eq!(
            String::from_value(&Value::String("Edge".into())),
            Some("Edge".to_string())
        );
        assert_eq!(String::from_value(&Value::U8(1)), None);
    }

    #[derive(Debug, Default, FromFields)]
    struct Sample {
        #[field(0)]
        count: Option<u16>,
        #[field(1, |names, v: &Value| if let Some(s) = v.as_str() {
            names.push(s.to_string())
        })]
        names: Vec<String>,
        unannotated: Option<u8>,
    }

    #[test]
    fn derived_fields() {
        let message = DecodedMessage {
            fields: [
                (0, Value::U8(3)),
                (1, Value::String("left".into())),
                (2, Value::U8(9)),
            ]
            .into(),
            ..Default::default()
        };

        let sample = Sample::from_message(&message);
        assert_eq!(sample.count, Some(3));
        assert_eq!(sample.names, vec!["left".to_string()]);
        assert_eq!(sample.unannotated, None);
    }
}
