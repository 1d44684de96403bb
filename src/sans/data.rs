//! Base types, field values, and decoding of data messages.

use std::collections::BTreeMap;

use super::{
    cursor::{Cursor, EndOfData, Endian, Primitive},
    definition::{MessageDefinition, Registry},
};

/// Field number of the timestamp common to most messages.
pub const TIMESTAMP_FIELD: u8 = 253;

/// The storage type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Enum,
    SInt8,
    UInt8,
    SInt16,
    UInt16,
    SInt32,
    UInt32,
    String,
    Float32,
    Float64,
    UInt8z,
    UInt16z,
    UInt32z,
    Byte,
    SInt64,
    UInt64,
    UInt64z,
}

impl BaseType {
    /// Interpret a base type byte.
    ///
    /// Only the low five bits (the base type number) are significant; the
    /// endian-ability flag in bit 7 follows from the number.
    pub fn from_byte(r: u8) -> Option<Self> {
        Some(match r & 0x1F {
            0 => Self::Enum,
            1 => Self::SInt8,
            2 => Self::UInt8,
            3 => Self::SInt16,
            4 => Self::UInt16,
            5 => Self::SInt32,
            6 => Self::UInt32,
            7 => Self::String,
            8 => Self::Float32,
            9 => Self::Float64,
            10 => Self::UInt8z,
            11 => Self::UInt16z,
            12 => Self::UInt32z,
            13 => Self::Byte,
            14 => Self::SInt64,
            15 => Self::UInt64,
            16 => Self::UInt64z,
            _ => return None,
        })
    }

    /// The base type byte as written in definition messages, with the
    /// endian-ability flag set for multi-byte types.
    pub fn byte(self) -> u8 {
        let number = self as u8;
        if self.width() > 1 { number | 0x80 } else { number }
    }

    /// Width in bytes of a single element.
    pub fn width(self) -> usize {
        match self {
            Self::Enum | Self::SInt8 | Self::UInt8 | Self::UInt8z => 1,
            Self::String | Self::Byte => 1,
            Self::SInt16 | Self::UInt16 | Self::UInt16z => 2,
            Self::SInt32 | Self::UInt32 | Self::UInt32z | Self::Float32 => 4,
            Self::SInt64 | Self::UInt64 | Self::UInt64z | Self::Float64 => 8,
        }
    }
}

/// A decoded field value.
///
/// Values never hold their base type's 'invalid' marker. Scalar fields holding
/// it are omitted from a [`DecodedMessage`] entirely, as are arrays whose every
/// element holds it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    /// The elements of an array field, in position. Invalid elements are `None`.
    Array(Vec<Option<Value>>),
}

impl Value {
    /// The value itself, or the first element of an array if it is valid.
    pub fn first(&self) -> Option<&Value> {
        match self {
            Self::Array(values) => values.first()?.as_ref(),
            value => Some(value),
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_i128(&self) -> Option<i128> {
        Some(match self.first()? {
            Self::U8(x) => *x as i128,
            Self::U16(x) => *x as i128,
            Self::U32(x) => *x as i128,
            Self::U64(x) => *x as i128,
            Self::I8(x) => *x as i128,
            Self::I16(x) => *x as i128,
            Self::I32(x) => *x as i128,
            Self::I64(x) => *x as i128,
            _ => return None,
        })
    }

    /// The value as a floating point number, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self.first()? {
            Self::F32(x) => Some(*x as f64),
            Self::F64(x) => Some(*x),
            value => value.as_i128().map(|x| x as f64),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Decode the bytes of a single field, or `None` if every element holds the
/// base type's 'invalid' marker.
pub fn decode_field(base_type: BaseType, r: &[u8], endian: Endian) -> Option<Value> {
    match base_type {
        BaseType::Enum | BaseType::UInt8 => collect(r, endian, |x: u8| x == u8::MAX, Value::U8),
        BaseType::UInt8z => collect(r, endian, |x: u8| x == 0, Value::U8),
        BaseType::UInt16 => collect(r, endian, |x: u16| x == u16::MAX, Value::U16),
        BaseType::UInt16z => collect(r, endian, |x: u16| x == 0, Value::U16),
        BaseType::UInt32 => collect(r, endian, |x: u32| x == u32::MAX, Value::U32),
        BaseType::UInt32z => collect(r, endian, |x: u32| x == 0, Value::U32),
        BaseType::UInt64 => collect(r, endian, |x: u64| x == u64::MAX, Value::U64),
        BaseType::UInt64z => collect(r, endian, |x: u64| x == 0, Value::U64),

        BaseType::SInt8 => collect(r, endian, |x: i8| x == i8::MAX, Value::I8),
        BaseType::SInt16 => collect(r, endian, |x: i16| x == i16::MAX, Value::I16),
        BaseType::SInt32 => collect(r, endian, |x: i32| x == i32::MAX, Value::I32),
        BaseType::SInt64 => collect(r, endian, |x: i64| x == i64::MAX, Value::I64),

        BaseType::Float32 => collect(r, endian, |x: f32| x.to_bits() == u32::MAX, Value::F32),
        BaseType::Float64 => collect(r, endian, |x: f64| x.to_bits() == u64::MAX, Value::F64),

        BaseType::String => {
            let s = Cursor::new(r).read_string(r.len()).ok()?;
            (!s.is_empty()).then(|| Value::String(s.into_owned()))
        }
        BaseType::Byte => match r {
            _ if r.iter().all(|b| *b == 0xFF) => None,
            [b] => Some(Value::U8(*b)),
            _ => Some(Value::Bytes(r.to_vec())),
        },
    }
}

/// Read every element of a field, keeping the position of those holding the
/// 'invalid' marker.
fn collect<T: Primitive>(
    r: &[u8],
    endian: Endian,
    is_invalid: fn(T) -> bool,
    into: fn(T) -> Value,
) -> Option<Value> {
    let mut cursor = Cursor::new(r);
    let mut values = Vec::new();

    while cursor.bytes_remaining() > 0 {
        let x = cursor.read::<T>(endian).ok()?;
        values.push((!is_invalid(x)).then(|| into(x)));
    }

    if values.iter().all(Option::is_none) {
        return None;
    }

    if values.len() == 1 {
        return values.pop().flatten();
    }

    Some(Value::Array(values))
}

/// A developer field value from a data message.
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperValue {
    pub developer_data_index: u8,
    pub number: u8,
    /// Name from the matching field description, if one was received.
    pub name: Option<String>,
    pub value: Value,
}

/// The valid fields of one data message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedMessage {
    pub global: u16,
    pub local: u8,
    /// Field values keyed by field number.
    pub fields: BTreeMap<u8, Value>,
    pub developer_fields: Vec<DeveloperValue>,
}

impl DecodedMessage {
    pub fn get(&self, field: u8) -> Option<&Value> {
        self.fields.get(&field)
    }

    /// The absolute timestamp field, in seconds since the FIT epoch.
    pub fn timestamp(&self) -> Option<u32> {
        self.get(TIMESTAMP_FIELD)
            .and_then(Value::as_i128)
            .and_then(|t| u32::try_from(t).ok())
    }
}

/// Decode a data message laid out by `definition` from the tip of the cursor.
pub fn decode_data(
    definition: &MessageDefinition,
    registry: &Registry,
    cursor: &mut Cursor<'_>,
) -> Result<DecodedMessage, EndOfData> {
    let mut message = DecodedMessage {
        global: definition.global,
        local: definition.local,
        ..Default::default()
    };

    for field in &definition.fields {
        let r = cursor.read_bytes(field.size as usize)?;

        // Skipped definitions still occupy their bytes.
        let Some(base_type) = field.base_type else {
            continue;
        };

        if let Some(value) = decode_field(base_type, r, definition.endian) {
            message.fields.insert(field.number, value);
        }
    }

    for field in &definition.developer_fields {
        let r = cursor.read_bytes(field.size as usize)?;

        let description = registry.developer_field(field.developer_data_index, field.number);

        let value = match description.and_then(|d| d.base_type) {
            Some(base_type) if r.len() % base_type.width() == 0 => {
                decode_field(base_type, r, definition.endian)
            }
            _ => decode_field(BaseType::Byte, r, definition.endian)
                .map(|v| match v {
                    Value::U8(b) => Value::Bytes(vec![b]),
                    v => v,
                }),
        };

        if let Some(value) = value {
            message.developer_fields.push(DeveloperValue {
                developer_data_index: field.developer_data_index,
                number: field.number,
                name: description.and_then(|d| d.name.clone()),
                value,
            });
        }
    }

    Ok(message)
}
