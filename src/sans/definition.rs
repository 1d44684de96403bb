//! Definition messages and the per-document registry of active layouts.

use std::collections::BTreeMap;

use zerocopy::FromBytes;

use crate::error::Warning;

use either::Either::Left;

use super::{
    cursor::{Cursor, EndOfData, Endian},
    data::{BaseType, DecodedMessage, Value},
    header::{DefinitionHeader, parse_record_header},
};

/// Global message number of developer field descriptions.
pub const FIELD_DESCRIPTION: u16 = 206;

/// Layout of one field within a data message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub number: u8,
    pub size: u8,
    /// The field's base type, or `None` if the field is skipped (unsupported
    /// base type, or a size inconsistent with it). Skipped fields still
    /// occupy `size` bytes.
    pub base_type: Option<BaseType>,
}

/// Layout of one developer field within a data message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperFieldDefinition {
    pub number: u8,
    pub size: u8,
    pub developer_data_index: u8,
}

/// The layout of data messages for a local message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    pub local: u8,
    pub global: u16,
    pub endian: Endian,
    pub fields: Vec<FieldDefinition>,
    pub developer_fields: Vec<DeveloperFieldDefinition>,
}

impl MessageDefinition {
    /// Number of bytes in a data message following this definition,
    /// excluding its header.
    pub fn data_size(&self) -> usize {
        let standard: usize = self.fields.iter().map(|f| f.size as usize).sum();
        let developer: usize = self.developer_fields.iter().map(|f| f.size as usize).sum();
        standard + developer
    }
}

/// A developer field described by a `field_description` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperFieldDescription {
    pub developer_data_index: u8,
    pub number: u8,
    pub base_type: Option<BaseType>,
    pub name: Option<String>,
    pub units: Option<String>,
}

#[repr(C, packed)]
#[derive(FromBytes)]
struct DefinitionMessage {
    _reserved: u8,
    architecture: u8,
    global_message: [u8; 2],
    field_count: u8,
}

#[repr(C, packed)]
#[derive(FromBytes)]
struct FieldHeader {
    number: u8,
    size: u8,
    base_type: u8,
}

/// Whether `r` begins with a well-formed definition message: a definition
/// header, a zero reserved byte, a known architecture, and at least one field
/// whose base type byte and size agree, all within `r`.
///
/// Used to find where decoding may resume after a message of unknown length.
pub fn is_plausible_definition(r: &[u8]) -> bool {
    let Some((&byte, rest)) = r.split_first() else {
        return false;
    };

    // Bit 4 is reserved in normal headers.
    let (Left(header), 0) = (parse_record_header(byte), byte & 0x10) else {
        return false;
    };

    let mut cursor = Cursor::new(rest);

    let Ok([0, 0 | 1, _, _, field_count @ 1..=u8::MAX]) = cursor.take::<5>() else {
        return false;
    };

    for _ in 0..field_count {
        let Ok([_, size, raw]) = cursor.take::<3>() else {
            return false;
        };
        let agrees = BaseType::from_byte(raw)
            .is_some_and(|t| t.byte() == raw && size != 0 && size as usize % t.width() == 0);
        if !agrees {
            return false;
        }
    }

    if header.has_developer_fields {
        let Ok(count) = cursor.read_u8() else {
            return false;
        };
        return cursor.read_bytes(3 * count as usize).is_ok();
    }

    true
}

/// Store of the active definition for each local message type, and of
/// developer field descriptions, within one document.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: [Option<MessageDefinition>; 16],
    developer_fields: BTreeMap<(u8, u8), DeveloperFieldDescription>,
}

impl Registry {
    /// Decode a definition message from the tip of the cursor, replacing any
    /// earlier definition for the same local message type.
    ///
    /// Fields with an unsupported base type, or a size that is not a whole
    /// number of elements, are kept for their size but skipped when decoding.
    pub fn on_definition_message(
        &mut self,
        header: DefinitionHeader,
        cursor: &mut Cursor<'_>,
        warnings: &mut Vec<Warning>,
    ) -> Result<&MessageDefinition, EndOfData> {
        let DefinitionMessage {
            architecture,
            global_message,
            field_count,
            ..
        } = zerocopy::transmute!(cursor.take::<5>()?);

        let endian = Endian::from_architecture(architecture);
        let global = match endian {
            Endian::Little => u16::from_le_bytes(global_message),
            Endian::Big => u16::from_be_bytes(global_message),
        };

        let mut fields = Vec::with_capacity(field_count as usize);

        for _ in 0..field_count {
            let FieldHeader {
                number,
                size,
                base_type: raw,
            } = zerocopy::transmute!(cursor.take::<3>()?);

            let base_type = match BaseType::from_byte(raw) {
                None => {
                    Warning::UnsupportedBaseType {
                        global,
                        field: number,
                        base_type: raw,
                    }
                    .report(warnings);
                    None
                }
                Some(t) if size == 0 || size as usize % t.width() != 0 => {
                    Warning::MalformedDefinition {
                        global,
                        field: number,
                        size,
                        base_type: raw,
                    }
                    .report(warnings);
                    None
                }
                Some(t) => Some(t),
            };

            fields.push(FieldDefinition {
                number,
                size,
                base_type,
            });
        }

        let mut developer_fields = Vec::new();

        if header.has_developer_fields {
            let count = cursor.read_u8()?;

            for _ in 0..count {
                let [number, size, developer_data_index] = cursor.take::<3>()?;
                developer_fields.push(DeveloperFieldDefinition {
                    number,
                    size,
                    developer_data_index,
                });
            }
        }

        let definition = self.definitions[header.local as usize & 0xF].insert(MessageDefinition {
            local: header.local,
            global,
            endian,
            fields,
            developer_fields,
        });

        Ok(definition)
    }

    /// The active definition for a local message type.
    pub fn definition(&self, local: u8) -> Option<&MessageDefinition> {
        self.definitions.get(local as usize)?.as_ref()
    }

    /// Record a developer field description from a decoded
    /// `field_description` message.
    pub fn describe_developer_field(&mut self, message: &DecodedMessage) {
        let integer = |field| {
            message
                .get(field)
                .and_then(Value::as_i128)
                .and_then(|x| u8::try_from(x).ok())
        };
        let string = |field| message.get(field).and_then(Value::as_str).map(String::from);

        let (Some(developer_data_index), Some(number)) = (integer(0), integer(1)) else {
            tracing::debug!("ignoring field description without an index or field number");
            return;
        };

        let description = DeveloperFieldDescription {
            developer_data_index,
            number,
            base_type: integer(2).and_then(BaseType::from_byte),
            name: string(3),
            units: string(8),
        };

        self.developer_fields
            .insert((developer_data_index, number), description);
    }

    pub fn developer_field(
        &self,
        developer_data_index: u8,
        number: u8,
    ) -> Option<&DeveloperFieldDescription> {
        self.developer_fields.get(&(developer_data_index, number))
    }
}
