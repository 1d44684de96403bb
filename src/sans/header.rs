//! Document and record headers.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::error::FramingError;

/// The header opening every FIT document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub header_size: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    /// Number of record bytes following the header.
    pub data_size: u32,
    /// Check value over the first twelve header bytes, for 14-byte headers.
    pub crc: Option<u16>,
}

#[repr(C, packed)]
#[derive(FromBytes)]
struct RawFileHeader {
    header_size: u8,
    protocol_version: u8,
    profile_version: [u8; 2],
    data_size: [u8; 4],
    data_type: [u8; 4],
}

impl FileHeader {
    /// Length of a header without a check value.
    pub const LEGACY_LEN: usize = 12;
    /// Length of a header with a check value.
    pub const LEN: usize = 14;

    /// Decode the header at the start of `r`.
    ///
    /// Fails if the signature is missing, the header length is unknown, or the
    /// declared record section would overrun `r`.
    pub fn parse(r: &[u8]) -> Result<Self, FramingError> {
        let truncated = FramingError::TruncatedHeader { len: r.len() };

        let bytes: [u8; Self::LEGACY_LEN] = r
            .get(..Self::LEGACY_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or(truncated.clone())?;

        let RawFileHeader {
            header_size,
            protocol_version,
            profile_version,
            data_size,
            data_type,
        } = zerocopy::transmute!(bytes);

        if &data_type != b".FIT" {
            Err(FramingError::NotFitData)?;
        }

        let crc = match header_size as usize {
            Self::LEN => {
                let crc = r.get(Self::LEGACY_LEN..Self::LEN).ok_or(truncated)?;
                Some(u16::from_le_bytes([crc[0], crc[1]]))
            }
            Self::LEGACY_LEN => None,
            _ => Err(FramingError::UnknownHeaderLength(header_size))?,
        };

        let data_size = u32::from_le_bytes(data_size);
        let available = r.len() - header_size as usize;

        if data_size as usize > available {
            Err(FramingError::DataOverrun {
                declared: data_size,
                available,
            })?;
        }

        Ok(Self {
            header_size,
            protocol_version,
            profile_version: u16::from_le_bytes(profile_version),
            data_size,
            crc,
        })
    }

    /// Length of the header in bytes.
    pub fn len(&self) -> usize {
        self.header_size as usize
    }

    /// Length of the header and record section in bytes, excluding the
    /// trailing check value.
    pub fn document_len(&self) -> usize {
        self.len() + self.data_size as usize
    }
}

/// Header of a definition message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionHeader {
    pub local: u8,
    /// Whether developer field definitions follow the standard ones.
    pub has_developer_fields: bool,
}

/// Header of a data message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeader {
    pub local: u8,
    /// Offset to add to the running timestamp, for compressed headers.
    pub time_offset: Option<u8>,
}

bitfield! {
    struct RecordHeader(u8) {
        [7] is_compressed,
    }
}

bitfield! {
    struct CompressedHeader(u8) {
        [0..5] time_offset: u8,
        [5..7] local_message: u8,
    }
}

bitfield! {
    struct NormalHeader(u8) {
        [0..4] local_message: u8,
        [5] is_developer,
        [6] is_definition,
    }
}

/// Decode the one-byte header preceding each message.
pub fn parse_record_header(r: u8) -> Either<DefinitionHeader, DataHeader> {
    if RecordHeader(r).is_compressed() {
        let header = CompressedHeader(r);

        Right(DataHeader {
            local: header.local_message(),
            time_offset: Some(header.time_offset()),
        })
    } else {
        let header = NormalHeader(r);

        if header.is_definition() {
            Left(DefinitionHeader {
                local: header.local_message(),
                has_developer_fields: header.is_developer(),
            })
        } else {
            Right(DataHeader {
                local: header.local_message(),
                time_offset: None,
            })
        }
    }
}
