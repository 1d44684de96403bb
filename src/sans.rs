//! Protocol layer: framing, definitions, and decoding of data messages.
//!
//! This module knows the FIT binary protocol but nothing of the profile
//! (beyond the timestamp field and developer field descriptions, which the
//! protocol itself depends on). It yields one [`DecodedMessage`] per data
//! message, holding the valid fields keyed by field number. See
//! [`crate::avec`] for typed tables built from these messages.
//!
//! # Architecture
//!
//! A [`Decoder`] owns the state that decoding a document requires, and
//! nothing else:
//!
//! - a cursor bounded to the current record section,
//! - a [`definition::Registry`] holding the active definition for each of the
//!   sixteen local message types, replaced whenever a type is redefined,
//! - the running timestamp used to expand compressed timestamp headers,
//! - the warnings raised so far.
//!
//! Structural faults (see [`FramingError`]) end decoding. Every other anomaly
//! is recovered by skipping the smallest possible unit, and reported as a
//! [`Warning`].
//!
//! A data message for an undefined local type has no known length. Decoding
//! resumes at the next well-formed definition message, and a structural fault
//! later in that record section only ends the section.
//!
//! Documents may be chained: once a record section and its check value are
//! consumed, a following FIT header begins a new segment with a fresh
//! registry.

pub mod check;
pub mod cursor;
pub mod data;
pub mod definition;
pub mod header;

use either::Either::{Left, Right};

use crate::error::{FramingError, Warning};

use self::{
    check::Check,
    cursor::Cursor,
    data::{DecodedMessage, TIMESTAMP_FIELD, Value, decode_data},
    definition::{FIELD_DESCRIPTION, Registry, is_plausible_definition},
    header::{DataHeader, FileHeader, parse_record_header},
};

/// Decoder over the messages of a document held in memory.
///
/// Iterating yields each data message in document order. Iteration ends after
/// the final segment, or after the first [`FramingError`].
#[derive(Debug)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    /// Offset of the current segment's header.
    start: usize,
    header: FileHeader,
    body: Cursor<'a>,
    registry: Registry,
    timestamp: Option<u32>,
    /// Whether the current segment skipped a message of unknown length.
    resynchronized: bool,
    verify_checksum: bool,
    warnings: Vec<Warning>,
    done: bool,
}

impl<'a> Decoder<'a> {
    /// Begin decoding a document, validating its header and comparing check
    /// values.
    pub fn new(bytes: &'a [u8]) -> Result<Self, FramingError> {
        Self::with_checksum(bytes, true)
    }

    /// Begin decoding a document, comparing header and document check values
    /// only if `verify_checksum` is set.
    pub fn with_checksum(bytes: &'a [u8], verify_checksum: bool) -> Result<Self, FramingError> {
        let header = FileHeader::parse(bytes)?;

        let mut decoder = Self {
            bytes,
            start: 0,
            body: Cursor::new(&[]),
            header: header.clone(),
            registry: Registry::default(),
            timestamp: None,
            resynchronized: false,
            verify_checksum,
            warnings: Vec::new(),
            done: false,
        };

        decoder.begin_segment(0, header);

        Ok(decoder)
    }

    /// The header of the segment being decoded.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    /// Decode up to and including the next data message.
    ///
    /// Returns `None` once every segment has been consumed.
    pub fn next_message(&mut self) -> Result<Option<DecodedMessage>, FramingError> {
        if self.done {
            return Ok(None);
        }

        let result = loop {
            match self.advance() {
                Err(FramingError::TruncatedMessage { offset }) if self.resynchronized => {
                    let end = self.start + self.header.document_len();
                    Warning::UnreadableRecords {
                        offset,
                        count: end.saturating_sub(offset),
                    }
                    .report(&mut self.warnings);
                    self.body.seek(end);
                }
                result => break result,
            }
        };

        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result
    }

    fn advance(&mut self) -> Result<Option<DecodedMessage>, FramingError> {
        loop {
            if self.body.bytes_remaining() == 0 {
                if self.end_segment() {
                    continue;
                }
                return Ok(None);
            }

            let offset = self.body.offset();
            let truncated = |_| FramingError::TruncatedMessage { offset };

            let r = self.body.read_u8().map_err(truncated)?;

            let header = match parse_record_header(r) {
                Left(header) => {
                    self.registry
                        .on_definition_message(header, &mut self.body, &mut self.warnings)
                        .map_err(truncated)?;
                    continue;
                }
                Right(header) => header,
            };

            let Some(definition) = self.registry.definition(header.local) else {
                let rest = self.body.rest();
                let skipped = (0..rest.len())
                    .find(|&i| is_plausible_definition(&rest[i..]))
                    .unwrap_or(rest.len());

                Warning::UndefinedLocalType {
                    local: header.local,
                    offset,
                    skipped,
                }
                .report(&mut self.warnings);

                self.body.seek(self.body.offset() + skipped);
                self.resynchronized = true;
                continue;
            };

            let mut message =
                decode_data(definition, &self.registry, &mut self.body).map_err(truncated)?;

            self.apply_timestamp(header, &mut message);

            if message.global == FIELD_DESCRIPTION {
                self.registry.describe_developer_field(&message);
            }

            return Ok(Some(message));
        }
    }

    /// Expand a compressed timestamp, or update the running timestamp.
    fn apply_timestamp(&mut self, header: DataHeader, message: &mut DecodedMessage) {
        match (header.time_offset, self.timestamp) {
            (Some(offset), Some(previous)) => {
                let timestamp = expand_time_offset(previous, offset);
                self.timestamp = Some(timestamp);
                message
                    .fields
                    .entry(TIMESTAMP_FIELD)
                    .or_insert(Value::U32(timestamp));
            }
            (Some(_), None) => {
                Warning::MissingTimestampBase {
                    local: header.local,
                }
                .report(&mut self.warnings);
            }
            (None, _) => {
                if let Some(timestamp) = message.timestamp() {
                    self.timestamp = Some(timestamp);
                }
            }
        }
    }

    fn begin_segment(&mut self, start: usize, header: FileHeader) {
        if let (true, Some(found)) = (self.verify_checksum, header.crc) {
            let covered = &self.bytes[start..start + FileHeader::LEGACY_LEN];
            if let Check::Mismatch { found, calculated } = Check::header(covered, found) {
                Warning::HeaderChecksumMismatch { found, calculated }.report(&mut self.warnings);
            }
        }

        let end = start + header.document_len();
        self.body = Cursor::starting_at(&self.bytes[..end], start + header.len());
        self.start = start;
        self.header = header;
        self.registry = Registry::default();
        self.timestamp = None;
        self.resynchronized = false;
    }

    /// Consume the current segment's check value, and begin the next segment
    /// if one follows.
    ///
    /// Returns whether a new segment began.
    fn end_segment(&mut self) -> bool {
        let end = self.start + self.header.document_len();

        let found = self
            .bytes
            .get(end..end + 2)
            .map(|r| u16::from_le_bytes([r[0], r[1]]));

        if self.verify_checksum {
            match found {
                Some(found) => {
                    let covered = &self.bytes[self.start..end];
                    if let Check::Mismatch { found, calculated } = Check::document(covered, found)
                    {
                        Warning::ChecksumMismatch { found, calculated }.report(&mut self.warnings);
                    }
                }
                None => Warning::MissingChecksum.report(&mut self.warnings),
            }
        }

        let next = if found.is_some() { end + 2 } else { self.bytes.len() };
        let rest = &self.bytes[next.min(self.bytes.len())..];

        if rest.is_empty() {
            return false;
        }

        match FileHeader::parse(rest) {
            Ok(header) => {
                tracing::debug!(offset = next, "continuing into chained document");
                self.begin_segment(next, header);
                true
            }
            Err(_) => {
                Warning::TrailingBytes { count: rest.len() }.report(&mut self.warnings);
                false
            }
        }
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<DecodedMessage, FramingError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_message().transpose()
    }
}

/// Combine a five-bit time offset with the previous timestamp, accounting for
/// rollover of the offset.
pub fn expand_time_offset(previous: u32, offset: u8) -> u32 {
    let offset = (offset & 0x1F) as u32;
    let base = previous & !0x1F;

    if offset >= previous & 0x1F {
        base.wrapping_add(offset)
    } else {
        base.wrapping_add(offset).wrapping_add(0x20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_offsets_roll_over() {
        assert_eq!(expand_time_offset(0x1000_0010, 0x12), 0x1000_0012);
        assert_eq!(expand_time_offset(0x1000_0010, 0x10), 0x1000_0010);
        assert_eq!(expand_time_offset(0x1000_001E, 0x02), 0x1000_0022);
    }

    #[test]
    fn empty_record_section() {
        let mut r = vec![12, 0x20, 0, 0, 0, 0, 0, 0];
        r.extend_from_slice(b".FIT");
        let crc = check::compute_crc(0, &r);
        r.extend_from_slice(&crc.to_le_bytes());

        let mut decoder = Decoder::new(&r).unwrap();
        assert_eq!(decoder.next(), None);
        assert!(decoder.warnings().is_empty());
    }

    #[test]
    fn missing_trailing_check_value() {
        let mut r = vec![12, 0x20, 0, 0, 0, 0, 0, 0];
        r.extend_from_slice(b".FIT");

        let mut decoder = Decoder::new(&r).unwrap();
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.warnings(), [Warning::MissingChecksum]);
    }
}
