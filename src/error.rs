//! Errors and recoverable anomalies raised while decoding.

use std::path::PathBuf;

use thiserror::Error;

/// A structural fault that makes a document undecodable.
///
/// Framing errors abort the decode of the file they occur in. No partial
/// tables are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    /// Fewer bytes than a file header requires.
    #[error("File is too short to hold a header ({len} bytes).")]
    TruncatedHeader { len: usize },
    /// Incorrect filetype marker.
    #[error("Incorrect file type marker.")]
    NotFitData,
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    UnknownHeaderLength(u8),
    /// The header declares more record bytes than the document holds.
    #[error("Header declares {declared} record bytes, but only {available} remain.")]
    DataOverrun { declared: u32, available: usize },
    /// A message runs past the end of the record section.
    #[error("Message at offset {offset} extends past the end of the record section.")]
    TruncatedMessage { offset: usize },
}

/// An anomaly the decoder recovered from by skipping the smallest possible
/// unit (a field, a message, or a check).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// Calculated and found CRC values do not match.
    #[error("Calculated ({calculated:#06x}) and found ({found:#06x}) CRC values do not match.")]
    ChecksumMismatch { found: u16, calculated: u16 },
    /// Calculated and found header CRC values do not match.
    #[error("Calculated ({calculated:#06x}) and found ({found:#06x}) header CRC values do not match.")]
    HeaderChecksumMismatch { found: u16, calculated: u16 },
    /// The document ends before its trailing CRC.
    #[error("Document ends without a trailing CRC.")]
    MissingChecksum,
    /// A field's size is not a whole number of its base type's width.
    #[error("Field {field} of message {global} has size {size}, inconsistent with base type {base_type:#04x}.")]
    MalformedDefinition {
        global: u16,
        field: u8,
        size: u8,
        base_type: u8,
    },
    /// A field declares a base type outside the protocol.
    #[error("Field {field} of message {global} has unsupported base type {base_type:#04x}.")]
    UnsupportedBaseType { global: u16, field: u8, base_type: u8 },
    /// A data message refers to a local message type with no definition.
    ///
    /// Its length is unknown, so the bytes up to the next definition message
    /// are skipped.
    #[error("Data message at offset {offset} refers to undefined local message type {local}; skipped {skipped} bytes.")]
    UndefinedLocalType {
        local: u8,
        offset: usize,
        skipped: usize,
    },
    /// The rest of a record section could not be decoded after skipping a
    /// message of unknown length.
    #[error("Ignored {count} undecodable record bytes from offset {offset}.")]
    UnreadableRecords { offset: usize, count: usize },
    /// A compressed timestamp header arrived before any absolute timestamp.
    #[error("Compressed timestamp for local message type {local} has no preceding timestamp.")]
    MissingTimestampBase { local: u8 },
    /// Bytes after the final document that do not form another document.
    #[error("Ignored {count} trailing bytes after the final document.")]
    TrailingBytes { count: usize },
}

impl Warning {
    /// Log the warning and add it to a sink.
    pub(crate) fn report(self, sink: &mut Vec<Warning>) {
        tracing::warn!(warning = %self, "recovered from malformed FIT data");
        sink.push(self);
    }
}

/// Errors surfaced to callers of the convenience interfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened or read.
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An error from a supplied reader.
    #[error("Could not read document: {0}")]
    Read(#[from] std::io::Error),
    /// The document is structurally invalid.
    #[error("Malformed FIT document: {0}")]
    Framing(#[from] FramingError),
    /// A file is structurally invalid.
    #[error("Malformed FIT document {}: {source}", .path.display())]
    FramingInFile { path: PathBuf, source: FramingError },
    /// A file pattern could not be parsed.
    #[cfg(feature = "glob")]
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// A file pattern matched no regular files.
    #[error("No files match {pattern}.")]
    NoMatches { pattern: String },
}

pub type Result<T> = std::result::Result<T, Error>;
