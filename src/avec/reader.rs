//! Reader and path based decoding into tables.

use std::{fs, io::Read, path::Path};

use crate::error::{Error, Result};

use super::{Decoded, Options, slice};

/// Decode every document from a reader into tables.
///
/// The reader is consumed to its end before decoding begins.
///
/// This method is also re-exported as `cassette::avec::decode_reader`.
pub fn decode(r: &mut impl Read, options: &Options) -> Result<Decoded> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    Ok(slice::decode(&buf, options)?)
}

/// Decode a file into tables.
///
/// Rows and diagnostics are tagged with the path, unless the options name
/// another source. Errors name the path.
pub fn decode_path(path: impl AsRef<Path>, options: &Options) -> Result<Decoded> {
    let path = path.as_ref();
    let _span = tracing::info_span!("decode", path = %path.display()).entered();

    let buf = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut options = options.clone();
    if options.file_source.is_empty() {
        options.file_source = path.to_string_lossy().into_owned();
    }

    let decoded = slice::decode(&buf, &options).map_err(|source| Error::FramingInFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        records = decoded.tables.records.len(),
        warnings = decoded.diagnostics.len(),
        "decoded file"
    );

    Ok(decoded)
}
