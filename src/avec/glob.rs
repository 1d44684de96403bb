//! Decoding every file matching a pattern.
//!
//! _Requires Cargo feature `glob`._

use std::{
    fs,
    path::{Path, PathBuf},
};

use ::glob::Pattern;

use crate::error::{Error, Result};

use super::{Decoded, Options, reader::decode_path};

/// List the regular files matching a pattern, sorted.
///
/// Wildcards (`*`, `?`, `[...]`) are matched case sensitively against the
/// names of files in the pattern's directory, which is not itself expanded.
/// A pattern without wildcards is returned unchanged, whether or not it
/// exists. An unreadable directory matches nothing.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if !pattern.contains(['*', '?', '[']) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let (dir, name) = match pattern.rsplit_once('/') {
        Some(("", name)) => (Some("/"), name),
        Some((dir, name)) => (Some(dir), name),
        None => (None, pattern),
    };

    let matcher = Pattern::new(name)?;

    let entries = match fs::read_dir(dir.unwrap_or(".")) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(pattern, %err, "could not list pattern directory");
            return Ok(Vec::new());
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| matcher.matches(name))
        })
        .map(|entry| match dir {
            Some(dir) => Path::new(dir).join(entry.file_name()),
            None => PathBuf::from(entry.file_name()),
        })
        // Follows links, as a directory listing would.
        .filter(|path| fs::metadata(path).is_ok_and(|m| m.is_file()))
        .collect();

    paths.sort();

    Ok(paths)
}

/// Decode every file matching a pattern, concatenating their tables in path
/// order.
///
/// Rows and diagnostics are tagged with the path of their file. The first file
/// failing to decode fails the whole pattern.
///
/// This method is also re-exported as `cassette::avec::decode_glob`.
pub fn decode(pattern: &str, options: &Options) -> Result<Decoded> {
    let paths = expand_pattern(pattern)?;

    if paths.is_empty() {
        Err(Error::NoMatches {
            pattern: pattern.to_string(),
        })?
    }

    let mut decoded = Decoded::default();

    for path in paths {
        let options = options
            .clone()
            .with_file_source(path.to_string_lossy());
        decoded.append(&mut decode_path(&path, &options)?);
    }

    Ok(decoded)
}
