//! Slice-based decoding into tables.

use crate::{error::FramingError, sans::Decoder};

use super::{Decoded, Diagnostic, Options, dispatch::dispatch, linker::Linker, rows::Tables};

/// Decode every document in a slice into tables.
///
/// Check value mismatches and other recoverable anomalies are returned as
/// diagnostics alongside the tables; only structural faults fail the decode.
///
/// This method is also re-exported as `cassette::avec::decode_slice`.
pub fn decode(r: &[u8], options: &Options) -> Result<Decoded, FramingError> {
    let mut decoder = Decoder::with_checksum(r, options.verify_checksum)?;

    let mut tables = Tables::default();
    let mut linker = Linker::new(options.file_source.as_str());

    while let Some(message) = decoder.next_message()? {
        linker.link(dispatch(&message), &mut tables);
    }

    linker.finish(&mut tables);

    let diagnostics = decoder
        .into_warnings()
        .into_iter()
        .map(|warning| Diagnostic {
            file_source: options.file_source.clone(),
            warning,
        })
        .collect();

    Ok(Decoded {
        tables,
        diagnostics,
    })
}
