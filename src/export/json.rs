//! JSON and JSON Lines serialization.

use std::io::Write;

use crate::error_handling::ScrapeError;
use crate::models::Listing;

/// Writes the listings as a single JSON array, compact or indented.
pub(crate) fn write_json<W: Write>(
    listings: &[Listing],
    pretty: bool,
    mut writer: W,
) -> Result<(), ScrapeError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, listings)?;
    } else {
        serde_json::to_writer(&mut writer, listings)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes one JSON object per line.
pub(crate) fn write_jsonl<W: Write>(listings: &[Listing], mut writer: W) -> Result<(), ScrapeError> {
    for listing in listings {
        serde_json::to_writer(&mut writer, listing)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
