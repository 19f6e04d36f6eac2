//! CSV serialization.

use std::io::Write;

use csv::Writer;

use crate::error_handling::ScrapeError;
use crate::models::Listing;

/// Writes a header row followed by one row per listing.
///
/// Columns follow the `Listing` field order.
pub(crate) fn write_csv<W: Write>(listings: &[Listing], writer: W) -> Result<(), ScrapeError> {
    let mut csv_writer = Writer::from_writer(writer);
    if listings.is_empty() {
        csv_writer.write_record(["title", "description", "price", "discount"])?;
    }
    for listing in listings {
        csv_writer.serialize(listing)?;
    }
    csv_writer.flush()?;
    Ok(())
}
