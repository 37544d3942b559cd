use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::models::DonationRecord;
use crate::types::ConvertError;

/// Writes the header row and one row per record to `sink` as fully quoted
/// CSV: every field is wrapped in double quotes and embedded quotes are
/// doubled, so commas and newlines inside values need no further escaping.
/// Each row, the header included, is terminated by `\n`.
pub fn write_csv<W: Write>(records: &[DonationRecord], sink: W) -> Result<(), ConvertError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(sink);

    //NOTE: The header is written explicitly so a zero-record export still
    //      produces a header-only file instead of an empty one.
    writer.write_record(DonationRecord::HEADERS)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}

/// In-memory variant of [`write_csv`], byte-identical to the sink form.
pub fn to_csv_string(records: &[DonationRecord]) -> Result<String, ConvertError> {
    let mut buffer = Vec::new();

    write_csv(records, &mut buffer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
