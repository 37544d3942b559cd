use std::io::Write;

use tracing::debug;

use crate::extract;
use crate::ingest;
use crate::models::DonationRecord;
use crate::output;
use crate::types::ConvertError;

/// Order-export conversion pipeline: tolerant JSON ingestion, donor field
/// extraction with an optional calendar-year filter, and fully quoted CSV
/// rendering.
///
/// The converter is pure with respect to the outside world. It never touches
/// the filesystem or prompts anyone; reading input text and choosing where
/// the CSV goes belong to the caller.
pub struct Converter {
    filter_year: Option<String>
}

impl Converter {
    /// Creates a converter, optionally restricted to a single calendar year
    /// (a 4-digit string, compared for exact equality).
    pub fn new(filter_year: Option<String>) -> Self {
        Self { filter_year }
    }

    /// Ingests the raw export and returns the flattened, filtered records.
    ///
    /// # Errors
    /// Returns [`ConvertError::MalformedInput`] when the text is not valid
    /// JSON even after the bracket-wrap repair. Individual irregular records
    /// never fail; their fields degrade to empty strings.
    pub fn extract_records(&self, raw: &str) -> Result<Vec<DonationRecord>, ConvertError> {
        let orders = ingest::parse_orders(raw)?;

        debug!("Ingested {} order(s)", orders.len());

        Ok(extract::extract_records(&orders, self.filter_year.as_deref()))
    }

    /// Runs the full pipeline and returns the CSV document as a string.
    pub fn process(&self, raw: &str) -> Result<String, ConvertError> {
        let records = self.extract_records(raw)?;

        output::to_csv_string(&records)
    }

    /// Runs the full pipeline writing CSV straight to `sink`, returning the
    /// number of records written (the header line is not counted).
    pub fn process_to<W: Write>(&self, raw: &str, sink: W) -> Result<usize, ConvertError> {
        let records = self.extract_records(raw)?;

        output::write_csv(&records, sink)?;

        Ok(records.len())
    }
}
