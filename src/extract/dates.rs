use chrono::NaiveDate;
use tracing::debug;

/// Alternate date shapes occasionally seen in hand-edited exports. ISO
/// timestamps never reach this list (they are split on `T` beforehand).
const KNOWN_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Normalizes a transaction's `dateCreated` value to `YYYY-MM-DD`.
///
/// An empty value stays empty. An ISO-8601 timestamp keeps only its date
/// portion (everything before the first `T`). Anything else is tried against
/// the known alternate formats and reformatted on the first match; a value
/// no format accepts passes through unchanged rather than failing the record.
pub fn normalize_transaction_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Some((date_portion, _)) = raw.split_once('T') {
        return date_portion.to_string();
    }

    for format in KNOWN_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    debug!("Transaction date '{raw}' matched no known format, passing through unchanged");

    raw.to_string()
}
