use serde_json::Value;
use tracing::debug;

use crate::extract::dates::normalize_transaction_date;
use crate::models::DonationRecord;
use crate::types::lookup;

/// Flattens each order into a donation record, preserving input order, then
/// applies the optional calendar-year filter.
///
/// This stage never fails: missing or odd-shaped fields degrade to empty
/// strings record by record, so one irregular order cannot abort an export.
pub fn extract_records(orders: &[Value], filter_year: Option<&str>) -> Vec<DonationRecord> {
    let records: Vec<DonationRecord> = orders
        .iter()
        .map(flatten_order)
        .filter(|record| matches_year(record, filter_year))
        .collect();

    debug!("Extracted {} record(s) from {} order(s)", records.len(), orders.len());

    records
}

fn flatten_order(order: &Value) -> DonationRecord {
    //NOTE: "Last" is positional. The export appends retries and captures in
    //      chronological order, so no timestamp-based sort is wanted here.
    let last_transaction = lookup::last(order, "transactions");

    let (reference, raw_date) = match last_transaction {
        Some(transaction) => (
            lookup::text(transaction, &["reference"]).into_owned(),
            lookup::text(transaction, &["dateCreated"]).into_owned()
        ),
        None => (String::new(), String::new())
    };

    let options = lookup::first(order, "lineItems").and_then(|item| item.get("options"));

    DonationRecord {
        reference,
        email: lookup::text(order, &["customer", "email"]).into_owned(),
        prenom: option_field(options, "prenom"),
        nom: option_field(options, "nom"),
        date_naissance: option_field(options, "dateNaissance"),
        donation_amount: option_field(options, "donationAmount"),
        transaction_date: normalize_transaction_date(&raw_date)
    }
}

/// Donor fields live on the first line item's options; each leaf defaults
/// independently when the options object or the leaf itself is missing.
fn option_field(options: Option<&Value>, key: &str) -> String {
    options
        .map(|options| lookup::text(options, &[key]).into_owned())
        .unwrap_or_default()
}

/// A record with an empty transaction date has the empty string as its year,
/// which never equals a 4-digit filter: such records are dropped when a
/// filter is active and kept when it is not.
fn matches_year(record: &DonationRecord, filter_year: Option<&str>) -> bool {
    match filter_year {
        Some(year) => record.year() == year,
        None => true
    }
}
