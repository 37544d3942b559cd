use serde::Serialize;

/// A single flattened row of the Transibase CSV export.
///
/// Field names and order are dictated by the downstream fundraising database
/// and must not change: `reference, email, prenom, nom, dateNaissance,
/// donationAmount, transactionDate`. A missing source value is always the
/// empty string, never an absent marker.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct DonationRecord {
    /// Payment reference of the order's last transaction.
    pub reference: String,
    /// Customer email attached to the order.
    pub email: String,
    /// Donor first name, from the first line item's options.
    pub prenom: String,
    /// Donor last name, from the first line item's options.
    pub nom: String,
    /// Donor birth date, from the first line item's options.
    #[serde(rename = "dateNaissance")]
    pub date_naissance: String,
    /// Donation amount as entered at checkout.
    #[serde(rename = "donationAmount")]
    pub donation_amount: String,
    /// Normalized `YYYY-MM-DD` date of the last transaction.
    #[serde(rename = "transactionDate")]
    pub transaction_date: String
}

impl DonationRecord {
    /// CSV header row, matching the serialized field order exactly.
    pub const HEADERS: [&'static str; 7] = [
        "reference",
        "email",
        "prenom",
        "nom",
        "dateNaissance",
        "donationAmount",
        "transactionDate"
    ];

    /// Calendar year the record belongs to: the portion of
    /// `transactionDate` before the first `-`. Empty when the date is empty.
    pub fn year(&self) -> &str {
        self.transaction_date.split('-').next().unwrap_or_default()
    }
}
