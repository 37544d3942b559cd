use super::{to_csv_string, write_csv};

use anyhow::Result;

use crate::models::DonationRecord;

const EXPECTED_HEADER: &str =
    "\"reference\",\"email\",\"prenom\",\"nom\",\"dateNaissance\",\"donationAmount\",\"transactionDate\"";

fn sample_record() -> DonationRecord {
    DonationRecord {
        reference: "T1".to_string(),
        email: "a@b.com".to_string(),
        prenom: "Jean".to_string(),
        nom: "Tremblay".to_string(),
        date_naissance: "1980-01-01".to_string(),
        donation_amount: "50".to_string(),
        transaction_date: "2023-05-01".to_string()
    }
}

#[test]
fn test_zero_records_still_produce_a_quoted_header_line() -> Result<()> {
    let rendered = to_csv_string(&[])?;

    assert_eq!(rendered, format!("{EXPECTED_HEADER}\n"));

    Ok(())
}

#[test]
fn test_every_field_is_quoted_and_newline_terminated() -> Result<()> {
    let rendered = to_csv_string(&[sample_record()])?;

    let expected = format!(
        "{EXPECTED_HEADER}\n\"T1\",\"a@b.com\",\"Jean\",\"Tremblay\",\"1980-01-01\",\"50\",\"2023-05-01\"\n"
    );

    assert_eq!(rendered, expected);

    Ok(())
}

#[test]
fn test_embedded_quotes_are_doubled() -> Result<()> {
    let record = DonationRecord {
        nom: "O\"Brien".to_string(),
        ..DonationRecord::default()
    };

    let rendered = to_csv_string(&[record])?;

    assert!(rendered.contains("\"O\"\"Brien\""));

    Ok(())
}

#[test]
fn test_quoted_fields_survive_a_standard_csv_reader_round_trip() -> Result<()> {
    let record = DonationRecord {
        nom: "O\"Brien".to_string(),
        prenom: "Jean, fils".to_string(),
        email: "line\nbreak@b.com".to_string(),
        ..DonationRecord::default()
    };

    let rendered = to_csv_string(&[record])?;

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rendered.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;

    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], "line\nbreak@b.com");
    assert_eq!(&rows[0][2], "Jean, fils");
    assert_eq!(&rows[0][3], "O\"Brien");

    Ok(())
}

#[test]
fn test_string_form_and_sink_form_render_identical_bytes() -> Result<()> {
    let records = vec![sample_record(), DonationRecord::default()];

    let mut sink = Vec::new();
    write_csv(&records, &mut sink)?;

    assert_eq!(to_csv_string(&records)?.as_bytes(), sink.as_slice());

    Ok(())
}

#[test]
fn test_rows_preserve_record_order() -> Result<()> {
    let records: Vec<DonationRecord> = (1..=3)
        .map(|index| DonationRecord {
            reference: format!("T{index}"),
            ..DonationRecord::default()
        })
        .collect();

    let rendered = to_csv_string(&records)?;
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("\"T1\""));
    assert!(lines[2].starts_with("\"T2\""));
    assert!(lines[3].starts_with("\"T3\""));

    Ok(())
}
