//! Turning raw input lines into validated donation records

use crate::{amount::Amount, config::FieldLayout, error::MalformedRecordError};

/// One itemized contribution that passed the validity filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationRecord {
    /// Recipient (committee) identifier, never empty
    pub recipient: String,
    /// Postal code as given, possibly longer than a zip key
    pub zip: String,
    /// Transaction date as given, `MMDDYYYY` when well-formed
    pub date: String,
    /// Transaction amount
    pub amount: Amount,
}

impl DonationRecord {
    /// Constructs a record directly, skipping line parsing
    pub fn new(
        recipient: impl Into<String>,
        zip: impl Into<String>,
        date: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            zip: zip.into(),
            date: date.into(),
            amount,
        }
    }
}

/// Parses one input line
///
/// Returns:
/// - `Ok(Some(record))` for an individual contribution
/// - `Ok(None)` for a well-formed line that isn't one: missing recipient, missing amount, or other identifier set
/// - `Err(_)` when the line is too short or its amount doesn't parse
///
/// Trailing line terminators are ignored.
pub fn parse_line(
    line: &str,
    layout: &FieldLayout,
) -> Result<Option<DonationRecord>, MalformedRecordError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(layout.delimiter).collect();

    let expected = layout.min_fields();
    if fields.len() < expected {
        return Err(MalformedRecordError::TooFewFields {
            expected,
            found: fields.len(),
        });
    }

    let recipient = fields[layout.recipient];
    let amount = fields[layout.amount];
    let other_id = fields[layout.other_id];

    if recipient.is_empty() || amount.is_empty() || !other_id.is_empty() {
        return Ok(None);
    }

    Ok(Some(DonationRecord {
        recipient: recipient.to_owned(),
        zip: fields[layout.zip].to_owned(),
        date: fields[layout.date].to_owned(),
        amount: amount.parse()?,
    }))
}
