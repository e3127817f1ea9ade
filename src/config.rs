//! Where the interesting fields live in an input line, and how long a qualifying key part must be

use crate::error::Error;

/// Column layout of the pipe-delimited input, plus the key lengths used to qualify records
///
/// The [`Self::default`] layout matches the FEC individual contributions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field separator
    pub delimiter: char,
    /// Column of the recipient (committee) identifier
    pub recipient: usize,
    /// Column of the postal code
    pub zip: usize,
    /// Column of the transaction date
    pub date: usize,
    /// Column of the transaction amount
    pub amount: usize,
    /// Column of the "other identifier"; records with this set are not individual contributions
    pub other_id: usize,
    /// Number of leading postal code characters that form a zip key
    pub zip_len: usize,
    /// Exact length a date must have to form a date key
    pub date_len: usize,
}

impl Default for FieldLayout {
    /// `|`-delimited, with recipient, zip, date, amount and other identifier in columns 0, 10, 13, 14 and 15.
    /// Zip keys are 5 characters and dates are 8 (`MMDDYYYY`).
    fn default() -> Self {
        Self {
            delimiter: '|',
            recipient: 0,
            zip: 10,
            date: 13,
            amount: 14,
            other_id: 15,
            zip_len: 5,
            date_len: 8,
        }
    }
}

impl FieldLayout {
    /// Minimum number of fields a line needs for every column to be present
    pub fn min_fields(&self) -> usize {
        [self.recipient, self.zip, self.date, self.amount, self.other_id]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Checks that the layout can qualify anything at all
    pub fn validate(&self) -> Result<(), Error> {
        if self.zip_len == 0 || self.date_len == 0 {
            return Err(Error::Layout(format!(
                "key lengths must be non-zero (zip_len = {}, date_len = {})",
                self.zip_len, self.date_len
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_needs_sixteen_fields() {
        assert_eq!(FieldLayout::default().min_fields(), 16);
    }

    #[test]
    fn zero_key_length_is_rejected() {
        let layout = FieldLayout {
            zip_len: 0,
            ..FieldLayout::default()
        };
        assert!(matches!(layout.validate(), Err(Error::Layout(_))));
        assert!(FieldLayout::default().validate().is_ok());
    }
}
