//! Routing records into the zip and date groupings

use crate::{
    config::FieldLayout,
    error::Error,
    group::{GroupKey, GroupTable},
    record::DonationRecord,
    summary::GroupSummary,
};

/// Aggregates donation records by (recipient, zip) and by (recipient, date)
///
/// The zip grouping is reported as it changes: [`Self::observe`] returns the updated line straight away.
/// The date grouping is held back until [`Self::flush`], which reports every group once, in sorted order.
///
/// ```
/// use donor_medians::{AggregationEngine, Amount, DonationRecord};
///
/// let mut engine = AggregationEngine::default();
///
/// let line = engine.observe(&DonationRecord::new("C1", "123456789", "01312017", Amount::from_dollars(100)));
/// assert_eq!(line.unwrap().to_string(), "C1|12345|100|1|100");
///
/// let line = engine.observe(&DonationRecord::new("C1", "12345", "01312017", Amount::from_dollars(200)));
/// assert_eq!(line.unwrap().to_string(), "C1|12345|150|2|300");
///
/// let report: Vec<_> = engine.flush().iter().map(ToString::to_string).collect();
/// assert_eq!(report, ["C1|01312017|150|2|300"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    layout: FieldLayout,
    by_zip: GroupTable<GroupKey>,
    by_date: GroupTable<GroupKey>,
}

impl AggregationEngine {
    /// Constructs an engine with no groups, qualifying keys according to `layout`
    ///
    /// Fails if `layout` has a zero zip or date length, since every record would then qualify with an empty key.
    pub fn new(layout: FieldLayout) -> Result<Self, Error> {
        layout.validate()?;

        Ok(Self {
            layout,
            by_zip: GroupTable::new(),
            by_date: GroupTable::new(),
        })
    }

    /// Drops every group, returning the engine to its freshly constructed state
    pub fn reset(&mut self) {
        self.by_zip = GroupTable::new();
        self.by_date = GroupTable::new();
    }

    /// Number of (recipient, zip) groups seen so far
    pub fn zip_groups(&self) -> usize {
        self.by_zip.len()
    }

    /// Number of (recipient, date) groups seen so far
    pub fn date_groups(&self) -> usize {
        self.by_date.len()
    }

    /// Folds one record into both groupings
    ///
    /// If the zip code has at least [`FieldLayout::zip_len`] characters, the record joins the group for its
    /// recipient and zip prefix, and that group's updated line is returned.
    /// Independently, if the date is exactly [`FieldLayout::date_len`] characters, the record joins the group
    /// for its recipient and date. Nothing is returned for the date grouping until [`Self::flush`].
    pub fn observe(&mut self, record: &DonationRecord) -> Option<GroupSummary> {
        let zip_line = zip_prefix(&record.zip, self.layout.zip_len).map(|zip| {
            let key = GroupKey::new(record.recipient.as_str(), zip);
            let state = self.by_zip.observe(key.clone(), record.amount);

            #[cfg(feature = "log")]
            if state.count() == 1 {
                log::debug!("new zip group {}|{}", key.recipient, key.part);
            }

            state.summary(&key)
        });

        if record.date.chars().count() == self.layout.date_len {
            let key = GroupKey::new(record.recipient.as_str(), record.date.as_str());
            let _state = self.by_date.observe(key, record.amount);

            #[cfg(feature = "log")]
            if _state.count() == 1 {
                log::debug!("new date group {}|{}", record.recipient, record.date);
            }
        }

        zip_line
    }

    /// Reports every (recipient, date) group's final statistics
    ///
    /// Lines are ordered by recipient, then by date compared as a string.
    /// Consumes the engine, so the report can only be produced once.
    pub fn flush(self) -> Vec<GroupSummary> {
        #[cfg(feature = "log")]
        log::debug!("flushing {} date groups", self.by_date.len());

        self.by_date
            .into_sorted()
            .into_iter()
            .map(|(key, state)| state.summary(&key))
            .collect()
    }
}

/// The first `len` characters of `zip`, if it has that many
fn zip_prefix(zip: &str, len: usize) -> Option<&str> {
    match zip.char_indices().nth(len) {
        Some((end, _)) => Some(&zip[..end]),
        None if zip.chars().count() == len => Some(zip),
        None => None,
    }
}
