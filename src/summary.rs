//! Output lines for both groupings

use std::fmt;

/// One output line: a group's statistics at the moment it was reported
///
/// Displays as `recipient|key|median|count|total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    /// Recipient identifier
    pub recipient: String,
    /// Second half of the group key: a zip code or a date
    pub part: String,
    /// Running median in whole dollars, rounded half-to-even
    pub median: i64,
    /// Number of contributions in the group
    pub count: u64,
    /// Total contributed in whole dollars, truncated toward zero
    pub total: i64,
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.recipient, self.part, self.median, self.count, self.total
        )
    }
}
