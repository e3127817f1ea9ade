//! Per-group accumulated state, and the table that owns it

use std::{collections::HashMap, hash::Hash};

use crate::{amount::Amount, median::RunningMedian, summary::GroupSummary};

/// Composite key identifying a group: a recipient paired with either a zip code or a date
///
/// Orders lexicographically, recipient first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    /// Recipient identifier
    pub recipient: String,
    /// Zip code or date
    pub part: String,
}

impl GroupKey {
    /// Pairs a recipient with a zip code or date
    pub fn new(recipient: impl Into<String>, part: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            part: part.into(),
        }
    }
}

/// Running statistics for one group
///
/// `count` always equals the number of amounts in the estimator, and `total` is their exact sum.
#[derive(Debug, Clone, Default)]
pub struct GroupState {
    count: u64,
    total: Amount,
    estimator: RunningMedian<Amount>,
}

impl GroupState {
    /// Folds one contribution into the group
    pub fn observe(&mut self, amount: Amount) {
        self.count += 1;
        self.total = self.total.saturating_add(amount);
        self.estimator.insert(amount);
    }

    /// Number of contributions observed
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Exact sum of contributions observed
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Running median, rounded half-to-even to whole dollars
    ///
    /// Zero for a group that hasn't observed anything, which can't happen for a group in a [`GroupTable`].
    pub fn rounded_median(&self) -> i64 {
        self.estimator
            .median()
            .map(Amount::rounded_median)
            .unwrap_or_default()
    }

    /// The group's current statistics as an output line
    pub fn summary(&self, key: &GroupKey) -> GroupSummary {
        GroupSummary {
            recipient: key.recipient.clone(),
            part: key.part.clone(),
            median: self.rounded_median(),
            count: self.count,
            total: self.total.truncated_dollars(),
        }
    }
}

/// All groups of one kind, created lazily as their keys are first seen
///
/// Groups are never removed.
#[derive(Debug, Clone)]
pub struct GroupTable<K> {
    groups: HashMap<K, GroupState>,
}

impl<K> Default for GroupTable<K> {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> GroupTable<K> {
    /// Constructs an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `amount` into the group for `key`, creating the group first if needed
    ///
    /// Returns the group's state after the update.
    pub fn observe(&mut self, key: K, amount: Amount) -> &GroupState {
        let state = self.groups.entry(key).or_default();
        state.observe(amount);
        state
    }

    /// The state of the group for `key`, if it has been seen
    pub fn get(&self, key: &K) -> Option<&GroupState> {
        self.groups.get(key)
    }

    /// Number of distinct groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no group has been created yet
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consumes the table, yielding every group in ascending key order
    pub fn into_sorted(self) -> Vec<(K, GroupState)>
    where
        K: Ord,
    {
        let mut groups: Vec<_> = self.groups.into_iter().collect();
        groups.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        groups
    }
}
