//! Error types

use std::io;

use thiserror::Error;

/// Why an input line couldn't be turned into a [`crate::DonationRecord`]
///
/// These are recoverable: the pipeline skips the offending line and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecordError {
    /// The line ended before every required column was seen
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields {
        /// Fields required by the layout
        expected: usize,
        /// Fields actually present
        found: usize,
    },
    /// The amount column isn't a plain decimal
    #[error("transaction amount {0:?} is not a decimal with at most two fractional digits")]
    Amount(String),
}

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input or writing an output failed
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The [`crate::FieldLayout`] can't qualify any record
    #[error("invalid field layout: {0}")]
    Layout(String),
}
