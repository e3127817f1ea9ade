#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod amount;
pub mod config;
pub mod engine;
pub mod error;
pub mod group;
pub mod median;
pub mod pipeline;
pub mod record;
pub mod summary;

pub use amount::Amount;
pub use config::FieldLayout;
pub use engine::AggregationEngine;
pub use error::{Error, MalformedRecordError};
pub use group::{GroupKey, GroupState, GroupTable};
pub use median::{Midpoint, RunningMedian};
pub use pipeline::{Pipeline, RunStats};
pub use record::{parse_line, DonationRecord};
pub use summary::GroupSummary;
