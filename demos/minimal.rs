//! A basic example showing minimal usage
//!
//! We construct a [`RunningMedian`], fill it with amounts, and read out the median after each one

use donor_medians::{Amount, RunningMedian};

/// Some contribution amounts, in dollars
///
/// In practice, this will probably be a much larger stream
const DATA: [i64; 7] = [384, 230, 125, 10, 250, 333, 384];

fn main() {
    let mut median = RunningMedian::new();

    for dollars in DATA {
        median.insert(Amount::from_dollars(dollars));

        // The median is available after every insert, without re-scanning what came before
        if let Some(midpoint) = median.median() {
            println!(
                "After {} amounts the median is {}",
                median.len(),
                Amount::rounded_median(midpoint)
            );
        }
    }
}
