//! An example showing the running median over a custom data type
//!
//! Anything with a total order works, numeric or not

use donor_medians::{Midpoint, RunningMedian};

/// Our custom data type: a contribution size bracket
///
/// Note that only [`Ord`] and [`Clone`] are needed here
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Bracket {
    Small,
    Medium,
    Large,
    Maximum,
}

/// Some sample data to take the median of
///
/// Note that the exact median is [`Bracket::Medium`]
const DATA: [Bracket; 9] = [
    Bracket::Medium,
    Bracket::Small,
    Bracket::Large,
    Bracket::Small,
    Bracket::Maximum,
    Bracket::Medium,
    Bracket::Small,
    Bracket::Large,
    Bracket::Medium,
];

fn main() {
    let mut median = RunningMedian::new();

    for bracket in DATA {
        median.insert(bracket);
    }

    // With no sensible "average" of two brackets, an even count just reports both
    match median.median() {
        Some(Midpoint::Exact(b)) => println!("Median bracket: {b:?}"),
        Some(Midpoint::Between(low, high)) => println!("Median lies between {low:?} and {high:?}"),
        None => println!("No data"),
    }
}
