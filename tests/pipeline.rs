//! End-to-end runs over the fixture in `test_data/`, plus streaming properties of the engine

use std::{collections::HashMap, fs};

use donor_medians::{AggregationEngine, Amount, DonationRecord, FieldLayout, Pipeline};
use rand::{rngs::StdRng, Rng, SeedableRng};

const INPUT: &str = "./test_data/itcont.txt";

fn expected(name: &str) -> String {
    fs::read_to_string(format!("./test_data/{name}.expected")).unwrap()
}

#[test]
fn fixture_in_memory() {
    let input = fs::read(INPUT).unwrap();
    let (mut zip, mut date) = (Vec::new(), Vec::new());

    let stats = Pipeline::default()
        .run(&input[..], &mut zip, &mut date)
        .unwrap();

    assert_eq!(String::from_utf8(zip).unwrap(), expected("medianvals_by_zip"));
    assert_eq!(String::from_utf8(date).unwrap(), expected("medianvals_by_date"));

    assert_eq!(stats.lines, 15);
    assert_eq!(stats.accepted, 12);
    assert_eq!(stats.filtered, 3);
    assert_eq!(stats.malformed, 0);
    assert_eq!(stats.zip_lines, 11);
    assert_eq!(stats.date_lines, 6);
}

#[test]
fn fixture_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let by_zip = dir.path().join("medianvals_by_zip.txt");
    let by_date = dir.path().join("medianvals_by_date.txt");

    Pipeline::new(FieldLayout::default())
        .unwrap()
        .run_files(INPUT, &by_zip, &by_date)
        .unwrap();

    assert_eq!(fs::read_to_string(by_zip).unwrap(), expected("medianvals_by_zip"));
    assert_eq!(fs::read_to_string(by_date).unwrap(), expected("medianvals_by_date"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Pipeline::default().run_files(
        dir.path().join("nope.txt"),
        dir.path().join("zip.txt"),
        dir.path().join("date.txt"),
    );

    assert!(matches!(result, Err(donor_medians::Error::Io(_))));
}

/// Median of whole-dollar amounts by sorting, rounded half-to-even
fn reference_median(values: &[i64]) -> i64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        let sum = sorted[mid - 1] + sorted[mid];
        let half = sum.div_euclid(2);
        if sum.rem_euclid(2) == 1 && half % 2 != 0 {
            half + 1
        } else {
            half
        }
    }
}

#[test]
fn zip_lines_track_every_observation() {
    let mut rng = StdRng::seed_from_u64(2017);
    let mut engine = AggregationEngine::default();
    let mut history: HashMap<(String, String), Vec<i64>> = HashMap::new();
    let mut by_date: HashMap<(String, String), Vec<i64>> = HashMap::new();

    for _ in 0..5000 {
        let recipient = format!("C{:08}", rng.random_range(0..5));
        let zip = format!("{:05}{}", rng.random_range(0..4), "6789");
        let date = format!("01{:02}2017", rng.random_range(1..4));
        let dollars = rng.random_range(1..2000);

        let line = engine
            .observe(&DonationRecord::new(
                recipient.as_str(),
                zip.as_str(),
                date.as_str(),
                Amount::from_dollars(dollars),
            ))
            .unwrap();

        let seen = history
            .entry((recipient.clone(), zip[..5].to_owned()))
            .or_default();
        seen.push(dollars);
        by_date.entry((recipient, date)).or_default().push(dollars);

        assert_eq!(line.part, &zip[..5]);
        assert_eq!(line.count, seen.len() as u64);
        assert_eq!(line.total, seen.iter().sum::<i64>());
        assert_eq!(line.median, reference_median(seen));
    }

    let report = engine.flush();
    assert_eq!(report.len(), by_date.len());

    let keys: Vec<_> = report
        .iter()
        .map(|s| (s.recipient.clone(), s.part.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    for summary in report {
        let seen = &by_date[&(summary.recipient.clone(), summary.part.clone())];
        assert_eq!(summary.count, seen.len() as u64);
        assert_eq!(summary.total, seen.iter().sum::<i64>());
        assert_eq!(summary.median, reference_median(seen));
    }
}
