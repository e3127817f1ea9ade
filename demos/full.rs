//! A more fully-fledged example, driving the aggregation engine by hand
//!
//! Records are built directly rather than parsed, so this shows what the engine reports and when

use donor_medians::{AggregationEngine, Amount, DonationRecord, FieldLayout};

fn main() -> Result<(), donor_medians::Error> {
    env_logger::init();

    // The default layout uses 5-character zip keys and 8-character dates
    let mut engine = AggregationEngine::new(FieldLayout::default())?;

    let records = [
        ("C00629618", "900171234", "01032017", "40"),
        ("C00177436", "30004", "01312017", "384"),
        ("C00177436", "30004", "01312017", "230"),
        // Too short to form a zip key, but still counted by date
        ("C00177436", "3000", "01302017", "20"),
        ("C00629618", "90017", "01022017", "65.75"),
    ];

    for (recipient, zip, date, amount) in records {
        let amount: Amount = match amount.parse() {
            Ok(amount) => amount,
            Err(e) => {
                eprintln!("Skipping record: {e}");
                continue;
            }
        };

        // Zip lines come out straight away
        match engine.observe(&DonationRecord::new(recipient, zip, date, amount)) {
            Some(line) => println!("by zip:  {line}"),
            None => println!("(no zip line for {recipient} {zip})"),
        }
    }

    println!(
        "{} zip groups, {} date groups",
        engine.zip_groups(),
        engine.date_groups()
    );

    // Date lines only come out at the end, sorted by recipient then date
    for line in engine.flush() {
        println!("by date: {line}");
    }

    Ok(())
}
