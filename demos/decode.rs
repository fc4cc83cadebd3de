//! Decodes a METAR report and prints its summary as JSON.
//! Usage: cargo run --example decode --features serde [-- "REPORT"]
use metar::prelude::*;

fn main() {
    let report = std::env::args().nth(1).unwrap_or_else(|| {
        "KSAN 101651Z 21005KT 10SM CLR 21/13 A3006 RMK AO2 SLP177 T02110128".to_string()
    });

    let observation = match decode(&report) {
        Ok(observation) => observation,
        Err(e) => {
            eprintln!("failed to decode \"{}\": {}", report, e);
            std::process::exit(1);
        },
    };

    let summary = Summary::new(0, &observation);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to serialize summary: {}", e);
            std::process::exit(1);
        },
    }
}
