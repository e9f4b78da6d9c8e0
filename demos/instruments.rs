//! Instrument catalogue filtering example
//!
//! Builds a small catalogue and selects from it with leaf predicates and
//! their combinations, without ever changing the filter itself.
//!
//! Run with: cargo run --example instruments

use sift::predicate::none_of;
use sift::prelude::*;

fn main() {
    println!("=== Instrument Filtering Example ===\n");

    let instruments = sample_instruments();

    let metal = MaterialIs::new(Material::Metal);
    let wind = KindIs::new(InstrumentType::Wind);
    let percussion = KindIs::new(InstrumentType::Percussion);

    print_selection("metal instruments", instruments.iter().filter_by(metal));
    print_selection(
        "metal and wind instruments",
        instruments.iter().filter_by(metal.and(wind)),
    );
    print_selection(
        "wind or percussion instruments",
        instruments.iter().filter_by(wind.or(percussion)),
    );
    print_selection(
        "neither wind nor percussion",
        instruments.iter().filter_by(none_of([wind, percussion])),
    );

    parsed_targets(&instruments);
}

/// Targets read from text are validated when the predicate is built.
fn parsed_targets(instruments: &[Instrument]) {
    println!("--- Parsed Targets ---\n");

    for raw in ["wood", "Bronze"] {
        match MaterialIs::parse(raw) {
            Ok(spec) => print_selection(&format!("material '{}'", raw), instruments.iter().filter_by(spec)),
            Err(e) => println!("Rejected '{}': {}\n", raw, e),
        }
    }
}

fn print_selection<'a>(title: &str, selection: impl Iterator<Item = &'a Instrument>) {
    println!("Filter {}:", title);
    for instrument in selection {
        println!(" - {}", instrument.name);
    }
    println!();
}
