//! Demonstrates tracing integration with predicates
//!
//! Run with: cargo run --example traced_filter --features tracing

use sift::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting traced filter demo");

    let catalogue = sample_instruments();
    let spec = MaterialIs::new(Material::Metal)
        .traced("metal")
        .and(KindIs::new(InstrumentType::Wind).traced("wind"));

    let selected: Vec<&str> = catalogue
        .iter()
        .filter_by(spec)
        .map(|i| i.name.as_str())
        .collect();

    tracing::info!(?selected, "filter finished");
}
