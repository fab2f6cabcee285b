use std::fs;

use kotoba_engine::counter::{parse_counters_toml, CounterCatalog};
use kotoba_engine::settings;

pub fn counters_export() {
    print!("{}", CounterCatalog::default_toml());
}

pub fn counters_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let catalog = die!(parse_counters_toml(&content), "Error: {}");
    let names: Vec<&str> = catalog.names().collect();
    println!("OK: {} counters ({})", catalog.len(), names.join(", "));
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: drill.review_every={}, drill.max_attempts={}, conjugation.negative_style={:?}",
        s.drill.review_every, s.drill.max_attempts, s.conjugation.negative_style
    );
}
