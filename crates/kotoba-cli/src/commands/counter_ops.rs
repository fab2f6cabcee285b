use serde::Serialize;

use kotoba_engine::counter::{CatalogEntry, CounterCatalog, CounterError, QuantityKey};

use crate::format::{column_width, pad};

#[derive(Debug, Serialize)]
struct CountJson<'a> {
    counter: &'a str,
    label: &'a str,
    quantity: u32,
    readings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CounterJson<'a> {
    name: &'a str,
    label: &'a str,
    /// Readings for 1–10, then the question word.
    forms: Vec<FormJson>,
}

#[derive(Debug, Serialize)]
struct FormJson {
    key: String,
    surface: String,
    optional_prefix: bool,
}

fn find(name_or_label: &str) -> &'static CatalogEntry {
    CounterCatalog::global()
        .find(name_or_label)
        .unwrap_or_else(|| {
            let names: Vec<&str> = CounterCatalog::global().names().collect();
            eprintln!(
                "Error: unknown counter {name_or_label:?} (known: {})",
                names.join(", ")
            );
            std::process::exit(1);
        })
}

pub fn count_cmd(counter: &str, quantities: &[u32], json: bool) {
    let entry = find(counter);
    if json {
        let rows = die!(count_rows(entry, quantities), "Error: {}");
        let text = die!(serde_json::to_string_pretty(&rows), "Error: {}");
        println!("{text}");
    } else {
        print!("{}", die!(format_count(entry, quantities), "Error: {}"));
    }
}

fn count_rows<'a>(
    entry: &'a CatalogEntry,
    quantities: &[u32],
) -> Result<Vec<CountJson<'a>>, CounterError> {
    quantities
        .iter()
        .map(|&n| {
            Ok(CountJson {
                counter: &entry.name,
                label: &entry.label,
                quantity: n,
                readings: entry.counter.readings(n)?,
            })
        })
        .collect()
}

/// `3本  さんぼん`, one line per quantity; alternative readings follow
/// after a slash.
pub fn format_count(entry: &CatalogEntry, quantities: &[u32]) -> Result<String, CounterError> {
    let labels: Vec<String> = quantities
        .iter()
        .map(|n| format!("{n}{}", entry.label))
        .collect();
    let width = column_width(labels.iter().map(String::as_str)) + 2;
    let mut out = String::new();
    for (label, &n) in labels.iter().zip(quantities) {
        let readings = entry.counter.readings(n)?;
        out.push_str(&format!("{}{}\n", pad(label, width), readings.join(" / ")));
    }
    Ok(out)
}

pub fn counters_cmd(json: bool) {
    let catalog = CounterCatalog::global();
    if json {
        let rows: Vec<CounterJson> = catalog.iter().map(counter_json).collect();
        let text = die!(serde_json::to_string_pretty(&rows), "Error: {}");
        println!("{text}");
    } else {
        print!("{}", format_catalog(catalog));
    }
}

fn counter_json(entry: &CatalogEntry) -> CounterJson<'_> {
    let forms = entry
        .counter
        .table()
        .forms()
        .iter()
        .map(|f| FormJson {
            key: f.key.to_string(),
            surface: f.surface.clone(),
            optional_prefix: f.prefix.optional,
        })
        .collect();
    CounterJson {
        name: &entry.name,
        label: &entry.label,
        forms,
    }
}

/// One block per counter: readings for 1–10 and なん. Irregular whole-word
/// readings replace the table entry; optional prefixes are parenthesized.
pub fn format_catalog(catalog: &CounterCatalog) -> String {
    let mut out = String::new();
    for entry in catalog.iter() {
        out.push_str(&format!("{} ({})\n", entry.label, entry.name));
        let table = entry.counter.table();
        for key in QuantityKey::all() {
            let Some(form) = table.entry(key) else {
                continue;
            };
            let surface: &str = match key {
                QuantityKey::Digit(d) => entry
                    .counter
                    .quantity(u32::from(d))
                    .unwrap_or(form.surface.as_str()),
                QuantityKey::Question => form.surface.as_str(),
            };
            let note = if form.prefix.optional {
                format!("  {}", form.prefix)
            } else {
                String::new()
            };
            out.push_str(&format!("  {}{surface}{note}\n", pad(&key_label(key), 4)));
        }
    }
    out
}

fn key_label(key: QuantityKey) -> String {
    match key {
        QuantityKey::Digit(d) => d.to_string(),
        QuantityKey::Question => "?".to_string(),
    }
}
