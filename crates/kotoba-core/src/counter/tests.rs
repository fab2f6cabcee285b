use proptest::prelude::*;

use super::*;
use crate::kana::ConsonantRow;

const P: MorphRule = MorphRule::Consonant(ConsonantRow::P);
const B: MorphRule = MorphRule::Consonant(ConsonantRow::B);

fn d(digit: u8) -> QuantityKey {
    QuantityKey::Digit(digit)
}

fn stick_spec() -> CounterSpec {
    CounterSpec::new("ほん")
        .prefix(d(1), Prefix::new("いっ"))
        .prefix(d(6), Prefix::new("ろっ"))
        .prefix(d(8), Prefix::new("はっ"))
        .prefix(d(10), Prefix::new("じゅっ"))
        .morph_all(&[d(1), d(6), d(8), d(10)], P)
        .morph(d(3), B)
        .morph(QuantityKey::Question, B)
}

// --- Table construction ---

#[test]
fn no_overrides_uses_standard_prefixes() {
    let table = CounterSpec::new("まい").build().unwrap();
    for n in 1..=10u32 {
        let expected = format!("{}まい", STANDARD_PREFIXES[n as usize - 1]);
        assert_eq!(table.quantity(n).unwrap(), expected);
    }
    assert_eq!(table.question(), "なんまい");
}

#[test]
fn identity_morph_keeps_kanji_base() {
    let table = CounterSpec::new("円").build().unwrap();
    assert_eq!(table.quantity(3).unwrap(), "さん円");
    assert_eq!(table.base(), "円");
}

#[test]
fn stick_counter_readings() {
    let table = stick_spec().build().unwrap();
    assert_eq!(table.quantity(1).unwrap(), "いっぽん");
    assert_eq!(table.quantity(2).unwrap(), "にほん");
    assert_eq!(table.quantity(3).unwrap(), "さんぼん");
    assert_eq!(table.quantity(4).unwrap(), "よんほん");
    assert_eq!(table.quantity(6).unwrap(), "ろっぽん");
    assert_eq!(table.quantity(8).unwrap(), "はっぽん");
    assert_eq!(table.quantity(10).unwrap(), "じゅっぽん");
    assert_eq!(table.question(), "なんぼん");
}

#[test]
fn table_has_exactly_eleven_keys() {
    let table = stick_spec().build().unwrap();
    let keys: Vec<_> = table.forms().iter().map(|f| f.key).collect();
    let expected: Vec<_> = QuantityKey::all().collect();
    assert_eq!(keys, expected);
    assert_eq!(keys.len(), 11);
}

#[test]
fn construction_is_deterministic() {
    assert_eq!(stick_spec().build().unwrap(), stick_spec().build().unwrap());
}

#[test]
fn specs_do_not_share_overrides() {
    // Building one counter with overrides must not leak into the next.
    let _sticks = stick_spec().build().unwrap();
    let plain = CounterSpec::new("ほん").build().unwrap();
    assert_eq!(plain.quantity(1).unwrap(), "いちほん");
}

#[test]
fn entry_rejects_out_of_range_keys() {
    let table = stick_spec().build().unwrap();
    assert_eq!(table.entry(d(0)), None);
    assert_eq!(table.entry(d(11)), None);
    assert_eq!(table.entry(d(6)).unwrap().surface, "ろっぽん");
    assert_eq!(table.entry(QuantityKey::Question).unwrap().surface, "なんぼん");
}

// --- Construction errors ---

#[test]
fn error_empty_base() {
    assert_eq!(CounterSpec::new("").build(), Err(CounterError::EmptyBase));
}

#[test]
fn error_duplicate_prefix() {
    let err = CounterSpec::new("ほん")
        .prefix(d(1), Prefix::new("いっ"))
        .prefix(d(1), Prefix::new("いち"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        CounterError::DuplicateOverride {
            key: d(1),
            table: "prefix"
        }
    );
}

#[test]
fn error_duplicate_morph() {
    let err = CounterSpec::new("ほん")
        .morph(d(3), B)
        .morph(d(3), P)
        .build()
        .unwrap_err();
    assert!(matches!(err, CounterError::DuplicateOverride { table: "morph", .. }));
}

#[test]
fn error_key_out_of_range() {
    let err = CounterSpec::new("ほん")
        .prefix(d(0), Prefix::new("ぜろ"))
        .build()
        .unwrap_err();
    assert_eq!(err, CounterError::KeyOutOfRange(d(0)));
    let err = CounterSpec::new("ほん").morph(d(11), P).build().unwrap_err();
    assert_eq!(err, CounterError::KeyOutOfRange(d(11)));
}

#[test]
fn error_morph_unclassified_first_mora() {
    let err = CounterSpec::new("本").morph(d(1), P).build().unwrap_err();
    assert!(matches!(err, CounterError::Morph { key, .. } if key == d(1)));
}

// --- Quantity lookup ---

#[test]
fn quantity_zero_is_rejected() {
    let table = stick_spec().build().unwrap();
    assert_eq!(table.quantity(0), Err(CounterError::NonPositive));
}

#[test]
fn multiples_of_ten_use_ten_entry() {
    let table = CounterSpec::new("ドル").build().unwrap();
    assert_eq!(table.quantity(20).unwrap(), "じゅうドル");
    assert_eq!(table.quantity(30).unwrap(), table.quantity(10).unwrap());
    assert_eq!(table.quantity(13).unwrap(), "さんドル");
}

#[test]
fn people_counter_exceptions() {
    let people = Counter::people().unwrap();
    assert_eq!(people.quantity(1).unwrap(), "ひとり");
    assert_eq!(people.quantity(2).unwrap(), "ふたり");
    assert_eq!(people.quantity(3).unwrap(), "さんにん");
    assert_eq!(people.quantity(3).unwrap(), people.table().quantity(3).unwrap());
    assert_eq!(people.quantity(4).unwrap(), "よにん");
    // exceptions match exact quantities only
    assert_eq!(people.quantity(11).unwrap(), "いちにん");
    assert_eq!(people.quantity(0), Err(CounterError::NonPositive));
    assert_eq!(people.question(), "なんにん");
}

#[test]
fn catalog_people_matches_builtin() {
    let entry = CounterCatalog::global().get("people").unwrap();
    assert_eq!(entry.counter, Counter::people().unwrap());
}

#[test]
fn catalog_readings() {
    let catalog = CounterCatalog::global();
    let read = |name: &str, n: u32| {
        catalog
            .get(name)
            .unwrap()
            .counter
            .quantity(n)
            .unwrap()
            .to_string()
    };
    assert_eq!(read("sticks", 1), "いっぽん");
    assert_eq!(read("sticks", 3), "さんぼん");
    assert_eq!(read("sticks", 6), "ろっぽん");
    assert_eq!(read("minutes", 1), "いっぷん");
    assert_eq!(read("minutes", 2), "にふん");
    assert_eq!(read("minutes", 3), "さんぶん");
    assert_eq!(read("minutes", 4), "よんぷん");
    assert_eq!(read("minutes", 10), "じゅっぷん");
    assert_eq!(read("months", 4), "しがつ");
    assert_eq!(read("months", 9), "くがつ");
    assert_eq!(read("oclock", 4), "よじ");
    assert_eq!(read("oclock", 7), "しちじ");
    assert_eq!(read("hours", 9), "くじかん");
    assert_eq!(read("year", 4), "よねん");
    assert_eq!(read("yen", 4), "よんえん");
    assert_eq!(read("dollars", 5), "ごドル");
    assert_eq!(catalog.get("minutes").unwrap().counter.question(), "なんぷん");
}

#[test]
fn generated_deck_readings_are_kept() {
    let catalog = CounterCatalog::global();
    let minutes = &catalog.get("minutes").unwrap().counter;
    assert_eq!(minutes.readings(3).unwrap(), vec!["さんぶん"]);
    assert_eq!(minutes.quantity(13).unwrap(), "さんぶん");
    let yen = &catalog.get("yen").unwrap().counter;
    assert_eq!(yen.readings(4).unwrap(), vec!["よんえん"]);
}

#[test]
fn optional_prefix_accepts_plain_reading() {
    let spans = &CounterCatalog::global().get("month_spans").unwrap().counter;
    assert_eq!(spans.readings(8).unwrap(), vec!["はっかげつ", "はちかげつ"]);
    assert_eq!(spans.readings(3).unwrap(), vec!["さんかげつ"]);
    assert_eq!(spans.readings(18).unwrap().len(), 2);
}

#[test]
fn irregular_readings() {
    let people = Counter::people().unwrap();
    assert_eq!(people.readings(2).unwrap(), vec!["ふたり"]);
    assert_eq!(people.readings(4).unwrap(), vec!["よにん"]);
    assert_eq!(people.readings(0), Err(CounterError::NonPositive));
}

#[test]
fn quantity_key_parse() {
    assert_eq!("question".parse::<QuantityKey>().unwrap(), QuantityKey::Question);
    assert_eq!("10".parse::<QuantityKey>().unwrap(), d(10));
    assert!("0".parse::<QuantityKey>().is_err());
    assert!("11".parse::<QuantityKey>().is_err());
    assert!("one".parse::<QuantityKey>().is_err());
    assert_eq!(d(7).to_string(), "7");
}

#[test]
fn prefix_parse_marker() {
    assert_eq!(Prefix::parse("*はっ"), Prefix::optional("はっ"));
    assert_eq!(Prefix::parse("はっ"), Prefix::new("はっ"));
}

proptest! {
    #[test]
    fn quantity_follows_last_digit(n in 11u32..100_000) {
        let table = stick_spec().build().unwrap();
        let expected = if n % 10 == 0 {
            table.quantity(10).unwrap()
        } else {
            table.quantity(n % 10).unwrap()
        };
        prop_assert_eq!(table.quantity(n).unwrap(), expected);
    }

    #[test]
    fn irregular_counter_delegates_above_two(n in 3u32..1000) {
        let people = Counter::people().unwrap();
        prop_assert_eq!(people.quantity(n).unwrap(), people.table().quantity(n).unwrap());
    }
}
