//! Interactive drill loop and deck construction for `kotodrill`.

use std::io::{self, BufRead, Write};
use std::path::Path;

use kotoba_drill::{
    conjugation_cards, counter_cards, te_form_cards, Card, DrillConfig, DrillSession, DrillStats,
    Verdict,
};
use kotoba_engine::conjugate::{Form, NegativeStyle};
use kotoba_engine::counter::{CatalogEntry, CounterCatalog};
use kotoba_engine::settings::settings;
use kotoba_engine::vocab::VocabEntry;

use super::vocab_ops::{load, parse_lessons_arg, select};

const QUIT: &str = ":q";
const SKIP: &str = ":skip";

/// Ask every card until the session finishes, the learner types `:q`, or
/// input ends. `:skip` reveals the answer and queues the card for review.
pub fn run_drill<R: BufRead, W: Write>(
    session: &mut DrillSession,
    mut input: R,
    mut output: W,
) -> io::Result<DrillStats> {
    let mut line = String::new();
    while let Some(card) = session.next_card() {
        write!(output, "{}\n> ", card.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let reply = line.trim();
        if reply == QUIT {
            break;
        }
        let verdict = if reply == SKIP {
            session.give_up()
        } else {
            session.answer(reply)
        }
        .map_err(io::Error::other)?;

        match verdict {
            Verdict::Correct => writeln!(output, "○")?,
            Verdict::Retry { attempts_left } => {
                writeln!(output, "× try again ({attempts_left} left)")?
            }
            Verdict::Missed { expected } => writeln!(output, "× {expected}")?,
        }
    }
    Ok(session.stats())
}

pub fn format_stats(stats: &DrillStats, deck_len: usize) -> String {
    format!(
        "{} cards, {} prompts: {} correct ({} first try), {} missed\n",
        deck_len, stats.prompts, stats.correct, stats.first_try, stats.missed
    )
}

/// Build a session with the configured drill settings, run it on stdin and
/// print the summary.
pub fn start(deck: Vec<Card>) {
    let config = DrillConfig::from(&settings().drill);
    let mut session = die!(DrillSession::new(deck, config), "Error: {}");
    let stdin = io::stdin();
    let stats = die!(
        run_drill(&mut session, stdin.lock(), io::stdout()),
        "Error: {}"
    );
    print!("{}", format_stats(&stats, session.deck_len()));
}

fn vocab_pool(file: &Path, lessons: Option<&str>) -> Vec<VocabEntry> {
    let list = load(file);
    let lessons = parse_lessons_arg(lessons);
    select(&list, lessons.as_ref(), None)
        .into_iter()
        .cloned()
        .collect()
}

pub fn conjugation_deck(
    file: &Path,
    lessons: Option<&str>,
    forms: &[Form],
    style: NegativeStyle,
) -> Vec<Card> {
    conjugation_cards(&vocab_pool(file, lessons), forms, style)
}

pub fn te_form_deck(file: &Path, lessons: Option<&str>) -> Vec<Card> {
    te_form_cards(&vocab_pool(file, lessons))
}

/// Counter cards for 1..=`max`. An empty `names` selects the whole catalog.
pub fn counter_deck(names: &[String], max: u32, with_question: bool) -> Vec<Card> {
    let catalog = CounterCatalog::global();
    let entries: Vec<&CatalogEntry> = if names.is_empty() {
        catalog.iter().collect()
    } else {
        names
            .iter()
            .map(|name| {
                catalog.find(name).unwrap_or_else(|| {
                    eprintln!("Error: unknown counter {name:?}");
                    std::process::exit(1);
                })
            })
            .collect()
    };
    let quantities: Vec<u32> = (1..=max).collect();
    die!(
        counter_cards(entries, &quantities, with_question),
        "Error: {}"
    )
}
