use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kotoba_cli::commands::conjugate_ops::{resolve_style, FormArg, StyleArg};
use kotoba_cli::commands::drill_ops;
use kotoba_engine::conjugate::Form;

#[derive(Parser)]
#[command(name = "kotodrill", about = "Flashcard drills for conjugations and counters")]
struct Cli {
    /// Custom counter catalog TOML (replaces the built-in one)
    #[arg(long, global = true)]
    counters: Option<PathBuf>,
    /// Custom settings TOML (review interval, attempts, negative style)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSON trace logs to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate nouns and adjectives from a vocabulary list
    Conjugation {
        /// Path to the vocabulary TSV
        file: PathBuf,
        /// Lesson selection such as 3-12 or 1,2,5-7
        #[arg(long)]
        lessons: Option<String>,
        /// Forms to drill (repeatable; both when omitted)
        #[arg(long = "form", value_enum)]
        forms: Vec<FormArg>,
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },

    /// Te-forms of nouns and adjectives from a vocabulary list
    TeForm {
        file: PathBuf,
        #[arg(long)]
        lessons: Option<String>,
    },

    /// Counter readings
    Counters {
        /// Counter names or labels (whole catalog when omitted)
        names: Vec<String>,
        /// Drill quantities 1 through this
        #[arg(long, default_value = "10")]
        max: u32,
        /// Also ask the question word (何本 ...)
        #[arg(long)]
        question: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    kotoba_cli::init(
        cli.trace_dir.as_deref(),
        cli.counters.as_deref(),
        cli.settings.as_deref(),
    );

    let deck = match cli.command {
        Command::Conjugation {
            file,
            lessons,
            forms,
            style,
        } => {
            let forms: Vec<Form> = if forms.is_empty() {
                Form::ALL.to_vec()
            } else {
                forms.into_iter().map(Form::from).collect()
            };
            drill_ops::conjugation_deck(&file, lessons.as_deref(), &forms, resolve_style(style))
        }
        Command::TeForm { file, lessons } => drill_ops::te_form_deck(&file, lessons.as_deref()),
        Command::Counters {
            names,
            max,
            question,
        } => drill_ops::counter_deck(&names, max, question),
    };
    drill_ops::start(deck);
}
