use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kotoba_cli::commands::conjugate_ops::{
    ClassArg, ConjugateArgs, FormArg, PolarityArg, StyleArg, TenseArg,
};
use kotoba_cli::commands::{config_ops, conjugate_ops, counter_ops, kana_ops, vocab_ops};

#[derive(Parser)]
#[command(name = "kototool", about = "Japanese conjugation, counter and kana lookups")]
struct Cli {
    /// Custom counter catalog TOML (replaces the built-in one)
    #[arg(long, global = true)]
    counters: Option<PathBuf>,
    /// Custom settings TOML
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
    /// Conjugate a noun or adjective into one form
    Conjugate {
        /// Dictionary form, in kana or kanji
        word: String,
        #[arg(long, value_enum)]
        class: ClassArg,
        #[arg(long, value_enum, default_value = "short")]
        form: FormArg,
        #[arg(long, value_enum, default_value = "non-past")]
        tense: TenseArg,
        #[arg(long, value_enum, default_value = "affirmative")]
        polarity: PolarityArg,
        /// Polite negative style (default from settings)
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },

    /// Print every short and long form plus the te-form
    Table {
        word: String,
        #[arg(long, value_enum)]
        class: ClassArg,
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read quantities with a counter
    Count {
        /// Counter name or label (sticks, 本, ...)
        counter: String,
        /// Quantities to read
        #[arg(required = true)]
        quantities: Vec<u32>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the counter catalog with readings for 1-10 and the question word
    Counters {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the consonant row and vowel column of each kana
    Classify { text: String },

    /// Move a mora to another consonant row (or vowel column with --vowel)
    Morph {
        mora: String,
        /// Row label (k, g, p, ...) or vowel label (a, i, u, e, o)
        target: String,
        #[arg(long)]
        vowel: bool,
    },

    /// Split a furigana field into its kana readings
    Readings { text: String },

    /// List vocabulary from a TSV export
    Vocab {
        /// Path to the vocabulary TSV
        file: PathBuf,
        /// Lesson selection such as 3-12 or 1,2,5-7
        #[arg(long)]
        lessons: Option<String>,
        /// Word class (noun, i-adj, ... or n., い-adj., ...)
        #[arg(long)]
        class: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export the built-in counter catalog TOML to stdout
    CountersExport,

    /// Validate a counter catalog TOML file
    CountersValidate { file: String },

    /// Export the built-in settings TOML to stdout
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();
    kotoba_cli::init(
        cli.trace_dir.as_deref(),
        cli.counters.as_deref(),
        cli.settings.as_deref(),
    );

    match cli.command {
        Command::Conjugate {
            word,
            class,
            form,
            tense,
            polarity,
            style,
        } => {
            let args = ConjugateArgs {
                class,
                form,
                tense,
                polarity,
                style,
            };
            conjugate_ops::conjugate_cmd(&word, &args);
        }
        Command::Table {
            word,
            class,
            style,
            json,
        } => conjugate_ops::table_cmd(&word, class, style, json),
        Command::Count {
            counter,
            quantities,
            json,
        } => counter_ops::count_cmd(&counter, &quantities, json),
        Command::Counters { json } => counter_ops::counters_cmd(json),
        Command::Classify { text } => kana_ops::classify_cmd(&text),
        Command::Morph {
            mora,
            target,
            vowel,
        } => kana_ops::morph_cmd(&mora, &target, vowel),
        Command::Readings { text } => kana_ops::readings_cmd(&text),
        Command::Vocab {
            file,
            lessons,
            class,
            json,
        } => vocab_ops::vocab_cmd(&file, lessons.as_deref(), class.as_deref(), json),
        Command::CountersExport => config_ops::counters_export(),
        Command::CountersValidate { file } => config_ops::counters_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
