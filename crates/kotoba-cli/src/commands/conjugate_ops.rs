use clap::ValueEnum;
use serde::Serialize;

use kotoba_engine::conjugate::{
    conjugate, conjugation_table, te_form, ConjugatedForm, ConjugationClass, Form,
    NegativeStyle, Polarity, Tense,
};
use kotoba_engine::settings::settings;

use crate::format::pad;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    Noun,
    NaAdj,
    /// い-adjective; words ending in いい conjugate irregularly.
    IAdj,
}

impl ClassArg {
    pub fn resolve(self, word: &str) -> ConjugationClass {
        match self {
            ClassArg::Noun => ConjugationClass::Noun,
            ClassArg::NaAdj => ConjugationClass::NaAdjective,
            ClassArg::IAdj => ConjugationClass::for_i_adjective(word),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    Short,
    Long,
}

impl From<FormArg> for Form {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Short => Form::Short,
            FormArg::Long => Form::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TenseArg {
    NonPast,
    Past,
}

impl From<TenseArg> for Tense {
    fn from(arg: TenseArg) -> Self {
        match arg {
            TenseArg::NonPast => Tense::NonPast,
            TenseArg::Past => Tense::Past,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolarityArg {
    Affirmative,
    Negative,
}

impl From<PolarityArg> for Polarity {
    fn from(arg: PolarityArg) -> Self {
        match arg {
            PolarityArg::Affirmative => Polarity::Positive,
            PolarityArg::Negative => Polarity::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Colloquial,
    Conservative,
}

impl From<StyleArg> for NegativeStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Colloquial => NegativeStyle::Colloquial,
            StyleArg::Conservative => NegativeStyle::Conservative,
        }
    }
}

/// Explicit `--style`, else the configured default.
pub fn resolve_style(style: Option<StyleArg>) -> NegativeStyle {
    style
        .map(NegativeStyle::from)
        .unwrap_or(settings().conjugation.negative_style)
}

pub struct ConjugateArgs {
    pub class: ClassArg,
    pub form: FormArg,
    pub tense: TenseArg,
    pub polarity: PolarityArg,
    pub style: Option<StyleArg>,
}

pub fn conjugate_cmd(word: &str, args: &ConjugateArgs) {
    let surface = conjugate(
        word,
        args.class.resolve(word),
        args.form.into(),
        args.tense.into(),
        args.polarity.into(),
        resolve_style(args.style),
    );
    println!("{surface}");
}

#[derive(Serialize)]
struct TableJson<'a> {
    word: &'a str,
    class: ConjugationClass,
    style: NegativeStyle,
    forms: &'a [ConjugatedForm],
    te_form: &'a str,
}

pub fn table_cmd(word: &str, class: ClassArg, style: Option<StyleArg>, json: bool) {
    let class = class.resolve(word);
    let style = resolve_style(style);
    let forms = conjugation_table(word, class, style);
    let te = te_form(word, class);
    if json {
        let out = TableJson {
            word,
            class,
            style,
            forms: &forms,
            te_form: &te,
        };
        let text = die!(serde_json::to_string_pretty(&out), "Error: {}");
        println!("{text}");
    } else {
        print!("{}", format_table(word, class, &forms, &te));
    }
}

pub fn format_table(
    word: &str,
    class: ConjugationClass,
    forms: &[ConjugatedForm],
    te: &str,
) -> String {
    let mut out = format!("{word} ({class})\n");
    for f in forms {
        out.push_str(&format!(
            "  {}{}{}{}\n",
            pad(&f.form.to_string(), 7),
            pad(&f.tense.to_string(), 10),
            pad(&f.polarity.to_string(), 13),
            f.surface
        ));
    }
    out.push_str(&format!("  {}{te}\n", pad("te-form", 30)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_resolution() {
        assert_eq!(ClassArg::IAdj.resolve("いい"), ConjugationClass::IrregularAdjective);
        assert_eq!(ClassArg::IAdj.resolve("あつい"), ConjugationClass::IAdjective);
        assert_eq!(ClassArg::NaAdj.resolve("いい"), ConjugationClass::NaAdjective);
    }

    #[test]
    fn explicit_style_wins() {
        assert_eq!(
            resolve_style(Some(StyleArg::Colloquial)),
            NegativeStyle::Colloquial
        );
        assert_eq!(resolve_style(None), settings().conjugation.negative_style);
    }

    #[test]
    fn text_table() {
        let class = ConjugationClass::IAdjective;
        let forms = conjugation_table("さむい", class, NegativeStyle::Conservative);
        let text = format_table("さむい", class, &forms, &te_form("さむい", class));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "さむい (i-adjective)");
        assert_eq!(lines[1], "  short  non-past  affirmative  さむい");
        assert!(lines[8].ends_with("さむくありませんでした"));
        assert!(lines[9].trim_start().starts_with("te-form"));
        assert!(lines[9].ends_with("さむくて"));
    }

    #[test]
    fn json_shape() {
        let forms = conjugation_table(
            "しずか",
            ConjugationClass::NaAdjective,
            NegativeStyle::Colloquial,
        );
        let out = TableJson {
            word: "しずか",
            class: ConjugationClass::NaAdjective,
            style: NegativeStyle::Colloquial,
            forms: &forms,
            te_form: "しずかで",
        };
        let value: serde_json::Value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["class"], "na-adjective");
        assert_eq!(value["style"], "colloquial");
        assert_eq!(value["forms"][3]["tense"], "past");
        assert_eq!(value["forms"][3]["polarity"], "negative");
        assert_eq!(value["forms"][3]["surface"], "しずかじゃなかった");
    }
}
