//! Humanizer: randomized surface edits that make generated text read like an
//! informal student draft.
//!
//! Two passes run in a fixed order: `add_natural_variations` then `humanize`.
//! Every random decision draws from an injected `RandomSource`; an event with
//! probability `p` fires when the draw is below `p`. Production draws from the
//! thread RNG, so output is intentionally not reproducible.

use std::sync::LazyLock;

use rand::Rng;
use regex::{Captures, Regex};

use crate::analysis::lexicon::{contains_ignore_case, STYLE_STOPWORDS, TYPO_STOPWORDS};

static INTENSITY_ADJECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b(important|significant|key)\b")
        .expect("Invalid regex: intensity adjective")
});
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\. ([A-Z])").expect("Invalid regex: sentence boundary"));
static LONG_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\b\w{5,}\b").expect("Invalid regex: long word"));
static COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(",").expect("Invalid regex: comma"));
static COPULA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\b(is|are)\b").expect("Invalid regex: copula"));

const REALLY_PROBABILITY: f64 = 0.3;
const WELL_PROBABILITY: f64 = 0.7;
const I_THINK_PROBABILITY: f64 = 0.2;
const TYPO_PROBABILITY: f64 = 0.003;
const TYPO_SUBSTITUTION_PROBABILITY: f64 = 0.3;
const SEMICOLON_PROBABILITY: f64 = 0.1;
const HEDGE_PROBABILITY: f64 = 0.2;
const RUN_ON_PROBABILITY: f64 = 0.1;

/// Substring swaps tried in order; the first one that applies wins.
const TYPO_TABLE: [(&str, &str); 3] = [("th", "ht"), ("ie", "ei"), ("el", "le")];

/// A uniform source of values in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_f64(&mut self) -> f64;
}

/// Draws from `rand`'s thread-local generator. Unseeded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

fn fires(rng: &mut dyn RandomSource, probability: f64) -> bool {
    rng.next_f64() < probability
}

/// Runs both passes in order.
pub fn apply(text: &str, rng: &mut dyn RandomSource) -> String {
    let varied = add_natural_variations(text, rng);
    humanize(&varied, rng)
}

/// Adds filler: "really" before intensity adjectives, then "Well, " and
/// "I think " at sentence starts. The "I think" pass sees the text as already
/// modified by the "Well, " pass.
pub fn add_natural_variations(text: &str, rng: &mut dyn RandomSource) -> String {
    let text = INTENSITY_ADJECTIVE.replace_all(text, |caps: &Captures| {
        if fires(rng, REALLY_PROBABILITY) {
            format!("really {}", &caps[0])
        } else {
            caps[0].to_string()
        }
    });

    let text = SENTENCE_BOUNDARY.replace_all(&text, |caps: &Captures| {
        if fires(rng, WELL_PROBABILITY) {
            format!(". Well, {}", &caps[1])
        } else {
            caps[0].to_string()
        }
    });

    SENTENCE_BOUNDARY
        .replace_all(&text, |caps: &Captures| {
            if fires(rng, I_THINK_PROBABILITY) {
                format!(". I think {}", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Adds imperfections: rare typos, commas turned into semicolons, "seems to"
/// hedges and sentences joined with "and".
pub fn humanize(text: &str, rng: &mut dyn RandomSource) -> String {
    let text = LONG_WORD.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        if fires(rng, TYPO_PROBABILITY) {
            introduce_typo(word, rng)
        } else {
            word.to_string()
        }
    });

    let text = COMMA.replace_all(&text, |caps: &Captures| {
        if fires(rng, SEMICOLON_PROBABILITY) {
            ";".to_string()
        } else {
            caps[0].to_string()
        }
    });

    let text = COPULA.replace_all(&text, |caps: &Captures| {
        if fires(rng, HEDGE_PROBABILITY) {
            format!("seems to {}", &caps[0])
        } else {
            caps[0].to_string()
        }
    });

    SENTENCE_BOUNDARY
        .replace_all(&text, |caps: &Captures| {
            if fires(rng, RUN_ON_PROBABILITY) {
                format!(" and {}", caps[1].to_lowercase())
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Swaps the first matching letter pair of an everyday word. Technical terms,
/// proper nouns and stoplisted words come back unchanged.
fn introduce_typo(word: &str, rng: &mut dyn RandomSource) -> String {
    if !is_typo_candidate(word) {
        return word.to_string();
    }

    for (correct, typo) in TYPO_TABLE {
        if word.contains(correct) && fires(rng, TYPO_SUBSTITUTION_PROBABILITY) {
            return word.replacen(correct, typo, 1);
        }
    }

    word.to_string()
}

/// Medium-length, lowercase-initial, not in either stoplist.
fn is_typo_candidate(word: &str) -> bool {
    let len = word.chars().count();
    let lowercase_start = word.chars().next().is_some_and(char::is_lowercase);

    (5..=11).contains(&len)
        && lowercase_start
        && !contains_ignore_case(TYPO_STOPWORDS, word)
        && !contains_ignore_case(STYLE_STOPWORDS, word)
}
