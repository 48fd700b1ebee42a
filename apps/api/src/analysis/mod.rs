// Text analysis: style, course materials and assignment prompts.
// Everything here is deterministic regex matching over the raw request text.
// Word classes and boundaries are ASCII-only (`(?-u)`), so accented letters
// split words.

pub mod assignment;
pub mod handlers;
pub mod lexicon;
pub mod materials;
pub mod style;

/// Rounds `value` to `places` decimal places (half away from zero).
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `count / total` rounded to `places`; zero when there is nothing to divide by.
pub(crate) fn rate(count: usize, total: usize, places: i32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(count as f64 / total as f64, places)
}

/// Whitespace-delimited token count.
pub(crate) fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
