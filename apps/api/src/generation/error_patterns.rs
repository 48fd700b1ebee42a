//! Informal-error heuristic used by the instruction block.
//!
//! Deliberately narrower than the style analyzer's error patterns: it only looks
//! for comma splices, long run-ons, homophones and tense mixing, and reports them
//! as a phrase the model can imitate.

use std::sync::LazyLock;

use regex::Regex;

/// Reported when the sample shows none of the patterns, or when the heuristic
/// cannot run.
pub const NO_CONSISTENT_ERRORS: &str = "no consistent errors";

/// Tense mixing counts only while the dominant tense is less than this many
/// times as frequent as the other.
const TENSE_MIX_RATIO: f64 = 3.0;

struct TypicalErrorPatterns {
    comma_splice: Regex,
    run_on: Regex,
    homophone: Regex,
    present_tense: Regex,
    past_tense: Regex,
}

impl TypicalErrorPatterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            comma_splice: Regex::new(r"(?i)[a-z]+ [a-z]+, [a-z]+ [a-z]+")?,
            run_on: Regex::new(r"(?i)[a-z]+(?: [a-z]+){13}")?,
            homophone: Regex::new(
                r"(?i-u)\b(they're|their|there|your|you're|its|it's|affect|effect|then|than)\b",
            )?,
            present_tense: Regex::new(r"(?i-u)\b(is|are|am|has|have|do|does)\b")?,
            past_tense: Regex::new(r"(?i-u)\b(was|were|had|did)\b")?,
        })
    }
}

static PATTERNS: LazyLock<Result<TypicalErrorPatterns, regex::Error>> =
    LazyLock::new(TypicalErrorPatterns::compile);

/// Describes the informal errors present in `writing_sample`, joined with ", ",
/// or `NO_CONSISTENT_ERRORS` when none are found.
pub fn describe_typical_errors(writing_sample: &str) -> Result<String, regex::Error> {
    let patterns = PATTERNS.as_ref().map_err(Clone::clone)?;
    let mut errors = Vec::new();

    if patterns.comma_splice.is_match(writing_sample) {
        errors.push("occasional comma splices");
    }

    if patterns.run_on.is_match(writing_sample) {
        errors.push("some run-on sentences");
    }

    if patterns.homophone.is_match(writing_sample) {
        errors.push("occasional homophone confusion");
    }

    let present = patterns.present_tense.find_iter(writing_sample).count();
    let past = patterns.past_tense.find_iter(writing_sample).count();
    if present > 0 && past > 0 {
        let ratio = present.max(past) as f64 / present.min(past) as f64;
        if ratio < TENSE_MIX_RATIO {
            errors.push("occasional tense shifting");
        }
    }

    if errors.is_empty() {
        Ok(NO_CONSISTENT_ERRORS.to_string())
    } else {
        Ok(errors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_sample_has_no_consistent_errors() {
        assert_eq!(describe_typical_errors("Hello.").unwrap(), NO_CONSISTENT_ERRORS);
        assert_eq!(describe_typical_errors("").unwrap(), NO_CONSISTENT_ERRORS);
    }

    #[test]
    fn test_comma_splice() {
        let described = describe_typical_errors("It rained hard, we stayed inside.").unwrap();
        assert_eq!(described, "occasional comma splices");
    }

    #[test]
    fn test_run_on_needs_fourteen_words() {
        let thirteen = "one two three four five six seven eight nine ten eleven twelve thirteen";
        assert_eq!(describe_typical_errors(thirteen).unwrap(), NO_CONSISTENT_ERRORS);

        let fourteen = format!("{thirteen} fourteen");
        assert_eq!(
            describe_typical_errors(&fourteen).unwrap(),
            "some run-on sentences"
        );
    }

    #[test]
    fn test_homophones() {
        assert_eq!(
            describe_typical_errors("Their dog.").unwrap(),
            "occasional homophone confusion"
        );
    }

    #[test]
    fn test_tense_shifting_requires_balanced_mix() {
        assert_eq!(
            describe_typical_errors("He is here. She was there.").unwrap(),
            "occasional homophone confusion, occasional tense shifting"
        );
        // 3:1 is dominated by the present tense
        assert_eq!(
            describe_typical_errors("He is. We are. I am. It was.").unwrap(),
            NO_CONSISTENT_ERRORS
        );
    }

    #[test]
    fn test_multiple_errors_joined_in_order() {
        let sample = "I think their plan is good, we was ready for it and the team had \
            worked on it for many long weeks before the end";
        assert_eq!(
            describe_typical_errors(sample).unwrap(),
            "occasional comma splices, some run-on sentences, occasional homophone confusion, occasional tense shifting"
        );
    }
}
