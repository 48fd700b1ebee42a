//! Prompt Analyzer: classifies an assignment prompt and extracts its explicit
//! requirements (length, deadline, citations, instruction verbs).

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::analysis::lexicon::INSTRUCTION_VERBS;
use crate::analysis::token_count;

/// Keyword groups in priority order. A later group never overrides an earlier
/// match, so "analyze and compare" is analytical.
static ASSIGNMENT_TYPES: LazyLock<Vec<(AssignmentType, Regex)>> = LazyLock::new(|| {
    vec![
        (
            AssignmentType::Analytical,
            Regex::new(r"(?i)(?:analyze|analysis|examine|explore|investigate|evaluate|assess)")
                .expect("Invalid regex: analytical keywords"),
        ),
        (
            AssignmentType::Comparison,
            Regex::new(r"(?i)(?:compare|contrast|differentiate|distinguish|similarities|differences)")
                .expect("Invalid regex: comparison keywords"),
        ),
        (
            AssignmentType::Argumentative,
            Regex::new(r"(?i)(?:argue|argument|persuade|convince|position|stance|defend)")
                .expect("Invalid regex: argumentative keywords"),
        ),
        (
            AssignmentType::Explanatory,
            Regex::new(r"(?i)(?:explain|description|describe|illustrate|define)")
                .expect("Invalid regex: explanatory keywords"),
        ),
        (
            AssignmentType::Research,
            Regex::new(r"(?i)(?:research|study|investigate|report|findings)")
                .expect("Invalid regex: research keywords"),
        ),
        (
            AssignmentType::Reflective,
            Regex::new(r"(?i)(?:reflect|personal|experience|learning|growth)")
                .expect("Invalid regex: reflective keywords"),
        ),
    ]
});
static WORD_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?:word|words)").expect("Invalid regex: word count")
});
static DEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:due|deadline|by|before)\s*(?:the)?\s*([0-9]+(?:st|nd|rd|th)?\s+(?:of\s+)?(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)(?:\s+[0-9]{4})?)",
    )
    .expect("Invalid regex: deadline")
});
static CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:cite|citation|reference|MLA|APA|Chicago|sources|bibliography)")
        .expect("Invalid regex: citation keywords")
});
static VERBS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    INSTRUCTION_VERBS
        .iter()
        .map(|verb| {
            let pattern = format!(r"(?i-u)\b{verb}\b");
            (*verb, Regex::new(&pattern).expect("Invalid regex: instruction verb"))
        })
        .collect()
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    Analytical,
    Comparison,
    Argumentative,
    Explanatory,
    Research,
    Reflective,
    #[default]
    Essay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptProfile {
    pub assignment_type: AssignmentType,
    /// Explicit "<n> words" requirement, if any.
    pub word_count: Option<u64>,
    pub deadline: Option<String>,
    pub requires_citations: bool,
    /// Vocabulary order, not order of appearance.
    pub instruction_verbs: Vec<String>,
    pub prompt_length: usize,
}

pub fn analyze_assignment_prompt(prompt: &str) -> PromptProfile {
    PromptProfile {
        assignment_type: classify_assignment(prompt),
        word_count: WORD_COUNT
            .captures(prompt)
            .and_then(|caps| caps[1].parse().ok()),
        deadline: DEADLINE.captures(prompt).map(|caps| caps[1].to_string()),
        requires_citations: CITATION.is_match(prompt),
        instruction_verbs: VERBS
            .iter()
            .filter(|(_, re)| re.is_match(prompt))
            .map(|(verb, _)| verb.to_string())
            .collect(),
        prompt_length: token_count(prompt),
    }
}

fn classify_assignment(prompt: &str) -> AssignmentType {
    ASSIGNMENT_TYPES
        .iter()
        .find(|(_, re)| re.is_match(prompt))
        .map(|(kind, _)| *kind)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_beats_compare() {
        let profile = analyze_assignment_prompt("Analyze and compare the two novels.");
        assert_eq!(profile.assignment_type, AssignmentType::Analytical);
    }

    #[test]
    fn test_each_type_classified() {
        let cases = [
            ("Compare cats with dogs", AssignmentType::Comparison),
            ("Argue for a four-day week", AssignmentType::Argumentative),
            ("Explain how vaccines work", AssignmentType::Explanatory),
            ("Write a report on recycling", AssignmentType::Research),
            ("Reflect on your summer", AssignmentType::Reflective),
            ("Write about autumn", AssignmentType::Essay),
        ];
        for (prompt, expected) in cases {
            assert_eq!(
                analyze_assignment_prompt(prompt).assignment_type,
                expected,
                "prompt: {prompt}"
            );
        }
    }

    #[test]
    fn test_word_count_requirement() {
        let profile = analyze_assignment_prompt("Analyze the causes of WWI in 500 words");
        assert_eq!(profile.word_count, Some(500));
        assert_eq!(analyze_assignment_prompt("Write something").word_count, None);
        assert_eq!(
            analyze_assignment_prompt("Write 1200words please").word_count,
            Some(1200)
        );
    }

    #[test]
    fn test_deadline_extracted() {
        let profile = analyze_assignment_prompt("Essay due the 5th of March 2025. Cite sources.");
        assert_eq!(profile.deadline.as_deref(), Some("5th of March 2025"));
        assert_eq!(
            analyze_assignment_prompt("Submit before 12 Oct").deadline.as_deref(),
            Some("12 Oct")
        );
        assert_eq!(analyze_assignment_prompt("Due soon").deadline, None);
    }

    #[test]
    fn test_citation_requirement() {
        assert!(analyze_assignment_prompt("Use APA format").requires_citations);
        assert!(analyze_assignment_prompt("Include a bibliography").requires_citations);
        assert!(!analyze_assignment_prompt("Write freely").requires_citations);
    }

    #[test]
    fn test_instruction_verbs_in_vocabulary_order() {
        let profile =
            analyze_assignment_prompt("Summarize the text, then Explain and analyze it.");
        assert_eq!(profile.instruction_verbs, vec!["analyze", "explain", "summarize"]);
    }

    #[test]
    fn test_instruction_verbs_whole_word_only() {
        let profile = analyze_assignment_prompt("Write an analyzed retracement");
        assert!(profile.instruction_verbs.is_empty());
    }

    #[test]
    fn test_prompt_length() {
        assert_eq!(
            analyze_assignment_prompt("Analyze the causes of X in 500 words").prompt_length,
            8
        );
    }
}
