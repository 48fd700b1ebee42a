//! Shared word lists for the text heuristics.
//!
//! Every list that more than one analyzer consults lives here so the sets cannot
//! drift apart silently. Bump `LEXICON_VERSION` whenever any list changes; the
//! analyze endpoint reports it alongside the profiles it produced.

/// Version of the word lists below.
pub const LEXICON_VERSION: u32 = 1;

/// High-frequency words excluded from a writing sample's favourite words.
/// Also keeps the humanizer away from everyday vocabulary.
pub const STYLE_STOPWORDS: &[&str] = &[
    "the", "and", "that", "have", "for", "not", "with", "you", "this", "but", "his", "from",
    "they", "she", "will", "would", "there", "their", "what", "about", "which", "when", "make",
    "like", "time", "just", "know", "take", "into", "year", "your", "some", "could", "them",
    "than", "then", "look", "only", "come", "over", "think", "also", "back", "after", "work",
    "first", "well", "even", "want", "because", "these", "give", "most",
];

/// Words the humanizer never misspells. Overlaps `STYLE_STOPWORDS` and adds
/// discourse words a reader would notice immediately if garbled.
pub const TYPO_STOPWORDS: &[&str] = &[
    "the", "and", "that", "have", "for", "not", "with", "you", "this", "but", "his", "from",
    "they", "say", "her", "she", "will", "one", "all", "would", "there", "their", "what", "out",
    "about", "who", "get", "which", "when", "make", "can", "like", "time", "just", "him", "know",
    "take", "people", "into", "year", "your", "good", "some", "could", "them", "see", "other",
    "than", "then", "now", "look", "only", "come", "its", "over", "think", "also", "back",
    "after", "use", "two", "how", "our", "work", "first", "well", "way", "even", "new", "want",
    "because", "these", "give", "most", "important", "however", "through", "being", "therefore",
    "although", "something", "anything", "everything", "nothing", "sometimes", "always", "never",
    "usually", "often", "rarely",
];

/// Capitalized tokens that are never course-material key terms.
pub const CAPITALIZED_STOPWORDS: &[&str] =
    &["I", "The", "A", "An", "In", "On", "At", "To", "For", "With", "By"];

/// Transition vocabulary looked for in writing samples.
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "consequently",
    "furthermore",
    "nevertheless",
    "indeed",
    "meanwhile",
    "nonetheless",
    "thus",
    "also",
    "besides",
    "then",
    "additionally",
    "finally",
    "subsequently",
];

/// Instruction verbs recognised in assignment prompts, reported in this order.
pub const INSTRUCTION_VERBS: &[&str] = &[
    "analyze",
    "argue",
    "compare",
    "contrast",
    "define",
    "describe",
    "discuss",
    "evaluate",
    "examine",
    "explain",
    "illustrate",
    "interpret",
    "justify",
    "outline",
    "review",
    "summarize",
    "trace",
];

/// Whether `word` (case-insensitive) appears in `list`.
pub fn contains_ignore_case(list: &[&str], word: &str) -> bool {
    list.iter().any(|w| w.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typo_stopwords_cover_style_stopwords() {
        let missing: Vec<_> = STYLE_STOPWORDS
            .iter()
            .filter(|w| !TYPO_STOPWORDS.contains(w))
            .collect();
        assert!(missing.is_empty(), "not covered: {missing:?}");
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(TRANSITION_WORDS.len(), 16);
        assert_eq!(INSTRUCTION_VERBS.len(), 17);
        assert_eq!(CAPITALIZED_STOPWORDS.len(), 11);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case(STYLE_STOPWORDS, "Because"));
        assert!(!contains_ignore_case(STYLE_STOPWORDS, "photosynthesis"));
    }
}
