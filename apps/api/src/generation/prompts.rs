// Instruction block sent to the generation backend.
// The block's layout is the contract with the model: keep section headings and
// list items stable.

use tracing::warn;

use crate::generation::error_patterns::{describe_typical_errors, NO_CONSISTENT_ERRORS};

/// Used when the assignment prompt is empty.
pub const DEFAULT_ASSIGNMENT: &str = "Write a short essay about a topic of your choice";

/// Used when no course materials were supplied.
pub const DEFAULT_MATERIALS: &str = "Use general knowledge on the topic";

/// Present in every instruction block, whatever the inputs.
pub const DO_NOT_COPY_INSTRUCTION: &str =
    "DO NOT COPY THE SAMPLE TEXT DIRECTLY. CREATE NEW CONTENT.";

/// Composes the instruction block from the raw request fields.
///
/// Only the narrow informal-error heuristic feeds into the block; the style,
/// material and prompt profiles are not consulted.
pub fn build_instruction_block(
    writing_sample: &str,
    materials: Option<&str>,
    assignment_prompt: &str,
) -> String {
    let error_patterns = describe_typical_errors(writing_sample).unwrap_or_else(|e| {
        warn!("Error analyzing typical errors: {e}");
        NO_CONSISTENT_ERRORS.to_string()
    });

    let assignment = if assignment_prompt.is_empty() {
        DEFAULT_ASSIGNMENT
    } else {
        assignment_prompt
    };
    let materials = materials
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MATERIALS);

    format!(
        r#"INSTRUCTIONS: Write a response to the following assignment prompt using the style patterns below. {DO_NOT_COPY_INSTRUCTION}

ASSIGNMENT: {assignment}

COURSE MATERIALS TO REFERENCE: {materials}

STYLE GUIDANCE - Write like a student who:
- Sometimes repeats ideas slightly differently
- Occasionally uses informal transitions
- Makes minor grammar mistakes ({error_patterns})
- Shows personal opinion through phrases like "I believe" or "In my view"
- References course materials naturally, not perfectly

CONTENT REQUIREMENTS:
- Include 2-3 slightly imperfect citations
- Make 1-2 minor logical leaps
- Add personal anecdotes or reactions
- Vary paragraph lengths unpredictably

WRITING SAMPLE FOR STYLE MATCHING ONLY (DO NOT COPY THIS CONTENT - ONLY MATCH THE STYLE):
{writing_sample}

YOUR RESPONSE TO THE ASSIGNMENT:
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_always_forbids_copying() {
        for (sample, materials, prompt) in [
            ("My sample.", Some("Notes."), "Write about X"),
            ("", None, ""),
            ("Sample", Some(""), "Prompt"),
        ] {
            let block = build_instruction_block(sample, materials, prompt);
            assert!(block.contains(DO_NOT_COPY_INSTRUCTION));
            assert!(block.contains("DO NOT COPY THIS CONTENT - ONLY MATCH THE STYLE"));
        }
    }

    #[test]
    fn test_defaults_when_inputs_empty() {
        let block = build_instruction_block("Sample text.", None, "");
        assert!(block.contains(&format!("ASSIGNMENT: {DEFAULT_ASSIGNMENT}")));
        assert!(block.contains(&format!("COURSE MATERIALS TO REFERENCE: {DEFAULT_MATERIALS}")));

        let empty_materials = build_instruction_block("Sample text.", Some(""), "Prompt");
        assert!(empty_materials.contains(DEFAULT_MATERIALS));
    }

    #[test]
    fn test_inputs_embedded_in_order() {
        let block = build_instruction_block(
            "I wrote this myself.",
            Some("Chapter 1 notes"),
            "Analyze the causes of X",
        );
        let assignment = block.find("ASSIGNMENT: Analyze the causes of X").unwrap();
        let materials = block
            .find("COURSE MATERIALS TO REFERENCE: Chapter 1 notes")
            .unwrap();
        let guidance = block.find("STYLE GUIDANCE").unwrap();
        let requirements = block.find("CONTENT REQUIREMENTS:").unwrap();
        let sample = block.find("I wrote this myself.").unwrap();
        let response = block.find("YOUR RESPONSE TO THE ASSIGNMENT:").unwrap();
        assert!(assignment < materials);
        assert!(materials < guidance);
        assert!(guidance < requirements);
        assert!(requirements < sample);
        assert!(sample < response);
    }

    #[test]
    fn test_error_description_embedded() {
        let block = build_instruction_block("It rained hard, we stayed inside.", None, "Prompt");
        assert!(block.contains("Makes minor grammar mistakes (occasional comma splices)"));

        let clean = build_instruction_block("Hello.", None, "Prompt");
        assert!(clean.contains("Makes minor grammar mistakes (no consistent errors)"));
    }

    #[test]
    fn test_canonical_lists_present() {
        let block = build_instruction_block("Sample.", None, "Prompt");
        for item in [
            "- Sometimes repeats ideas slightly differently",
            "- Occasionally uses informal transitions",
            "- Shows personal opinion through phrases like \"I believe\" or \"In my view\"",
            "- References course materials naturally, not perfectly",
            "- Include 2-3 slightly imperfect citations",
            "- Make 1-2 minor logical leaps",
            "- Add personal anecdotes or reactions",
            "- Vary paragraph lengths unpredictably",
        ] {
            assert!(block.contains(item), "missing: {item}");
        }
    }
}
