// Assignment generation: instruction block, backend call, humanization.
// All backend calls go through llm_client::TextGenerator.

pub mod error_patterns;
pub mod generator;
pub mod handlers;
pub mod humanizer;
pub mod prompts;
