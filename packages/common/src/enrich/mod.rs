//! Heuristic enrichment of raw submissions.
//!
//! Every function in this module is a total, deterministic stand-in for a
//! model-backed step (speech-to-text, vision tagging, price estimation). A
//! real model is a drop-in replacement behind the same signature; the
//! orchestrator never needs to know the difference.

mod narrative;
mod price;
mod tags;
mod transcript;

pub use narrative::{extract_name, synthesize_story};
pub use price::suggest_price;
pub use tags::classify_tags;
pub use transcript::resolve_transcript;

use std::path::Path;

/// Filename without its final extension.
pub(crate) fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

/// Capitalize the first letter of each whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
