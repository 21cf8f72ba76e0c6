use super::title_case;

const NAME_PHRASE: &str = "my name is ";
const FALLBACK_NAME: &str = "A Local Artisan";

/// Extract the presumed speaker name from a transcript.
///
/// Searches for "my name is" case-insensitively and takes the next one or
/// two whitespace tokens. Every failure path yields the fixed fallback; the
/// fallback is an explicit branch, not a swallowed error.
pub fn extract_name(transcript: &str) -> String {
    name_after_phrase(transcript).unwrap_or_else(|| FALLBACK_NAME.to_string())
}

fn name_after_phrase(transcript: &str) -> Option<String> {
    let start = transcript.to_lowercase().find(NAME_PHRASE)? + NAME_PHRASE.len();
    // Lowercasing can shift byte offsets for non-ASCII text; an off-boundary
    // index falls back rather than panics.
    let tail = transcript.get(start..)?;

    let tokens: Vec<&str> = tail.split_whitespace().take(2).collect();
    let joined = tokens.join(" ");
    let name = joined.trim_matches(|c| c == ',' || c == '.').trim();
    if name.is_empty() {
        return None;
    }
    Some(title_case(name))
}

/// Compose a short marketing story from a transcript.
///
/// Keyword scan with fixed precedence: weaving, then pottery, then a generic
/// craftsman template. Same transcript always yields the same story.
pub fn synthesize_story(transcript: &str) -> String {
    let name = extract_name(transcript);
    let lower = transcript.to_lowercase();

    if lower.contains("loom") || lower.contains("weave") {
        format!("Handwoven by {name} on a traditional loom — preserving ancestral textile art.")
    } else if lower.contains("potter") || lower.contains("clay") {
        format!("Shaped by {name}'s hands — pottery that carries generations of craft.")
    } else {
        format!("Made by {name}, a craftsman keeping local traditions alive.")
    }
}
