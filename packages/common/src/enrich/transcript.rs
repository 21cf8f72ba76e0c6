use super::{file_stem, title_case};

/// Used when a submission carries neither transcript text nor audio.
const DEFAULT_TRANSCRIPT: &str =
    "A local artisan who weaves sarees using a 200-year-old loom.";

/// Resolve the effective spoken text for a submission.
///
/// Explicit text wins over a placeholder derived from the audio filename;
/// with neither input a fixed default sentence is used. Always returns
/// non-empty text.
pub fn resolve_transcript(explicit_text: Option<&str>, audio_ref: Option<&str>) -> String {
    if let Some(text) = explicit_text {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    if let Some(filename) = audio_ref {
        let speaker = title_case(&file_stem(filename).replace('_', " "));
        return format!(
            "My name is {speaker}. I make this product with traditional techniques learned from my family."
        );
    }

    DEFAULT_TRANSCRIPT.to_string()
}
