use super::file_stem;

/// Keyword vocabulary tested against image filenames, in match-output order.
const TAG_VOCABULARY: [&str; 11] = [
    "saree", "shawl", "pottery", "mug", "bottle", "wood", "carving", "painting", "handloom",
    "jewelry", "bangle",
];

const DEFAULT_TAGS: [&str; 2] = ["handmade", "traditional"];

/// Resolve a normalized tag set for a submission.
///
/// Explicit comma-separated tags win; otherwise the image filename stem is
/// scanned for vocabulary keywords; otherwise a fixed default set. Never
/// returns an empty vector.
pub fn classify_tags(explicit: Option<&str>, image_ref: Option<&str>) -> Vec<String> {
    if let Some(raw) = explicit {
        let parts: Vec<String> = raw
            .split(',')
            .map(|part| part.trim().to_lowercase())
            .filter(|part| !part.is_empty())
            .collect();
        if !parts.is_empty() {
            return parts;
        }
    }

    if let Some(filename) = image_ref {
        let stem = file_stem(filename).to_lowercase();
        let guesses: Vec<String> = TAG_VOCABULARY
            .into_iter()
            .filter(|keyword| stem.contains(*keyword))
            .map(str::to_string)
            .collect();
        if !guesses.is_empty() {
            return guesses;
        }
    }

    DEFAULT_TAGS.into_iter().map(str::to_string).collect()
}
