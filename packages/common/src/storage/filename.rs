/// Validate a client-supplied filename for storage in a flat artifact
/// directory.
///
/// Rejects anything that could escape the directory or smuggle control
/// characters into response headers. Returns the trimmed name.
pub fn validate_flat_filename(filename: &str) -> Result<&str, &'static str> {
    let trimmed = filename.trim();

    if trimmed.is_empty() {
        return Err("filename cannot be empty");
    }

    if trimmed.contains('\0') || trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err("filename must not contain control characters");
    }

    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err("filename must not contain path separators");
    }

    if trimmed == ".." {
        return Err("filename must not be '..'");
    }

    if trimmed.starts_with('.') {
        return Err("hidden filenames are not allowed");
    }

    Ok(trimmed)
}
