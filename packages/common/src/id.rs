use uuid::Uuid;

/// Generate an opaque identifier: 32 lowercase hex characters, no separators.
///
/// Ids double as URL path segments and filesystem path segments, so the same
/// generator backs product ids and stored-artifact filename prefixes.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
