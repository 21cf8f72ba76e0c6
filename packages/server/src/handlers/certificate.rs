use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use tracing::instrument;

use crate::error::AppError;
use crate::models::product::ProductRecord;
use crate::state::AppState;

/// Public authenticity-certificate page for a product record.
///
/// Unknown ids render a distinct not-found page rather than an error
/// payload: the id arrives from scanned QR codes, so the response must
/// always be a presentable page.
#[instrument(skip(state))]
pub async fn certificate_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Html<String>), AppError> {
    match state.records.get(&id).await? {
        Some(record) => Ok((StatusCode::OK, Html(render_certificate(&record)))),
        None => Ok((
            StatusCode::NOT_FOUND,
            Html("<h3>Certificate not found</h3>".to_string()),
        )),
    }
}

fn render_certificate(record: &ProductRecord) -> String {
    let name = escape_html(&record.name);
    let story = escape_html(&record.story);
    let tags = escape_html(&record.tags.join(", "));
    let price_range = escape_html(&record.price_range);

    let img_tag = record
        .image
        .as_deref()
        .map(|file| format!(r#"<img src="/uploads/images/{file}" style="max-width:300px">"#))
        .unwrap_or_default();
    let qr_tag = format!(
        r#"<img src="/uploads/qrcodes/{}" style="width:160px">"#,
        record.qr
    );

    format!(
        r#"<html><head><title>Certificate - {name}</title></head><body>
<h2>Authenticity Certificate</h2>
<h3>{name}</h3>
{img_tag}
<p><strong>Micro-story:</strong> {story}</p>
<p><strong>Tags:</strong> {tags}</p>
<p><strong>Suggested Price Range:</strong> {price_range}</p>
{qr_tag}
<p>Generated at: {created_at}</p>
</body></html>
"#,
        created_at = record.created_at.to_rfc3339(),
    )
}

/// Minimal HTML escaping for interpolated record fields.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
