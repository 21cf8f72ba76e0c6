use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::QrCode;

use common::storage::{ArtifactKind, ArtifactStore};

use crate::error::AppError;

/// Render the certificate URL for a product id into a stored, scannable PNG.
///
/// Idempotent per id: re-encoding overwrites the same artifact. Returns the
/// stored filename.
pub async fn encode_certificate(
    artifacts: &dyn ArtifactStore,
    product_id: &str,
    base_url: &str,
) -> Result<String, AppError> {
    let cert_url = format!("{base_url}/certificate/{product_id}");
    let png = render_qr_png(&cert_url)?;

    let filename = format!("{product_id}.png");
    artifacts.put(ArtifactKind::QrCode, &filename, &png).await?;
    Ok(filename)
}

/// Encode text into PNG bytes. Black box: text in, image bytes out.
fn render_qr_png(text: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(text.as_bytes())
        .map_err(|e| AppError::Internal(format!("QR encoding failed: {e}")))?;
    let rendered = code.render::<Luma<u8>>().min_dimensions(240, 240).build();

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            rendered.as_raw(),
            rendered.width(),
            rendered.height(),
            ExtendedColorType::L8,
        )
        .map_err(|e| AppError::Internal(format!("PNG encoding failed: {e}")))?;
    Ok(png)
}
