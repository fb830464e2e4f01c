//! PDF text and cover extraction.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use lopdf::{Document, Stream, xobject::PdfImage};
use lumiere_core::ImagePayload;
use lumiere_error::{IngestError, IngestErrorKind};

/// Extracts page texts joined by blank lines, plus the first usable image on page one.
pub(crate) fn extract(bytes: &[u8]) -> Result<(String, Option<ImagePayload>), IngestError> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| IngestError::new(IngestErrorKind::Parse(format!("Invalid PDF: {}", e))))?;

    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = doc.extract_text(&[*page_number]).map_err(|e| {
            IngestError::new(IngestErrorKind::Parse(format!(
                "Page {}: {}",
                page_number, e
            )))
        })?;
        texts.push(text.trim().to_string());
    }

    let cover = pages
        .values()
        .next()
        .and_then(|page_id| cover_image(&doc, *page_id));

    Ok((texts.join("\n\n"), cover))
}

/// First image on the page that can be handed to a model as JPEG or PNG.
fn cover_image(doc: &Document, page_id: lopdf::ObjectId) -> Option<ImagePayload> {
    let images = match doc.get_page_images(page_id) {
        Ok(images) => images,
        Err(e) => {
            tracing::debug!(error = %e, "No images readable on first page");
            return None;
        }
    };

    images.iter().find_map(|image| {
        let filters = image.filters.as_deref().unwrap_or_default();
        if filters.iter().any(|f| f == "DCTDecode") {
            Some(ImagePayload::from_bytes("image/jpeg", image.content))
        } else if filters.iter().any(|f| f == "FlateDecode") {
            flate_to_png(image)
        } else {
            tracing::debug!(?filters, "Skipping image with unsupported filter");
            None
        }
    })
}

/// Inflates raw 8-bit RGB or grayscale samples and re-encodes them as PNG.
fn flate_to_png(image: &PdfImage<'_>) -> Option<ImagePayload> {
    if image.bits_per_component.unwrap_or(8) != 8 {
        tracing::debug!(bpc = ?image.bits_per_component, "Skipping image with unsupported depth");
        return None;
    }

    // lopdf refuses to decompress streams whose Subtype is Image.
    let mut stream = Stream::new(image.origin_dict.clone(), image.content.to_vec());
    stream.dict.remove(b"Subtype");
    let samples = match stream.decompressed_content() {
        Ok(samples) => samples,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to inflate cover image");
            return None;
        }
    };

    let width = u32::try_from(image.width).ok()?;
    let height = u32::try_from(image.height).ok()?;
    let decoded = match image.color_space.as_deref() {
        Some("DeviceRGB") => RgbImage::from_raw(width, height, samples).map(DynamicImage::ImageRgb8),
        Some("DeviceGray") => {
            GrayImage::from_raw(width, height, samples).map(DynamicImage::ImageLuma8)
        }
        other => {
            tracing::debug!(color_space = ?other, "Skipping image with unsupported color space");
            return None;
        }
    };
    let Some(decoded) = decoded else {
        tracing::debug!(width, height, "Cover image samples do not match its dimensions");
        return None;
    };

    let mut png = Cursor::new(Vec::new());
    if let Err(e) = decoded.write_to(&mut png, ImageFormat::Png) {
        tracing::debug!(error = %e, "Failed to encode cover image as PNG");
        return None;
    }
    Some(ImagePayload::from_bytes("image/png", png.get_ref()))
}
