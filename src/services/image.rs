// src/services/image.rs
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use thiserror::Error;
use tracing::debug;

use crate::common::ApiError;

/// Maximum width and height of an uploaded photo, in pixels
pub const MAX_DIMENSION: u32 = 800;

/// JPEG quality of the re-encoded photo (0-100)
pub const JPEG_QUALITY: u8 = 70;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported file type, expected an image")]
    UnsupportedType,

    #[error("Failed to decode image: {0}")]
    Decode(image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(image::ImageError),
}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        ApiError::Image(err.to_string())
    }
}

/// Compress a photo into an inline JPEG data URL
///
/// Downscales proportionally so both dimensions fit in an 800x800 box
/// (never upscales), flattens alpha, re-encodes as JPEG at quality 70 and
/// returns `data:image/jpeg;base64,...` suitable for embedding in a JSON
/// payload. Single-shot: any decode or encode failure surfaces to the
/// caller.
pub fn compress_to_data_url(data: &[u8]) -> Result<String, ImageError> {
    if sniff_mime(data).is_none() {
        return Err(ImageError::UnsupportedType);
    }

    let img = image::load_from_memory(data).map_err(ImageError::Decode)?;
    let (width, height) = img.dimensions();

    let img = if width > MAX_DIMENSION || height > MAX_DIMENSION {
        let resized = img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle);
        debug!(
            from_width = width,
            from_height = height,
            to_width = resized.width(),
            to_height = resized.height(),
            "Downscaled photo"
        );
        resized
    } else {
        img
    };

    // JPEG has no alpha channel
    let rgb = img.to_rgb8();

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    rgb.write_with_encoder(encoder).map_err(ImageError::Encode)?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}

/// Detect the mime type of raw image bytes
///
/// Returns `None` for anything that is not a supported photo format.
pub fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    let info = infer::get(data)?;
    match info.mime_type() {
        mime @ ("image/jpeg" | "image/png" | "image/gif" | "image/webp") => Some(mime),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 180, 60]),
        ));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    fn decode_data_url(data_url: &str) -> DynamicImage {
        let payload = data_url.strip_prefix("data:image/jpeg;base64,").unwrap();
        let jpeg = BASE64.decode(payload).unwrap();
        image::load_from_memory(&jpeg).unwrap()
    }

    #[test]
    fn test_large_landscape_is_clamped_to_800_wide() {
        let data_url = compress_to_data_url(&png_bytes(1600, 1200)).unwrap();
        let img = decode_data_url(&data_url);
        assert_eq!(img.dimensions(), (800, 600));
    }

    #[test]
    fn test_large_portrait_is_clamped_to_800_tall() {
        let data_url = compress_to_data_url(&png_bytes(600, 1200)).unwrap();
        let img = decode_data_url(&data_url);
        assert_eq!(img.dimensions(), (400, 800));
    }

    #[test]
    fn test_small_image_is_never_upscaled() {
        let data_url = compress_to_data_url(&png_bytes(400, 300)).unwrap();
        let img = decode_data_url(&data_url);
        assert_eq!(img.dimensions(), (400, 300));
    }

    #[test]
    fn test_output_is_a_jpeg_data_url() {
        let data_url = compress_to_data_url(&png_bytes(10, 10)).unwrap();
        assert!(data_url.starts_with("data:image/jpeg;base64,"));
        assert!(data_url.len() > "data:image/jpeg;base64,".len());
    }

    #[test]
    fn test_non_image_bytes_are_rejected() {
        let result = compress_to_data_url(b"definitely not an image");
        assert!(matches!(result, Err(ImageError::UnsupportedType)));
    }

    #[test]
    fn test_sniff_mime_recognizes_png() {
        assert_eq!(sniff_mime(&png_bytes(4, 4)), Some("image/png"));
        assert_eq!(sniff_mime(b"plain text"), None);
    }
}
