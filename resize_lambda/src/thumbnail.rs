use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::ResizeError;

pub(crate) fn decode(data: &[u8]) -> Result<DynamicImage, ResizeError> {
    image::load_from_memory(data).map_err(ResizeError::Decode)
}

/// Converts any color mode to 8-bit RGB. Alpha is discarded, not blended.
pub(crate) fn normalize(img: DynamicImage) -> RgbImage {
    img.into_rgb8()
}

/// Dimensions of `width`x`height` scaled down to fit a `max`x`max` box.
///
/// Never enlarges: anything already inside the box comes back unchanged.
pub(crate) fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    let ratio = f64::from(max) / f64::from(width.max(height));
    let scale = |side: u32| ((f64::from(side) * ratio).round() as u32).max(1).min(max.max(1));
    (scale(width), scale(height))
}

pub(crate) fn shrink_to_fit(img: RgbImage, max: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    let (new_w, new_h) = fit_within(width, height, max);
    if (new_w, new_h) == (width, height) {
        return img;
    }
    imageops::resize(&img, new_w, new_h, FilterType::CatmullRom)
}

pub(crate) fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>, ResizeError> {
    let (width, height) = img.dimensions();
    let mut buffer = Vec::with_capacity(width as usize * height as usize);
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, quality))
        .map_err(ResizeError::Encode)?;
    Ok(buffer)
}

/// `resized-` followed by the last path component of the source key.
pub(crate) fn output_key(source_key: &str) -> String {
    let basename = source_key.rsplit('/').next().unwrap_or(source_key);
    format!("resized-{basename}")
}

/// A re-encoded image ready for upload.
#[derive(Debug)]
pub(crate) struct Rendered {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode, normalize, shrink and re-encode one image held in memory.
pub(crate) fn render(data: &[u8], max: u32, quality: u8) -> Result<Rendered, ResizeError> {
    let img = shrink_to_fit(normalize(decode(data)?), max);
    let bytes = encode_jpeg(&img, quality)?;
    Ok(Rendered {
        bytes,
        width: img.width(),
        height: img.height(),
    })
}
