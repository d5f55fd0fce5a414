use crate::constants::MAX_TARGET_PIXELS;
use crate::types::{FramePrintError, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

/// Resample a source image to exact pixel dimensions with a Lanczos3
/// convolution kernel.
///
/// Works on RGB8 data; alpha is discarded, which is what the print pipeline
/// wants anyway.
pub(crate) fn resample(src: &DynamicImage, target_w: u32, target_h: u32) -> Result<DynamicImage> {
    let total_pixels = target_w as u64 * target_h as u64;
    if total_pixels > MAX_TARGET_PIXELS {
        return Err(FramePrintError::Resample(format!(
            "target {}x{} exceeds the pixel limit",
            target_w, target_h
        )));
    }

    let rgb = src.to_rgb8();
    let (src_w, src_h) = (rgb.width(), rgb.height());
    if src_w == target_w && src_h == target_h {
        return Ok(DynamicImage::ImageRgb8(rgb));
    }

    let src_view = Image::from_vec_u8(src_w, src_h, rgb.into_raw(), PixelType::U8x3)
        .map_err(|e| FramePrintError::Resample(format!("source buffer: {e}")))?;
    let mut dst = Image::new(target_w, target_h, PixelType::U8x3);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_view,
            &mut dst,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| FramePrintError::Resample(e.to_string()))?;

    let out = image::RgbImage::from_raw(target_w, target_h, dst.into_vec())
        .ok_or_else(|| FramePrintError::Resample("output buffer size mismatch".to_string()))?;
    Ok(DynamicImage::ImageRgb8(out))
}
