//! Image-to-frame fitting
//!
//! Maps a decoded source raster onto the frame's pixel rectangle according
//! to the requested [`FitMode`]:
//! - Stretch forces the exact target dimensions (anisotropic)
//! - Fit scales uniformly so the whole source fits inside the target
//! - Crop scales uniformly to cover the target, then center-crops

mod resample;

pub(crate) use resample::resample;

use crate::types::{FitMode, FramePrintError, Result};
use image::DynamicImage;

/// Resized pixel data plus its actual output dimensions.
///
/// For Crop and Stretch the dimensions equal the target exactly; for Fit one
/// axis may be smaller.
#[derive(Debug)]
pub struct FittedImage {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
}

/// Fit a source image into the frame's pixel rectangle.
///
/// Fails with `InvalidDimensions` when either the source or the target is
/// degenerate; the caller skips that image and continues.
pub fn fit_to_frame(
    src: &DynamicImage,
    target_w: u32,
    target_h: u32,
    mode: FitMode,
) -> Result<FittedImage> {
    let (src_w, src_h) = (src.width(), src.height());
    if src_w == 0 || src_h == 0 {
        return Err(FramePrintError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }
    if target_w == 0 || target_h == 0 {
        return Err(FramePrintError::InvalidDimensions {
            width: target_w,
            height: target_h,
        });
    }

    let image = match mode {
        FitMode::Stretch => resample(src, target_w, target_h)?,
        FitMode::Fit => {
            let (w, h) = fit_dimensions(src_w, src_h, target_w, target_h);
            resample(src, w, h)?
        }
        FitMode::Crop => {
            let (w, h) = cover_dimensions(src_w, src_h, target_w, target_h);
            let covered = resample(src, w, h)?;
            let left = center_offset(w, target_w);
            let top = center_offset(h, target_h);
            covered.crop_imm(left, top, target_w, target_h)
        }
    };

    let (width, height) = (image.width(), image.height());
    Ok(FittedImage {
        image,
        width,
        height,
    })
}

/// Uniform-scale dimensions for Fit mode.
///
/// The limiting axis lands exactly on the target; the other is rounded and
/// clamped so it never exceeds its target.
pub(crate) fn fit_dimensions(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32) {
    let scale_w = target_w as f64 / src_w as f64;
    let scale_h = target_h as f64 / src_h as f64;
    if scale_w <= scale_h {
        let h = (src_h as f64 * scale_w).round() as u32;
        (target_w, h.clamp(1, target_h))
    } else {
        let w = (src_w as f64 * scale_h).round() as u32;
        (w.clamp(1, target_w), target_h)
    }
}

/// Uniform-scale dimensions for Crop mode's cover step.
///
/// Scales by the larger of the two ratios so both axes reach at least the
/// target; the overshooting axis is trimmed afterwards.
pub(crate) fn cover_dimensions(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32) {
    let scale_w = target_w as f64 / src_w as f64;
    let scale_h = target_h as f64 / src_h as f64;
    if scale_w >= scale_h {
        let h = ((src_h as f64 * scale_w).round() as u32).max(target_h);
        (target_w, h)
    } else {
        let w = ((src_w as f64 * scale_h).round() as u32).max(target_w);
        (w, target_h)
    }
}

/// Leading-edge offset for a centered crop.
///
/// Floor division: an odd excess pixel is trimmed from the trailing edge.
pub(crate) fn center_offset(scaled: u32, target: u32) -> u32 {
    (scaled - target) / 2
}
