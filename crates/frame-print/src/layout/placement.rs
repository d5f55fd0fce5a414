//! Placement of a fitted image within the frame
//!
//! Crop and Stretch fill the frame exactly. Fit converts the fitted pixel
//! dimensions back to millimeters and centers the printed area inside the
//! frame; the planner never upscales beyond the fitted pixel data.

use super::{PagePlan, Rect};
use crate::types::{FitMode, PageMargins};
use crate::units::pixels_to_mm;

/// Compute the physical placement of one fitted image.
///
/// `fitted_w_px`/`fitted_h_px` are the actual post-fit pixel dimensions.
/// The frame rectangle is anchored at the margin origin and sized to the
/// full requested frame, independent of fit mode.
pub fn plan_page(
    fitted_w_px: u32,
    fitted_h_px: u32,
    mode: FitMode,
    frame_width_mm: f32,
    frame_height_mm: f32,
    margins: &PageMargins,
    dpi: u32,
) -> PagePlan {
    let frame = Rect::new(margins.left_mm, margins.top_mm, frame_width_mm, frame_height_mm);

    let image = if mode.fills_frame() {
        frame
    } else {
        let printed_w = pixels_to_mm(fitted_w_px, dpi);
        let printed_h = pixels_to_mm(fitted_h_px, dpi);
        Rect::new(
            margins.left_mm + (frame_width_mm - printed_w) / 2.0,
            margins.top_mm + (frame_height_mm - printed_h) / 2.0,
            printed_w,
            printed_h,
        )
    };

    PagePlan { image, frame }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGINS: PageMargins = PageMargins {
        top_mm: 5.0,
        bottom_mm: 5.0,
        left_mm: 5.0,
        right_mm: 5.0,
    };

    #[test]
    fn stretch_fills_the_frame() {
        let plan = plan_page(2400, 3000, FitMode::Stretch, 203.2, 254.0, &MARGINS, 300);
        assert_eq!(plan.image, Rect::new(5.0, 5.0, 203.2, 254.0));
        assert_eq!(plan.image, plan.frame);
    }

    #[test]
    fn crop_fills_the_frame() {
        let plan = plan_page(2400, 3000, FitMode::Crop, 203.2, 254.0, &MARGINS, 300);
        assert_eq!(plan.image, plan.frame);
    }

    #[test]
    fn fit_centers_within_the_frame() {
        // 2400x1920 px at 300 dpi prints as 203.2 x 162.56 mm
        let plan = plan_page(2400, 1920, FitMode::Fit, 203.2, 254.0, &MARGINS, 300);
        assert!((plan.image.x - 5.0).abs() < 1e-4);
        assert!((plan.image.y - 50.72).abs() < 1e-3);
        assert!((plan.image.width - 203.2).abs() < 1e-3);
        assert!((plan.image.height - 162.56).abs() < 1e-3);
    }

    #[test]
    fn fit_centering_property() {
        // image center == frame center on both axes, for assorted sizes
        for &(w_px, h_px, fw, fh) in &[
            (2400u32, 1920u32, 203.2f32, 254.0f32),
            (1200, 3000, 101.6, 254.0),
            (100, 100, 50.0, 80.0),
        ] {
            let plan = plan_page(w_px, h_px, FitMode::Fit, fw, fh, &MARGINS, 300);
            assert!(
                (plan.image.center_x() - plan.frame.center_x()).abs() < 1e-3,
                "{}x{} in {}x{}",
                w_px,
                h_px,
                fw,
                fh
            );
            assert!((plan.image.center_y() - plan.frame.center_y()).abs() < 1e-3);
        }
    }

    #[test]
    fn frame_rect_is_mode_independent() {
        for mode in [FitMode::Crop, FitMode::Fit, FitMode::Stretch] {
            let plan = plan_page(800, 600, mode, 120.0, 90.0, &MARGINS, 300);
            assert_eq!(plan.frame, Rect::new(5.0, 5.0, 120.0, 90.0));
        }
    }

    #[test]
    fn asymmetric_margins_shift_the_origin() {
        let margins = PageMargins {
            top_mm: 12.0,
            bottom_mm: 5.0,
            left_mm: 8.0,
            right_mm: 5.0,
        };
        let plan = plan_page(100, 100, FitMode::Stretch, 100.0, 100.0, &margins, 300);
        assert_eq!(plan.frame.x, 8.0);
        assert_eq!(plan.frame.y, 12.0);
    }
}
