//! Conversions between physical length and pixel counts at a print resolution

use crate::constants::MM_PER_INCH;

/// Convert inches to millimeters
#[inline]
pub fn inches_to_mm(inches: f32) -> f32 {
    inches * MM_PER_INCH
}

/// Physical length of a pixel run at the given resolution
#[inline]
pub fn pixels_to_mm(pixels: u32, dpi: u32) -> f32 {
    pixels as f32 / dpi as f32 * MM_PER_INCH
}

/// Pixel count covering a physical length at the given resolution,
/// truncated to a whole pixel.
#[inline]
pub fn inches_to_pixels(inches: f32, dpi: u32) -> u32 {
    (inches as f64 * dpi as f64).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_to_mm_exact() {
        assert_eq!(inches_to_mm(8.0), 203.2);
        assert_eq!(inches_to_mm(10.0), 254.0);
        assert_eq!(inches_to_mm(0.0), 0.0);
    }

    #[test]
    fn inches_to_pixels_truncates() {
        assert_eq!(inches_to_pixels(8.0, 300), 2400);
        assert_eq!(inches_to_pixels(10.0, 300), 3000);
        // 0.999" at 100 dpi is 99.9 px, floored to 99
        assert_eq!(inches_to_pixels(0.999, 100), 99);
    }

    #[test]
    fn round_trip_within_one_pixel() {
        // pixels_to_mm(inches_to_pixels(x, dpi), dpi) recovers x (in mm)
        // within one pixel's worth of rounding error: 25.4 / dpi mm.
        for &(inches, dpi) in &[(8.0f32, 300u32), (10.0, 300), (3.937, 72), (11.69, 150)] {
            let px = inches_to_pixels(inches, dpi);
            let mm = pixels_to_mm(px, dpi);
            let expected = inches_to_mm(inches);
            let tolerance = MM_PER_INCH / dpi as f32;
            assert!(
                (mm - expected).abs() <= tolerance,
                "{} in @ {} dpi: {} mm vs {} mm (tol {})",
                inches,
                dpi,
                mm,
                expected,
                tolerance
            );
        }
    }
}
