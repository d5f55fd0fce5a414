//! Shared constants for frame-print page geometry

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

// =============================================================================
// Request Defaults
// =============================================================================

/// Default frame width in inches
pub const DEFAULT_FRAME_WIDTH_IN: f32 = 8.0;

/// Default frame height in inches
pub const DEFAULT_FRAME_HEIGHT_IN: f32 = 10.0;

/// Default print resolution in dots per inch
pub const DEFAULT_DPI: u32 = 300;

/// Default page margin in millimeters (frame content origin offset)
pub const DEFAULT_MARGIN_MM: f32 = 5.0;

// =============================================================================
// Rendering
// =============================================================================

/// Line width of the frame border in millimeters
pub const FRAME_BORDER_WIDTH_MM: f32 = 0.5;

// =============================================================================
// Resampling
// =============================================================================

/// Upper bound on target pixel count for one resample, guarding against
/// degenerate frame-size x dpi combinations.
pub const MAX_TARGET_PIXELS: u64 = 1_000_000_000;
