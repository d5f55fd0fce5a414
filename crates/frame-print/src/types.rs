use thiserror::Error;

#[derive(Error, Debug)]
pub enum FramePrintError {
    #[error("invalid dimensions: {width}x{height} px")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("image decode error: {0}")]
    Decode(#[source] image::ImageError),
    #[error("image encode error: {0}")]
    Encode(#[source] image::ImageError),
    #[error("resample error: {0}")]
    Resample(String),
    #[error("document finalize error: {0}")]
    Finalize(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, FramePrintError>;

/// How a source image is mapped onto the frame rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// Cover the frame and trim the overflow (center crop)
    Crop,
    /// Scale uniformly so the whole image fits inside the frame
    Fit,
    /// Force the exact frame dimensions, ignoring aspect ratio
    #[default]
    Stretch,
}

impl FitMode {
    /// Map the legacy request flags onto an explicit mode.
    /// `crop` wins over `keep_aspect`; neither flag means Stretch.
    pub fn from_flags(crop: bool, keep_aspect: bool) -> Self {
        if crop {
            FitMode::Crop
        } else if keep_aspect {
            FitMode::Fit
        } else {
            FitMode::Stretch
        }
    }

    /// Crop and Stretch both produce exactly the frame's pixel dimensions.
    pub fn fills_frame(self) -> bool {
        matches!(self, FitMode::Crop | FitMode::Stretch)
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl Default for PaperSize {
    fn default() -> Self {
        PaperSize::A4
    }
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Page margins - the offset of the frame's content origin from the
/// physical page edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    /// Top margin of the page
    pub top_mm: f32,
    /// Bottom margin of the page
    pub bottom_mm: f32,
    /// Left margin of the page
    pub left_mm: f32,
    /// Right margin of the page
    pub right_mm: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_MARGIN_MM)
    }
}

impl PageMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }
}
