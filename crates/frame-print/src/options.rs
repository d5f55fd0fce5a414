use crate::constants::{DEFAULT_DPI, DEFAULT_FRAME_HEIGHT_IN, DEFAULT_FRAME_WIDTH_IN};
use crate::types::*;
use crate::units;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Print-request configuration
///
/// Built and validated once at the request boundary; the core only ever
/// sees positive, finite values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FramePrintOptions {
    /// Frame width in inches
    pub frame_width_in: f32,
    /// Frame height in inches
    pub frame_height_in: f32,
    /// Print resolution in dots per inch
    pub dpi: u32,
    /// How images are mapped onto the frame
    pub fit_mode: FitMode,
    /// Rotate each source 90 degrees clockwise before fitting
    pub rotate: bool,
    /// Output paper size
    pub paper_size: PaperSize,
    /// Output paper orientation
    pub orientation: Orientation,
    /// Frame content origin offset from the page edges
    pub margins: PageMargins,
}

impl Default for FramePrintOptions {
    fn default() -> Self {
        Self {
            frame_width_in: DEFAULT_FRAME_WIDTH_IN,
            frame_height_in: DEFAULT_FRAME_HEIGHT_IN,
            dpi: DEFAULT_DPI,
            fit_mode: FitMode::Stretch,
            rotate: false,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margins: PageMargins::default(),
        }
    }
}

impl FramePrintOptions {
    /// Build options from raw request values.
    ///
    /// Missing or non-positive numeric input falls back to the defaults
    /// (8 x 10 in at 300 dpi); the legacy `crop`/`keep_aspect` flags are
    /// folded into an explicit [`FitMode`] here and nowhere else.
    pub fn from_request(
        frame_width_in: Option<f32>,
        frame_height_in: Option<f32>,
        dpi: Option<u32>,
        rotate: bool,
        crop: bool,
        keep_aspect: bool,
    ) -> Self {
        let positive = |v: Option<f32>, default: f32| match v {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => default,
        };
        Self {
            frame_width_in: positive(frame_width_in, DEFAULT_FRAME_WIDTH_IN),
            frame_height_in: positive(frame_height_in, DEFAULT_FRAME_HEIGHT_IN),
            dpi: match dpi {
                Some(d) if d > 0 => d,
                _ => DEFAULT_DPI,
            },
            fit_mode: FitMode::from_flags(crop, keep_aspect),
            rotate,
            ..Default::default()
        }
    }

    /// Frame width in millimeters
    pub fn frame_width_mm(&self) -> f32 {
        units::inches_to_mm(self.frame_width_in)
    }

    /// Frame height in millimeters
    pub fn frame_height_mm(&self) -> f32 {
        units::inches_to_mm(self.frame_height_in)
    }

    /// The frame's pixel rectangle at the configured resolution, shared by
    /// every image in the request.
    pub fn target_pixels(&self) -> (u32, u32) {
        (
            units::inches_to_pixels(self.frame_width_in, self.dpi),
            units::inches_to_pixels(self.frame_height_in, self.dpi),
        )
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.frame_width_in.is_finite() || self.frame_width_in <= 0.0 {
            return Err(FramePrintError::Config(format!(
                "frame width must be positive, got {}",
                self.frame_width_in
            )));
        }
        if !self.frame_height_in.is_finite() || self.frame_height_in <= 0.0 {
            return Err(FramePrintError::Config(format!(
                "frame height must be positive, got {}",
                self.frame_height_in
            )));
        }
        if self.dpi == 0 {
            return Err(FramePrintError::Config("dpi must be positive".to_string()));
        }
        let (target_w, target_h) = self.target_pixels();
        if target_w == 0 || target_h == 0 {
            return Err(FramePrintError::Config(format!(
                "frame {}x{} in at {} dpi collapses to zero pixels",
                self.frame_width_in, self.frame_height_in, self.dpi
            )));
        }
        let m = &self.margins;
        if [m.top_mm, m.bottom_mm, m.left_mm, m.right_mm]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(FramePrintError::Config(
                "margins must be non-negative".to_string(),
            ));
        }
        let (paper_w, paper_h) = self.paper_size.dimensions_mm();
        if paper_w <= 0.0 || paper_h <= 0.0 {
            return Err(FramePrintError::Config(
                "paper dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| FramePrintError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FramePrintError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;

    // PaperSize accepts either a plain size name or a custom dimension map.
    impl Serialize for PaperSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                PaperSize::A3 => serializer.serialize_str("A3"),
                PaperSize::A4 => serializer.serialize_str("A4"),
                PaperSize::A5 => serializer.serialize_str("A5"),
                PaperSize::Letter => serializer.serialize_str("Letter"),
                PaperSize::Legal => serializer.serialize_str("Legal"),
                PaperSize::Custom {
                    width_mm,
                    height_mm,
                } => {
                    let mut s = serializer.serialize_struct("Custom", 2)?;
                    s.serialize_field("width_mm", width_mm)?;
                    s.serialize_field("height_mm", height_mm)?;
                    s.end()
                }
            }
        }
    }

    impl<'de> Deserialize<'de> for PaperSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};
            use std::fmt;

            struct PaperSizeVisitor;

            impl<'de> Visitor<'de> for PaperSizeVisitor {
                type Value = PaperSize;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a paper size")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<PaperSize, E>
                where
                    E: de::Error,
                {
                    match value {
                        "A3" => Ok(PaperSize::A3),
                        "A4" => Ok(PaperSize::A4),
                        "A5" => Ok(PaperSize::A5),
                        "Letter" => Ok(PaperSize::Letter),
                        "Legal" => Ok(PaperSize::Legal),
                        _ => Err(de::Error::unknown_variant(
                            value,
                            &["A3", "A4", "A5", "Letter", "Legal", "Custom"],
                        )),
                    }
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<PaperSize, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut width_mm = None;
                    let mut height_mm = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "width_mm" => width_mm = Some(map.next_value()?),
                            "height_mm" => height_mm = Some(map.next_value()?),
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width_mm, height_mm) {
                        (Some(w), Some(h)) => Ok(PaperSize::Custom {
                            width_mm: w,
                            height_mm: h,
                        }),
                        _ => Err(de::Error::missing_field("width_mm or height_mm")),
                    }
                }
            }

            deserializer.deserialize_any(PaperSizeVisitor)
        }
    }
}
