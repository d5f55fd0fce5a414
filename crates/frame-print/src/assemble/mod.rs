//! Document assembly
//!
//! Orchestrates, per input image: decode -> optional rotate -> fit ->
//! re-encode -> placement plan -> page record. Any per-image failure turns
//! into a [`SkippedImage`] and processing continues with the next input; the
//! ordered record list is reduced to one PDF exactly once by
//! [`Assembly::finalize`].

mod render;

use crate::fit::fit_to_frame;
use crate::layout::{PagePlan, plan_page};
use crate::options::FramePrintOptions;
use crate::report::{AssemblyReport, SkippedImage};
use crate::types::{FramePrintError, Result};
use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;

/// One input image: display name plus raw encoded bytes
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Immutable record of one assembled page
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Name of the source input
    pub name: String,
    /// Physical placement of the image and the frame border
    pub plan: PagePlan,
    /// Fitted raster width in pixels
    pub width_px: u32,
    /// Fitted raster height in pixels
    pub height_px: u32,
    /// Fitted raster, re-encoded as PNG for the document writer
    pub(crate) png: Vec<u8>,
}

/// The assembled document: ordered page records plus outcome accounting
#[derive(Debug)]
pub struct Assembly {
    /// Page records in input order, one per successfully processed image
    pub pages: Vec<PageRecord>,
    /// Per-image outcome summary
    pub report: AssemblyReport,
    /// Output page width in millimeters
    pub page_width_mm: f32,
    /// Output page height in millimeters
    pub page_height_mm: f32,
}

impl Assembly {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize all pages into one PDF byte stream.
    ///
    /// All-or-nothing: a failure here fails the whole request, and no
    /// partial document is ever produced. Zero pages still yield a valid
    /// empty document.
    pub fn finalize(&self) -> Result<Vec<u8>> {
        render::render_document(self)
    }
}

/// Assemble a document from the given inputs.
///
/// Decode, fit and re-encode are CPU-bound, so the whole batch runs on a
/// blocking worker. Inputs are processed sequentially in order; page count
/// equals the number of inputs that survive every per-image step.
pub async fn assemble(inputs: Vec<ImageInput>, options: &FramePrintOptions) -> Result<Assembly> {
    options.validate()?;
    let options = options.clone();

    tokio::task::spawn_blocking(move || assemble_sync(&inputs, &options)).await?
}

fn assemble_sync(inputs: &[ImageInput], options: &FramePrintOptions) -> Result<Assembly> {
    let (target_w, target_h) = options.target_pixels();
    let frame_width_mm = options.frame_width_mm();
    let frame_height_mm = options.frame_height_mm();
    let (page_width_mm, page_height_mm) = options
        .paper_size
        .dimensions_with_orientation(options.orientation);

    let mut pages = Vec::new();
    let mut skipped = Vec::new();

    for input in inputs {
        match process_image(input, target_w, target_h, frame_width_mm, frame_height_mm, options) {
            Ok(record) => pages.push(record),
            Err(err) => skipped.push(SkippedImage {
                name: input.name.clone(),
                reason: err.to_string(),
            }),
        }
    }

    let report = AssemblyReport {
        images_in: inputs.len(),
        pages_out: pages.len(),
        skipped,
    };

    Ok(Assembly {
        pages,
        report,
        page_width_mm,
        page_height_mm,
    })
}

fn process_image(
    input: &ImageInput,
    target_w: u32,
    target_h: u32,
    frame_width_mm: f32,
    frame_height_mm: f32,
    options: &FramePrintOptions,
) -> Result<PageRecord> {
    let decoded = image::load_from_memory(&input.bytes).map_err(FramePrintError::Decode)?;

    // Rotation applies to raw pixels, before any fit computation, regardless
    // of the frame's own aspect ratio.
    let src = if options.rotate {
        decoded.rotate90()
    } else {
        decoded
    };

    let fitted = fit_to_frame(&src, target_w, target_h, options.fit_mode)?;
    let png = encode_png(&fitted.image)?;

    let plan = plan_page(
        fitted.width,
        fitted.height,
        options.fit_mode,
        frame_width_mm,
        frame_height_mm,
        &options.margins,
        options.dpi,
    );

    Ok(PageRecord {
        name: input.name.clone(),
        plan,
        width_px: fitted.width,
        height_px: fitted.height,
        png,
    })
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, image::ImageFormat::Png)
        .map_err(FramePrintError::Encode)?;
    Ok(buf.into_inner())
}

/// Load input images from disk
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageInput>> {
    let mut inputs = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        inputs.push(ImageInput::new(name, bytes));
    }
    Ok(inputs)
}

/// Save a finalized document
pub async fn save_pdf(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path.as_ref(), bytes).await?;
    Ok(())
}
