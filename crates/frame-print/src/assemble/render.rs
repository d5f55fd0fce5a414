//! PDF reduction of assembled page records
//!
//! Each record becomes one page: the fitted raster painted at its placement
//! rectangle, then the frame border stroked on top. Plan coordinates are
//! top-left mm; PDF user space is bottom-left points, so y flips here and
//! nowhere else.

use super::{Assembly, PageRecord};
use crate::constants::FRAME_BORDER_WIDTH_MM;
use crate::layout::Rect;
use crate::types::{FramePrintError, Result};
use printpdf::*;

pub(crate) fn render_document(assembly: &Assembly) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("Framed Prints");
    let mut pages = Vec::new();

    for record in &assembly.pages {
        let ops = page_ops(&mut doc, record, assembly.page_height_mm)?;
        pages.push(PdfPage::new(
            Mm(assembly.page_width_mm),
            Mm(assembly.page_height_mm),
            ops,
        ));
    }

    doc.pages = pages;

    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

fn page_ops(doc: &mut PdfDocument, record: &PageRecord, page_height_mm: f32) -> Result<Vec<Op>> {
    let mut warnings = Vec::new();
    let raw = RawImage::decode_from_bytes(&record.png, &mut warnings)
        .map_err(|e| FramePrintError::Finalize(e.to_string()))?;
    let image_id = doc.add_image(&raw);

    let rect = &record.plan.image;
    let x_pt = Mm(rect.x).into_pt();
    let y_pt = Mm(page_height_mm - rect.y - rect.height).into_pt();
    let width_pt = Mm(rect.width).into_pt();
    let height_pt = Mm(rect.height).into_pt();

    // At 72 dpi one pixel maps to one point, so the scale factors stretch
    // the raster onto the placement rectangle exactly.
    let mut ops = vec![Op::UseXobject {
        id: image_id.clone(),
        transform: XObjectTransform {
            translate_x: Some(x_pt),
            translate_y: Some(y_pt),
            rotate: None,
            scale_x: Some(width_pt.0 / record.width_px as f32),
            scale_y: Some(height_pt.0 / record.height_px as f32),
            dpi: Some(72.0),
        },
    }];

    ops.extend(border_ops(&record.plan.frame, page_height_mm));
    Ok(ops)
}

/// Thin black outline of the nominal frame, drawn on every page whether or
/// not the image fills it.
fn border_ops(frame: &Rect, page_height_mm: f32) -> Vec<Op> {
    let top = page_height_mm - frame.y;
    let bottom = page_height_mm - frame.bottom();
    let corners = [
        (frame.x, top),
        (frame.right(), top),
        (frame.right(), bottom),
        (frame.x, bottom),
    ];

    let points = corners
        .iter()
        .map(|&(x, y)| LinePoint {
            p: Point {
                x: Mm(x).into_pt(),
                y: Mm(y).into_pt(),
            },
            bezier: false,
        })
        .collect();

    vec![
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
        },
        Op::SetOutlineThickness {
            pt: Mm(FRAME_BORDER_WIDTH_MM).into_pt(),
        },
        Op::DrawLine {
            line: Line {
                points,
                is_closed: true,
            },
        },
    ]
}
