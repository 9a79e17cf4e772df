/// Placement of the two word-mark labels

use ab_glyph::{point, Font, GlyphId, PxScale, ScaleFont};

use crate::TextLayout;

/// Anchor point of a label: left edge, vertical middle of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPlacement {
    pub x: i32,
    pub y: i32,
}

/// Every value derived while centering the word mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    pub first_width: u32,
    pub second_width: u32,
    /// Summed widths minus the combined kerning adjustment
    pub combined_width: i32,
    pub start_x: i32,
    pub center_y: i32,
    pub first: LabelPlacement,
    pub second: LabelPlacement,
}

/// Center two labels of the given pixel widths on a square canvas.
pub fn place_labels(canvas_size: u32, first_width: u32, second_width: u32, layout: &TextLayout) -> TextPlacement {
    let size = canvas_size as i32;
    let combined_width = first_width as i32 + second_width as i32 - layout.combined_kerning;
    // floor, so odd remainders round towards the left edge
    let start_x = (size - combined_width).div_euclid(2);
    let center_y = size / 2 - layout.upward_offset;

    TextPlacement {
        first_width,
        second_width,
        combined_width,
        start_x,
        center_y,
        first: LabelPlacement { x: start_x, y: center_y },
        second: LabelPlacement {
            x: start_x + first_width as i32 - layout.second_kerning,
            y: center_y + layout.italic_drop,
        },
    }
}

/// Horizontal ink extent `(min_x, max_x)` of `text` drawn at the origin, or
/// `None` if no glyph has an outline.
///
/// Glyphs are placed with the same pen advance `draw_text_mut` uses, so the
/// extent matches what lands on the canvas.
pub fn ink_extent<F: Font>(font: &F, scale: PxScale, text: &str) -> Option<(f32, f32)> {
    let font = font.as_scaled(scale);
    let mut pen = 0f32;
    let mut last: Option<GlyphId> = None;
    let mut extent: Option<(f32, f32)> = None;

    for c in text.chars() {
        let id = font.glyph_id(c);
        let glyph = id.with_scale_and_position(scale, point(pen, font.ascent()));
        pen += font.h_advance(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            if let Some(last) = last {
                pen += font.kern(id, last);
            }
            last = Some(id);
            let bb = outlined.px_bounds();
            extent = Some(match extent {
                Some((lo, hi)) => (lo.min(bb.min.x), hi.max(bb.max.x)),
                None => (bb.min.x, bb.max.x),
            });
        }
    }
    extent
}

/// Width of the pixel-space bounding box of `text`.
pub fn measure_label<F: Font>(font: &F, scale: PxScale, text: &str) -> u32 {
    ink_extent(font, scale, text)
        .map(|(lo, hi)| (hi - lo).max(0.0) as u32)
        .unwrap_or(0)
}

/// Top edge to draw at so the line's vertical middle lands on `middle_y`.
pub fn middle_anchor_top<F: Font>(font: &F, scale: PxScale, middle_y: i32) -> i32 {
    let line_height = font.as_scaled(scale).height();
    middle_y - (line_height / 2.0).round() as i32
}
