//! Icon rendering pipeline
//!
//! canvas -> overlay circles -> composite -> labels -> flatten -> PNG

pub mod layout;
pub mod paint;
pub mod raster;

use log::debug;
use sha2::{Digest, Sha256};

use crate::fonts::ResolvedFonts;
use crate::{IconConfig, Result};
use layout::TextPlacement;
use paint::{FontRole, PaintCommand};

/// A finished, flattened icon encoded as PNG.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RenderedIcon {
    /// Hex SHA-256 of the PNG bytes.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Paint commands for the decorative circles, in drawing order.
pub fn circle_commands(config: &IconConfig) -> Vec<PaintCommand> {
    config
        .circles
        .iter()
        .map(|c| PaintCommand::ellipse(c, config.palette.circle))
        .collect()
}

/// Measure both labels, center them and build their paint commands.
pub fn label_commands(config: &IconConfig, fonts: &ResolvedFonts) -> (TextPlacement, Vec<PaintCommand>) {
    let first_scale = fonts.upright.scale(config.first_label.size);
    let second_scale = fonts.italic.scale(config.second_label.size);

    let first_width = layout::measure_label(&fonts.upright.font, first_scale, &config.first_label.text);
    let second_width = layout::measure_label(&fonts.italic.font, second_scale, &config.second_label.text);
    let placement = layout::place_labels(config.size, first_width, second_width, &config.layout);

    debug!(
        "label widths {} + {}, combined {}, start ({}, {})",
        placement.first_width, placement.second_width, placement.combined_width, placement.start_x, placement.center_y
    );

    let commands = vec![
        PaintCommand::Text {
            x: placement.first.x,
            y: layout::middle_anchor_top(&fonts.upright.font, first_scale, placement.first.y),
            text: config.first_label.text.clone(),
            font: FontRole::Upright,
            scale: first_scale,
            rgb: config.palette.first_text,
        },
        PaintCommand::Text {
            x: placement.second.x,
            y: layout::middle_anchor_top(&fonts.italic.font, second_scale, placement.second.y),
            text: config.second_label.text.clone(),
            font: FontRole::Italic,
            scale: second_scale,
            rgb: config.palette.second_text,
        },
    ];
    (placement, commands)
}

/// Draw the icon and return the flattened RGB image.
pub fn render_image(config: &IconConfig, fonts: &ResolvedFonts) -> image::RgbImage {
    let mut canvas = raster::new_canvas(config.size, config.palette.background);

    let mut overlay = raster::new_overlay(config.size);
    for cmd in circle_commands(config) {
        cmd.apply(&mut overlay, fonts);
    }
    raster::composite(&mut canvas, &overlay);

    let (_, labels) = label_commands(config, fonts);
    for cmd in &labels {
        cmd.apply(&mut canvas, fonts);
    }

    raster::flatten(&canvas, config.palette.background)
}

/// Draw the icon and encode it as PNG.
pub fn render(config: &IconConfig, fonts: &ResolvedFonts) -> Result<RenderedIcon> {
    let flat = render_image(config, fonts);
    let png_data = raster::encode_png(&flat)?;
    Ok(RenderedIcon {
        width: flat.width(),
        height: flat.height(),
        png_data,
    })
}
