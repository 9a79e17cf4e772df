/// Paint command set for the icon display list

use ab_glyph::PxScale;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_text_mut};

use crate::fonts::ResolvedFonts;
use crate::{CircleSpec, Rgb};

/// Which resolved face a text command is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Upright,
    Italic,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Filled ellipse; replaces the pixels it covers rather than blending
    Ellipse {
        center: (i32, i32),
        radii: (i32, i32),
        rgba: (u8, u8, u8, u8),
    },
    /// Text with its top-left corner at `(x, y)`, blended by glyph coverage
    Text {
        x: i32,
        y: i32,
        text: String,
        font: FontRole,
        scale: PxScale,
        rgb: Rgb,
    },
}

impl PaintCommand {
    pub fn ellipse(circle: &CircleSpec, tint: Rgb) -> Self {
        let [r, g, b] = tint;
        PaintCommand::Ellipse {
            center: circle.center(),
            radii: circle.radii(),
            rgba: (r, g, b, circle.alpha),
        }
    }

    /// Apply the command to `target`. Shapes outside the canvas are clipped.
    pub fn apply(&self, target: &mut RgbaImage, fonts: &ResolvedFonts) {
        match self {
            PaintCommand::Ellipse { center, radii, rgba } => {
                let (r, g, b, a) = *rgba;
                draw_filled_ellipse_mut(target, *center, radii.0, radii.1, Rgba([r, g, b, a]));
            }
            PaintCommand::Text {
                x,
                y,
                text,
                font,
                scale,
                rgb,
            } => {
                let face = match font {
                    FontRole::Upright => &fonts.upright.font,
                    FontRole::Italic => &fonts.italic.font,
                };
                let [r, g, b] = *rgb;
                draw_text_mut(target, Rgba([r, g, b, 255]), *x, *y, *scale, face, text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_from_circle_spec() {
        let cmd = PaintCommand::ellipse(&CircleSpec::new([-100, 280, 320, 700], 80), [184, 223, 245]);
        match cmd {
            PaintCommand::Ellipse { center, radii, rgba } => {
                assert_eq!(center, (110, 490));
                assert_eq!(radii, (210, 210));
                assert_eq!(rgba, (184, 223, 245, 80));
            }
            _ => panic!("unexpected"),
        }
    }
}
