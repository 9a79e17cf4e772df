//! REALones icon generator
//!
//! Procedurally renders the REALones application icon: a flat baby-blue
//! square with three translucent decorative circles bleeding in from the
//! corners, and the word mark "REAL" + "ones" set in two typefaces. The result
//! is flattened to opaque RGB and written as a PNG to two locations (the
//! regular app icon and the adaptive icon).
//!
//! # Example
//!
//! ```no_run
//! use realones_icon::{IconConfig, OutputTarget};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     outputs: vec![
//!         OutputTarget::new("Icon", "out/icon.png"),
//!         OutputTarget::new("Adaptive icon", "out/adaptive-icon.png"),
//!     ],
//!     ..Default::default()
//! };
//!
//! let icon = realones_icon::render_icon(&config)?;
//! println!("{}x{} sha256={}", icon.width, icon.height, icon.sha256_hex());
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod fonts;
pub mod output;
pub mod rendering;

pub use rendering::RenderedIcon;

/// An opaque RGB colour.
pub type Rgb = [u8; 3];

/// The "Serene Return" palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas and flattening background
    pub background: Rgb,
    /// Tint shared by every decorative circle
    pub circle: Rgb,
    /// Colour of the first (upright) label
    pub first_text: Rgb,
    /// Colour of the second (italic) label
    pub second_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [232, 244, 252],
            circle: [184, 223, 245],
            first_text: [30, 58, 95],
            second_text: [74, 155, 184],
        }
    }
}

/// A decorative circle given by its bounding box `[left, top, right, bottom]`.
///
/// Boxes may extend past the canvas; only the visible part is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub bbox: [i32; 4],
    pub alpha: u8,
}

impl CircleSpec {
    pub fn new(bbox: [i32; 4], alpha: u8) -> Self {
        Self { bbox, alpha }
    }

    pub fn center(&self) -> (i32, i32) {
        let [l, t, r, b] = self.bbox;
        ((l + r) / 2, (t + b) / 2)
    }

    pub fn radii(&self) -> (i32, i32) {
        let [l, t, r, b] = self.bbox;
        ((r - l) / 2, (b - t) / 2)
    }
}

/// A text label and the em size (in pixels) it is set at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self { text: text.into(), size }
    }
}

/// Filenames of an upright/italic typeface pair inside the font directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPair {
    pub upright: String,
    pub italic: String,
}

impl FontPair {
    pub fn new(upright: impl Into<String>, italic: impl Into<String>) -> Self {
        Self {
            upright: upright.into(),
            italic: italic.into(),
        }
    }
}

/// Where to look for fonts and which pairs to try, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontCandidates {
    pub dir: PathBuf,
    pub pairs: Vec<FontPair>,
}

impl Default for FontCandidates {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets/fonts"),
            pairs: vec![
                FontPair::new("Outfit-Regular.ttf", "Lora-Italic.ttf"),
                FontPair::new("WorkSans-Regular.ttf", "WorkSans-Italic.ttf"),
            ],
        }
    }
}

/// Pixel adjustments used when placing the two labels side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLayout {
    /// Subtracted from the summed label widths before centering
    pub combined_kerning: i32,
    /// Pulls the second label back towards the first
    pub second_kerning: i32,
    /// Lifts the vertical center above the canvas midline
    pub upward_offset: i32,
    /// Drops the italic label to balance its baseline
    pub italic_drop: i32,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            combined_kerning: 20,
            second_kerning: 25,
            upward_offset: 40,
            italic_drop: 15,
        }
    }
}

/// A named destination for the finished PNG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputTarget {
    /// Human readable name used in the confirmation line
    pub label: String,
    pub path: PathBuf,
}

impl OutputTarget {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Complete description of the icon and where it goes.
///
/// The defaults reproduce the shipped icon. Override individual fields with
/// struct-update syntax or load a partial JSON document with
/// [`IconConfig::from_json_file`].
///
/// # Examples
///
/// ```
/// let cfg = realones_icon::IconConfig::default();
/// assert_eq!(cfg.size, 1024);
/// assert_eq!(cfg.outputs.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Side length of the square canvas in pixels
    pub size: u32,
    pub palette: Palette,
    /// Drawn in order onto the overlay; later circles replace earlier ones
    pub circles: Vec<CircleSpec>,
    /// Upright label
    pub first_label: Label,
    /// Italic label
    pub second_label: Label,
    pub fonts: FontCandidates,
    pub layout: TextLayout,
    pub outputs: Vec<OutputTarget>,
}

impl Default for IconConfig {
    fn default() -> Self {
        let size = 1024;
        Self {
            size,
            palette: Palette::default(),
            circles: vec![
                // top right
                CircleSpec::new([size as i32 - 450, -150, size as i32 + 150, 450], 140),
                // bottom left
                CircleSpec::new([-180, size as i32 - 480, 380, size as i32 + 80], 140),
                // center left accent
                CircleSpec::new([-100, 280, 320, 700], 80),
            ],
            first_label: Label::new("REAL", 220.0),
            second_label: Label::new("ones", 200.0),
            fonts: FontCandidates::default(),
            layout: TextLayout::default(),
            outputs: vec![
                OutputTarget::new("Icon", "assets/icon-new.png"),
                OutputTarget::new("Adaptive icon", "assets/adaptive-icon-new.png"),
            ],
        }
    }
}

impl IconConfig {
    /// Load a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw).map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Reject configurations that cannot produce an icon.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > i32::MAX as u32 {
            return Err(Error::ConfigError(format!("canvas size {} is out of range", self.size)));
        }
        for label in [&self.first_label, &self.second_label] {
            if !(label.size.is_finite() && label.size > 0.0) {
                return Err(Error::ConfigError(format!(
                    "font size for {:?} must be positive, got {}",
                    label.text, label.size
                )));
            }
        }
        if self.fonts.pairs.is_empty() {
            return Err(Error::ConfigError("no font candidates configured".into()));
        }
        if self.outputs.is_empty() {
            return Err(Error::ConfigError("no output targets configured".into()));
        }
        let mut seen = HashSet::new();
        for target in &self.outputs {
            if !seen.insert(&target.path) {
                return Err(Error::ConfigError(format!(
                    "output path {} is listed twice",
                    target.path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Render the icon to PNG bytes without touching the output paths.
pub fn render_icon(config: &IconConfig) -> Result<RenderedIcon> {
    config.validate()?;
    let fonts = fonts::resolve(&config.fonts)?;
    rendering::render(config, &fonts)
}

/// Render the icon and write it to every output target.
///
/// Either every target is written or none is. Returns the targets in the
/// order they were committed.
pub fn write_icon(config: &IconConfig) -> Result<Vec<OutputTarget>> {
    let icon = render_icon(config)?;
    log::info!("rendered {}x{} icon, sha256 {}", icon.width, icon.height, icon.sha256_hex());
    output::write_all(&icon.png_data, &config.outputs)
}

/// Render and write the icon, printing one confirmation line per file.
///
/// Returns the path of the first output target.
pub fn create_icon(config: &IconConfig) -> Result<PathBuf> {
    let written = write_icon(config)?;
    for target in &written {
        println!("{} created: {}", target.label, target.path.display());
    }
    // validate() guarantees at least one target
    Ok(written[0].path.clone())
}

/// The zero-argument operation: render the shipped icon to its default paths.
pub fn create_default_icon() -> Result<PathBuf> {
    create_icon(&IconConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.size, 1024);
        assert_eq!(config.circles.len(), 3);
        assert_eq!(config.first_label.text, "REAL");
        assert_eq!(config.second_label.text, "ones");
        assert!(config.first_label.size > config.second_label.size);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_circles_bleed_past_edges() {
        let config = IconConfig::default();
        assert_eq!(config.circles[0].bbox, [574, -150, 1174, 450]);
        assert_eq!(config.circles[1].bbox, [-180, 544, 380, 1104]);
        assert_eq!(config.circles[0].center(), (874, 150));
        assert_eq!(config.circles[0].radii(), (300, 300));
        assert_eq!(config.circles[2].alpha, 80);
    }

    #[test]
    fn validate_rejects_duplicate_outputs() {
        let config = IconConfig {
            outputs: vec![OutputTarget::new("a", "x.png"), OutputTarget::new("b", "x.png")],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        let mut config = IconConfig { size: 0, ..Default::default() };
        assert!(config.validate().is_err());

        config.size = 512;
        config.second_label.size = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: IconConfig = serde_json::from_str(r#"{"size": 512, "palette": {"background": [0, 0, 0]}}"#)
            .expect("parse config");
        assert_eq!(cfg.size, 512);
        assert_eq!(cfg.palette.background, [0, 0, 0]);
        assert_eq!(cfg.palette.circle, Palette::default().circle);
        assert_eq!(cfg.fonts, FontCandidates::default());
    }
}
