//! Font candidate resolution
//!
//! Pairs are tried in order. A missing file moves on to the next pair; a file
//! that exists but cannot be read or parsed stops resolution immediately.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale};
use log::{debug, warn};

use crate::{Error, FontCandidates, Result};

/// A parsed font and the file it came from.
pub struct LoadedFont {
    pub path: PathBuf,
    pub font: FontVec,
}

impl LoadedFont {
    /// Scale for an em size given in pixels.
    pub fn scale(&self, em_px: f32) -> PxScale {
        em_scale(&self.font, em_px)
    }
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont").field("path", &self.path).finish()
    }
}

/// The upright and italic faces chosen for the two labels.
#[derive(Debug)]
pub struct ResolvedFonts {
    pub upright: LoadedFont,
    pub italic: LoadedFont,
    /// Index into `FontCandidates::pairs` of the pair that loaded
    pub pair_index: usize,
}

/// Try each candidate pair in order and return the first that fully loads.
pub fn resolve(candidates: &FontCandidates) -> Result<ResolvedFonts> {
    let mut attempted = Vec::new();

    for (pair_index, pair) in candidates.pairs.iter().enumerate() {
        let upright_path = candidates.dir.join(&pair.upright);
        let italic_path = candidates.dir.join(&pair.italic);

        let upright = load(&upright_path)?;
        let italic = load(&italic_path)?;

        match (upright, italic) {
            (Some(upright), Some(italic)) => {
                if pair_index > 0 {
                    warn!(
                        "using fallback fonts {} / {}",
                        upright.path.display(),
                        italic.path.display()
                    );
                } else {
                    debug!("using fonts {} / {}", upright.path.display(), italic.path.display());
                }
                return Ok(ResolvedFonts {
                    upright,
                    italic,
                    pair_index,
                });
            }
            (upright, italic) => {
                if upright.is_none() {
                    warn!("font not found: {}", upright_path.display());
                    attempted.push(upright_path);
                }
                if italic.is_none() {
                    warn!("font not found: {}", italic_path.display());
                    attempted.push(italic_path);
                }
            }
        }
    }

    Err(Error::FontNotFound { attempted })
}

/// Read and parse a font file. `Ok(None)` means the file does not exist.
pub fn load(path: &Path) -> Result<Option<LoadedFont>> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::FontLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };
    let font = FontVec::try_from_vec(data).map_err(|e| Error::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Some(LoadedFont {
        path: path.to_path_buf(),
        font,
    }))
}

/// Convert an em size in pixels to an `ab_glyph` scale.
///
/// `PxScale` measures ascent to descent, so the em size is stretched by the
/// font's line height over its units per em.
pub fn em_scale<F: Font>(font: &F, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(em_px * font.height_unscaled() / upem),
        _ => PxScale::from(em_px),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontPair;

    const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fonts");

    fn candidates(dir: &str, pairs: &[(&str, &str)]) -> FontCandidates {
        FontCandidates {
            dir: PathBuf::from(dir),
            pairs: pairs.iter().map(|(u, i)| FontPair::new(*u, *i)).collect(),
        }
    }

    #[test]
    fn resolves_first_pair_when_present() {
        let c = candidates(FIXTURES, &[("DejaVuSans.ttf", "DejaVuSerif-Italic.ttf")]);
        let fonts = resolve(&c).expect("fixtures load");
        assert_eq!(fonts.pair_index, 0);
        assert!(fonts.upright.path.ends_with("DejaVuSans.ttf"));
    }

    #[test]
    fn falls_back_when_primary_missing() {
        let c = candidates(
            FIXTURES,
            &[
                ("Outfit-Regular.ttf", "Lora-Italic.ttf"),
                ("DejaVuSans.ttf", "DejaVuSerif-Italic.ttf"),
            ],
        );
        let fonts = resolve(&c).expect("fallback loads");
        assert_eq!(fonts.pair_index, 1);
        assert!(fonts.italic.path.ends_with("DejaVuSerif-Italic.ttf"));
    }

    #[test]
    fn half_missing_pair_is_skipped() {
        let c = candidates(
            FIXTURES,
            &[
                ("DejaVuSans.ttf", "Lora-Italic.ttf"),
                ("DejaVuSans.ttf", "DejaVuSerif-Italic.ttf"),
            ],
        );
        assert_eq!(resolve(&c).expect("second pair loads").pair_index, 1);
    }

    #[test]
    fn reports_every_missing_path() {
        let c = candidates("/definitely/not/here", &[("A.ttf", "B.ttf"), ("C.ttf", "D.ttf")]);
        match resolve(&c) {
            Err(Error::FontNotFound { attempted }) => {
                let names: Vec<_> = attempted
                    .iter()
                    .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                    .collect();
                assert_eq!(names, ["A.ttf", "B.ttf", "C.ttf", "D.ttf"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn em_scale_exceeds_em_size() {
        let font = load(&Path::new(FIXTURES).join("DejaVuSans.ttf")).unwrap().unwrap();
        let scale = font.scale(200.0);
        // DejaVu's ascent - descent is larger than its em square
        assert!(scale.y > 200.0);
        assert_eq!(scale.x, scale.y);
    }
}
