use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use super::{ReceiptError, Result};

const BUILTIN_NAME: &str = "DejaVuSans";
const BUILTIN_PROGRAM: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// TrueType font program embedded into every receipt.
///
/// Text is written as glyph ids of this font, so whatever characters the font covers
/// (including the rupee sign of the built in font) show up on the page unchanged.
#[derive(Clone, PartialEq)]
pub struct ReceiptFont {
    name: String,
    program: Cow<'static, [u8]>,
}

/// Horizontal metrics of a font, scaled to PDF glyph space (1000 units per em).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub ascent: i64,
    pub descent: i64,
    pub cap_height: i64,
    pub bbox: [i64; 4],
}

impl ReceiptFont {
    /// DejaVu Sans, shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            name: BUILTIN_NAME.to_string(),
            program: Cow::Borrowed(BUILTIN_PROGRAM),
        }
    }

    /// Reads a TrueType font file, named after its file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let program = std::fs::read(path)?;
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name: String = stem.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '-').collect();

        Self::from_program(if name.is_empty() { "Font".to_string() } else { name }, program)
    }

    pub fn from_program(name: String, program: Vec<u8>) -> Result<Self> {
        ttf_parser::Face::parse(&program, 0).map_err(|source| ReceiptError::FontError {
            name: name.clone(),
            source,
        })?;
        log::debug!("Loaded receipt font '{}' ({} bytes)", name, program.len());

        Ok(Self {
            name,
            program: Cow::Owned(program),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    fn face(&self) -> Result<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.program, 0).map_err(|source| ReceiptError::FontError {
            name: self.name.clone(),
            source,
        })
    }

    /// Maps every character to its glyph id; characters the font lacks map to glyph 0 (.notdef).
    pub fn glyph_ids(&self, text: &str) -> Result<Vec<u16>> {
        let face = self.face()?;
        Ok(text
            .chars()
            .map(|c| face.glyph_index(c).map(|glyph| glyph.0).unwrap_or(0))
            .collect())
    }

    /// Advance width of a glyph in 1000 units per em.
    pub fn glyph_width(&self, glyph_id: u16) -> Result<i64> {
        let face = self.face()?;
        let advance = face
            .glyph_hor_advance(ttf_parser::GlyphId(glyph_id))
            .unwrap_or(0);

        Ok(scale(advance as i64, face.units_per_em()))
    }

    pub fn metrics(&self) -> Result<FontMetrics> {
        let face = self.face()?;
        let units = face.units_per_em();
        let bbox = face.global_bounding_box();

        Ok(FontMetrics {
            ascent: scale(face.ascender() as i64, units),
            descent: scale(face.descender() as i64, units),
            cap_height: scale(face.capital_height().unwrap_or(face.ascender()) as i64, units),
            bbox: [
                scale(bbox.x_min as i64, units),
                scale(bbox.y_min as i64, units),
                scale(bbox.x_max as i64, units),
                scale(bbox.y_max as i64, units),
            ],
        })
    }
}

impl Default for ReceiptFont {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ReceiptFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptFont")
            .field("name", &self.name)
            .field("program_len", &self.program.len())
            .finish()
    }
}

fn scale(value: i64, units_per_em: u16) -> i64 {
    if units_per_em == 0 {
        return value;
    }
    value * 1000 / units_per_em as i64
}
