//! Font resolution.
//!
//! Fonts are looked up through an ordered list of candidates. The first one
//! that loads and parses wins; every failure is swallowed and the chain falls
//! through to the built-in bitmap font, which cannot fail.

use std::{fmt, fs, path::PathBuf};

use resvg::usvg::fontdb;

pub const SYSTEM_FAMILY: &str = "Arial";
pub const FALLBACK_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// A family name looked up in the system font database
    SystemFamily(String),
    /// A font file on disk
    File(PathBuf),
}

impl FontCandidate {
    fn load(&self) -> Option<Font> {
        let (data, index) = match self {
            FontCandidate::SystemFamily(family) => load_system_family(family)?,
            FontCandidate::File(path) => (fs::read(path).ok()?, 0),
        };
        Font::from_data(data, index)
    }
}

impl fmt::Display for FontCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontCandidate::SystemFamily(family) => write!(f, "system font \"{}\"", family),
            FontCandidate::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_system_family(family: &str) -> Option<(Vec<u8>, u32)> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let id = db.query(&fontdb::Query {
        families: &[fontdb::Family::Name(family)],
        ..fontdb::Query::default()
    })?;
    db.with_face_data(id, |data, index| (data.to_vec(), index))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontChain {
    candidates: Vec<FontCandidate>,
}

impl Default for FontChain {
    fn default() -> Self {
        Self::new(vec![
            FontCandidate::SystemFamily(SYSTEM_FAMILY.to_string()),
            FontCandidate::File(PathBuf::from(FALLBACK_FONT_PATH)),
        ])
    }
}

impl FontChain {
    pub fn new(candidates: Vec<FontCandidate>) -> Self {
        Self { candidates }
    }

    /// A chain that goes straight to the built-in font.
    pub fn builtin_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn resolve(&self) -> Font {
        for candidate in &self.candidates {
            match candidate.load() {
                Some(font) => {
                    crate::debug!("Using {}", candidate);
                    return font;
                }
                None => crate::debug!("Font unavailable: {}", candidate),
            }
        }
        crate::debug!("Using the built-in font");
        Font::Builtin
    }
}

/// A resolved font.
#[derive(Clone, PartialEq, Eq)]
pub enum Font {
    /// TrueType/OpenType face data and the face index inside it
    Outline { data: Vec<u8>, index: u32 },
    Builtin,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Font::Outline { data, index } => f
                .debug_struct("Outline")
                .field("len", &data.len())
                .field("index", index)
                .finish(),
            Font::Builtin => write!(f, "Builtin"),
        }
    }
}

impl Font {
    /// Returns `None` when `data` is not a face `ttf_parser` can read.
    pub fn from_data(data: Vec<u8>, index: u32) -> Option<Self> {
        ttf_parser::Face::parse(&data, index).ok()?;
        Some(Font::Outline { data, index })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin)
    }
}
