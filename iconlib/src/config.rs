use std::path::{Path, PathBuf};

use crate::font::FontChain;

/// Directory the icons are written to, relative to the working directory.
pub const ICONS_DIR: &str = "public/icons";
/// Pixel sizes requested by the web app manifest, in generation order.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];
pub const LABEL: &str = "GIS";

/// `#2563eb`
pub const BACKGROUND: [u8; 3] = [0x25, 0x63, 0xeb];
pub const CIRCLE: [u8; 3] = [0xff, 0xff, 0xff];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: [u8; 3],
    pub circle: [u8; 3],
    /// Label fill. Matches the background so the text reads as a cut-out.
    pub label: [u8; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            circle: CIRCLE,
            label: BACKGROUND,
        }
    }
}

/// Everything a run needs. The default value is the only one the binary uses.
#[derive(Debug, Clone)]
pub struct IconSetConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub label: String,
    pub theme: Theme,
    pub fonts: FontChain,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(ICONS_DIR),
            sizes: ICON_SIZES.to_vec(),
            label: LABEL.to_string(),
            theme: Theme::default(),
            fonts: FontChain::default(),
        }
    }
}

impl IconSetConfig {
    pub fn icon_path(&self, size: u32) -> PathBuf {
        icon_path(&self.output_dir, size)
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

pub fn icon_path<P: AsRef<Path>>(dir: P, size: u32) -> PathBuf {
    dir.as_ref().join(icon_file_name(size))
}
