use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = IconError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Invalid icon size: {size} (must be at least 1 pixel)")]
    InvalidSize { size: u32 },
    #[error("Could not allocate a {size}x{size} canvas")]
    Canvas { size: u32 },
    #[error("Could not create the output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to generate the {size}x{size} icon")]
    Icon {
        size: u32,
        #[source]
        source: Box<IconError>,
    },
    #[cfg(feature = "progress")]
    #[error("Progress reporting failed: {0}")]
    Progress(eyre::Report),
}

#[cfg(feature = "progress")]
impl From<eyre::Report> for IconError {
    fn from(value: eyre::Report) -> Self {
        IconError::Progress(value)
    }
}
