#[cfg(feature = "log")]
extern crate log;
extern crate thiserror;
#[cfg(feature = "progress")]
#[macro_use]
extern crate lazy_static;
#[cfg(feature = "progress")]
extern crate eyre;
extern crate image;
extern crate resvg;
extern crate ttf_parser;

pub mod config;
pub mod error;
pub mod font;
pub(crate) mod logs;
pub mod render;
pub mod text;
#[cfg(feature = "progress")]
pub mod update;

use std::fs;

pub use config::{icon_file_name, IconSetConfig, Theme, ICONS_DIR, ICON_SIZES, LABEL};
pub use error::{IconError, Result};
pub use render::{circle_bounds, create_icon, GeneratedIcon, IconRenderer};

#[cfg(feature = "progress")]
lazy_static! {
    /// Progress updater
    pub static ref UPDATER: std::sync::Arc<std::sync::Mutex<update::Updater<eyre::Report, usize>>> =
        std::sync::Arc::new(std::sync::Mutex::new(update::Updater::default()));
}

/// Generate every icon of the set described by `config`.
///
/// The output directory is created first (with its parents). Sizes are then
/// rendered in order and the first failure stops the run.
pub fn generate_icon_set(config: &IconSetConfig) -> Result<Vec<GeneratedIcon>> {
    fs::create_dir_all(&config.output_dir).map_err(|source| IconError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;
    crate::debug!("Output directory ready: {}", config.output_dir.display());

    let renderer = IconRenderer::new(config);

    #[cfg(feature = "progress")]
    if let Ok(updater) = UPDATER.lock() {
        updater.init(Some(config.sizes.len()))?;
    }

    let generated = render_sizes(config, &renderer);

    // The bar is torn down on failure too
    #[cfg(feature = "progress")]
    if let Ok(updater) = UPDATER.lock() {
        updater.finish()?;
    }
    let generated = generated?;

    crate::info!(
        "Generated {} icons in {}",
        generated.len(),
        config.output_dir.display()
    );
    Ok(generated)
}

fn render_sizes(config: &IconSetConfig, renderer: &IconRenderer) -> Result<Vec<GeneratedIcon>> {
    let mut generated = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.icon_path(size);

        #[cfg(feature = "progress")]
        if let Ok(updater) = UPDATER.lock() {
            updater.set_message(format!("Rendering {}", icon_file_name(size)))?;
        }

        let icon = renderer
            .create_icon(size, &path)
            .map_err(|source| IconError::Icon {
                size,
                source: Box::new(source),
            })?;

        #[cfg(feature = "progress")]
        if let Ok(updater) = UPDATER.lock() {
            updater.increment(1)?;
        }

        generated.push(icon);
    }
    Ok(generated)
}
