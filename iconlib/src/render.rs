use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use resvg::tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::{
    config::{IconSetConfig, Theme},
    error::{IconError, Result},
    font::Font,
    text::TextLayout,
};

/// An icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

impl GeneratedIcon {
    /// Human readable line announcing the icon.
    pub fn confirmation(&self) -> String {
        format!(
            "✓ Icon created: {} ({}x{})",
            self.path.display(),
            self.size,
            self.size
        )
    }
}

/// Bounding box `(left, top, right, bottom)` of the circle on a `size` canvas.
pub fn circle_bounds(size: u32) -> (u32, u32, u32, u32) {
    let margin = size / 6;
    (margin, margin, size - margin, size - margin)
}

fn color([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba8(r, g, b, 255)
}

fn solid(rgb: [u8; 3]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color(rgb));
    paint.anti_alias = true;
    paint
}

/// Draws icons with a font resolved once up front.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    theme: Theme,
    label: String,
    font: Font,
}

impl IconRenderer {
    pub fn new(config: &IconSetConfig) -> Self {
        Self::with_font(config, config.fonts.resolve())
    }

    pub fn with_font(config: &IconSetConfig, font: Font) -> Self {
        Self {
            theme: config.theme,
            label: config.label.clone(),
            font,
        }
    }

    /// Render the icon in memory.
    pub fn render(&self, size: u32) -> Result<RgbImage> {
        if size == 0 {
            return Err(IconError::InvalidSize { size });
        }
        let mut pixmap = Pixmap::new(size, size).ok_or(IconError::Canvas { size })?;
        pixmap.fill(color(self.theme.background));

        let (left, top, right, bottom) = circle_bounds(size);
        let cx = (left + right) as f32 / 2.0;
        let cy = (top + bottom) as f32 / 2.0;
        let radius = (right - left) as f32 / 2.0;
        if let Some(circle) = PathBuilder::from_circle(cx, cy, radius) {
            pixmap.fill_path(
                &circle,
                &solid(self.theme.circle),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }

        let font_px = (size / 3) as f32;
        if let Some(layout) = TextLayout::new(&self.font, &self.label, font_px) {
            let (x, y) = layout.centered_offset(size);
            crate::trace!("{}px label offset: ({}, {})", size, x, y);
            pixmap.fill_path(
                layout.path(),
                &solid(self.theme.label),
                FillRule::Winding,
                Transform::from_translate(x, y),
                None,
            );
        }

        let rgb: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let pixel = pixel.demultiply();
                [pixel.red(), pixel.green(), pixel.blue()]
            })
            .collect();
        RgbImage::from_raw(size, size, rgb).ok_or(IconError::Canvas { size })
    }

    /// Render the icon and write it to `output_path` as a PNG, replacing any
    /// existing file.
    pub fn create_icon<P: AsRef<Path>>(&self, size: u32, output_path: P) -> Result<GeneratedIcon> {
        let path = output_path.as_ref();
        let image = self.render(size)?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| IconError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        let icon = GeneratedIcon {
            size,
            path: path.to_path_buf(),
        };
        crate::info!("{}", icon.confirmation());
        #[cfg(feature = "progress")]
        if let Ok(updater) = crate::UPDATER.lock() {
            updater.set_title(icon.confirmation())?;
        }
        Ok(icon)
    }
}

/// Write a single icon with the default label, theme and font chain.
pub fn create_icon<P: AsRef<Path>>(size: u32, output_path: P) -> Result<GeneratedIcon> {
    IconRenderer::new(&IconSetConfig::default()).create_icon(size, output_path)
}

#[cfg(test)]
mod test {
    use std::fs;

    use image::{ImageFormat, ImageReader, Rgb, RgbImage};
    use tempfile::tempdir;

    use super::{circle_bounds, create_icon, IconRenderer};
    use crate::{
        config::{BACKGROUND, CIRCLE, ICON_SIZES},
        font::{Font, FontChain, FALLBACK_FONT_PATH},
        IconError, IconSetConfig,
    };

    fn outline_font() -> Option<Font> {
        Font::from_data(fs::read(FALLBACK_FONT_PATH).ok()?, 0)
    }

    /// Inclusive pixel extent `(min_x, max_x, min_y, max_y)` of the label.
    fn inked_extent(image: &RgbImage, size: u32) -> (u32, u32, u32, u32) {
        let (mut min_x, mut max_x) = (u32::MAX, 0);
        let (mut min_y, mut max_y) = (u32::MAX, 0);
        for (x, y) in inside_circle(size, 2.0) {
            if near(image.get_pixel(x, y), BACKGROUND, 64) {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
        (min_x, max_x, min_y, max_y)
    }

    fn renderer() -> IconRenderer {
        let config = IconSetConfig {
            fonts: FontChain::builtin_only(),
            ..IconSetConfig::default()
        };
        IconRenderer::new(&config)
    }

    fn is_background(pixel: &Rgb<u8>) -> bool {
        pixel.0 == BACKGROUND
    }

    fn is_white(pixel: &Rgb<u8>) -> bool {
        pixel.0.iter().all(|&c| c >= 250)
    }

    /// Pixels whose centre lies at least `inset` pixels inside the circle.
    fn inside_circle(size: u32, inset: f32) -> impl Iterator<Item = (u32, u32)> {
        let (left, _, right, _) = circle_bounds(size);
        let center = size as f32 / 2.0;
        let radius = (right - left) as f32 / 2.0 - inset;
        (0..size).flat_map(move |y| {
            (0..size).filter_map(move |x| {
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                (dx * dx + dy * dy <= radius * radius).then_some((x, y))
            })
        })
    }

    fn near(pixel: &Rgb<u8>, rgb: [u8; 3], tolerance: u8) -> bool {
        pixel.0.iter().zip(rgb).all(|(&a, b)| a.abs_diff(b) <= tolerance)
    }

    #[test]
    fn margin_is_a_sixth_of_the_size() {
        assert_eq!(circle_bounds(72), (12, 12, 60, 60));
        assert_eq!(circle_bounds(152), (25, 25, 127, 127));
        assert_eq!(circle_bounds(512), (85, 85, 427, 427));
    }

    #[test]
    fn dimensions_match_size() {
        let renderer = renderer();
        for size in ICON_SIZES {
            let image = renderer.render(size).unwrap();
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn corners_keep_the_background() {
        let image = renderer().render(96).unwrap();
        for (x, y) in [(0, 0), (95, 0), (0, 95), (95, 95)] {
            assert!(is_background(image.get_pixel(x, y)));
        }
    }

    #[test]
    fn circle_touches_the_margin_on_every_side() {
        let renderer = renderer();
        for size in ICON_SIZES {
            let image: RgbImage = renderer.render(size).unwrap();
            let (left, top, right, bottom) = circle_bounds(size);
            let mid = size / 2;

            // Just outside the box
            assert!(is_background(image.get_pixel(mid, top - 2)), "top {size}");
            assert!(is_background(image.get_pixel(mid, bottom + 1)), "bottom {size}");
            assert!(is_background(image.get_pixel(left - 2, mid)), "left {size}");
            assert!(is_background(image.get_pixel(right + 1, mid)), "right {size}");

            // Just inside it, away from the label
            assert!(is_white(image.get_pixel(mid, top + 2)), "top {size}");
            assert!(is_white(image.get_pixel(mid, bottom - 3)), "bottom {size}");
        }
    }

    #[test]
    fn label_is_drawn_in_the_background_color() {
        let image = renderer().render(192).unwrap();

        let mut label = 0;
        let mut circle = 0;
        for (x, y) in inside_circle(192, 2.0) {
            let pixel = image.get_pixel(x, y);
            if near(pixel, BACKGROUND, 8) {
                label += 1;
            } else if near(pixel, CIRCLE, 8) {
                circle += 1;
            }
        }
        assert!(label > 0);
        assert!(circle > label);
        assert_ne!(BACKGROUND, CIRCLE);
    }

    #[test]
    fn label_is_centered() {
        let size = 144;
        let image = renderer().render(size).unwrap();

        let (min_x, max_x, min_y, max_y) = inked_extent(&image, size);
        let center_x = (min_x + max_x) as i64;
        let center_y = (min_y + max_y) as i64;
        assert!((center_x - size as i64).abs() <= 2, "x span {min_x}..{max_x}");
        assert!((center_y - size as i64).abs() <= 2, "y span {min_y}..{max_y}");
    }

    #[test]
    fn outline_label_is_centered_at_every_size() {
        let Some(font) = outline_font() else {
            return;
        };
        let renderer = IconRenderer::with_font(&IconSetConfig::default(), font);

        for size in ICON_SIZES {
            let image = renderer.render(size).unwrap();
            let (min_x, max_x, min_y, max_y) = inked_extent(&image, size);
            assert!(min_x <= max_x && min_y <= max_y, "no label at {size}");

            // Twice the centre of the inked span, against twice the canvas centre
            let expected = size as i64 - 1;
            let doubled_x = (min_x + max_x) as i64;
            let doubled_y = (min_y + max_y) as i64;
            assert!((doubled_x - expected).abs() <= 2, "{size}: x {min_x}..{max_x}");
            assert!((doubled_y - expected).abs() <= 2, "{size}: y {min_y}..{max_y}");
        }
    }

    #[test]
    fn outline_label_keeps_inside_the_circle() {
        let Some(font) = outline_font() else {
            return;
        };
        let renderer = IconRenderer::with_font(&IconSetConfig::default(), font);
        let size = 192;
        let image = renderer.render(size).unwrap();
        let (_, top, _, bottom) = circle_bounds(size);
        let mid = size / 2;

        assert!(is_white(image.get_pixel(mid, top + 2)));
        assert!(is_white(image.get_pixel(mid, bottom - 3)));
        let (_, _, min_y, max_y) = inked_extent(&image, size);
        assert!(min_y > top + 2 && max_y < bottom - 3);
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = renderer();
        let first = renderer.render(128).unwrap();
        let second = renderer.render(128).unwrap();
        assert_eq!(first.into_raw(), second.into_raw());
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = renderer().render(0).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize { size: 0 }));
    }

    #[test]
    fn create_icon_overwrites_existing_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("icon-72x72.png");
        std::fs::write(&path, b"stale").unwrap();

        let icon = renderer().create_icon(72, &path).unwrap();
        assert_eq!(icon.size, 72);
        assert_eq!(icon.path, path);

        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (72, 72));
        assert!(image.as_rgb8().is_some());
    }

    #[test]
    fn unwritable_path_is_an_encode_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("missing").join("icon-72x72.png");
        let err = renderer().create_icon(72, &path).unwrap_err();
        assert!(matches!(err, IconError::Encode { .. }));
    }

    #[test]
    fn confirmation_names_path_and_size() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("icon-96x96.png");
        let icon = renderer().create_icon(96, &path).unwrap();
        let line = icon.confirmation();
        assert!(line.contains("icon-96x96.png"));
        assert!(line.ends_with("(96x96)"));
    }

    #[test]
    fn default_create_icon_writes_a_png() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("icon-72x72.png");

        let icon = create_icon(72, &path).unwrap();
        assert_eq!(icon.path, path);

        let reader = ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Png));
        let image = reader.decode().unwrap();
        assert_eq!((image.width(), image.height()), (72, 72));

        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn builtin_renderer_keeps_its_font() {
        assert_eq!(renderer().font, Font::Builtin);
    }
}
