//! Label layout.
//!
//! Text is turned into a single vector path in pixel units. The layout origin
//! `(0, 0)` is the top-left corner of the line box, i.e. the ascender line,
//! so the inked bounding box usually starts below `y = 0`.

use resvg::tiny_skia::{Path, PathBuilder, Rect};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::font::Font;

/// Cells per em of the built-in font.
const BUILTIN_EM: f32 = 10.0;
/// Cell row of the glyph top, measured from the ascender line.
const BUILTIN_TOP: f32 = 2.0;
const BUILTIN_ADVANCE: f32 = 6.0;
const GLYPH_W: usize = 5;
const GLYPH_H: usize = 7;

#[derive(Debug, Clone)]
pub struct TextLayout {
    path: Path,
}

impl TextLayout {
    /// Lays out `label` at `px` pixels per em. Returns `None` when nothing
    /// would be inked (empty or blank label).
    pub fn new(font: &Font, label: &str, px: f32) -> Option<Self> {
        let path = match font {
            Font::Outline { data, index } => {
                let face = Face::parse(data, *index).ok()?;
                outline_path(&face, label, px)?
            }
            Font::Builtin => builtin_path(label, px)?,
        };
        Some(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inked bounding box relative to the layout origin.
    pub fn bounds(&self) -> Rect {
        self.path.bounds()
    }

    /// Translation that centers the inked box on a `size × size` canvas.
    ///
    /// The `- top` term undoes the gap between the ascender line and the
    /// top of the tallest glyph.
    pub fn centered_offset(&self, size: u32) -> (f32, f32) {
        let bounds = self.bounds();
        let size = size as f32;
        (
            (size - bounds.width()) / 2.0 - bounds.left(),
            (size - bounds.height()) / 2.0 - bounds.top(),
        )
    }
}

struct GlyphSink<'a> {
    builder: &'a mut PathBuilder,
    scale: f32,
    x: f32,
    baseline: f32,
}

impl GlyphSink<'_> {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

fn outline_path(face: &Face<'_>, label: &str, px: f32) -> Option<Path> {
    let scale = px / f32::from(face.units_per_em());
    let baseline = f32::from(face.ascender()) * scale;
    let mut builder = PathBuilder::new();
    let mut pen = 0.0;

    for c in label.chars() {
        // Unmapped characters draw the .notdef glyph
        let glyph = face.glyph_index(c).unwrap_or(GlyphId(0));
        let mut sink = GlyphSink {
            builder: &mut builder,
            scale,
            x: pen,
            baseline,
        };
        face.outline_glyph(glyph, &mut sink);
        pen += f32::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
    }

    builder.finish()
}

fn builtin_path(label: &str, px: f32) -> Option<Path> {
    let cell = px / BUILTIN_EM;
    let mut builder = PathBuilder::new();

    for (i, c) in label.chars().enumerate() {
        let origin_x = i as f32 * BUILTIN_ADVANCE * cell;
        for (row, bits) in builtin_glyph(c).iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                if let Some(rect) = Rect::from_xywh(
                    origin_x + col as f32 * cell,
                    (BUILTIN_TOP + row as f32) * cell,
                    cell,
                    cell,
                ) {
                    builder.push_rect(rect);
                }
            }
        }
    }

    builder.finish()
}

/// 5x7 bitmap rows, most significant of the low five bits is the left column.
fn builtin_glyph(c: char) -> [u8; GLYPH_H] {
    match c.to_ascii_uppercase() {
        ' ' => [0; GLYPH_H],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}
