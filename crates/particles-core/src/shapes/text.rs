//! Text → point cloud.
//!
//! Text is laid out in lines, drawn into an off-screen greyscale bitmap with
//! the built-in font, and every sampled pixel brighter than the threshold
//! becomes a candidate. Output points are drawn from the candidates with
//! replacement, so any particle count works with any string.

use glam::Vec3;
use log::warn;
use rand::Rng;

use super::font::{self, ADVANCE_X, ADVANCE_Y, GLYPH_H, GLYPH_W};
use crate::constants::{
    TEXT_BRIGHTNESS_THRESHOLD, TEXT_CANVAS_HEIGHT, TEXT_CANVAS_WIDTH, TEXT_CELL_PX, TEXT_DEPTH,
    TEXT_MAX_LINE_CHARS, TEXT_PIXEL_SCALE, TEXT_SAMPLE_STEP,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TextParams {
    pub canvas_width: usize,
    pub canvas_height: usize,
    /// Size of one font pixel before shrinking to fit.
    pub cell_px: usize,
    pub max_line_chars: usize,
    pub sample_step: usize,
    pub brightness_threshold: u8,
    /// Scene units per bitmap pixel.
    pub pixel_scale: f32,
    pub depth: f32,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            canvas_width: TEXT_CANVAS_WIDTH,
            canvas_height: TEXT_CANVAS_HEIGHT,
            cell_px: TEXT_CELL_PX,
            max_line_chars: TEXT_MAX_LINE_CHARS,
            sample_step: TEXT_SAMPLE_STEP,
            brightness_threshold: TEXT_BRIGHTNESS_THRESHOLD,
            pixel_scale: TEXT_PIXEL_SCALE,
            depth: TEXT_DEPTH,
        }
    }
}

/// Row-major 8-bit greyscale image.
#[derive(Clone, Debug)]
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Fills a square, clipped to the bitmap.
    fn fill_square(&mut self, x0: usize, y0: usize, size: usize, value: u8) {
        for y in y0..(y0 + size).min(self.height) {
            for x in x0..(x0 + size).min(self.width) {
                self.data[y * self.width + x] = value;
            }
        }
    }
}

/// Greedy word wrap. Words longer than `max_chars` are hard-split.
pub fn layout_lines(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(max_chars) {
            let chunk: String = chunk.iter().collect();
            let needed = if current.is_empty() {
                chunk.chars().count()
            } else {
                current.chars().count() + 1 + chunk.chars().count()
            };
            if needed > max_chars && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&chunk);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Font pixel size that keeps every line inside the canvas.
pub fn fit_cell_px(lines: &[String], params: &TextParams) -> usize {
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if widest == 0 {
        return params.cell_px.max(1);
    }
    let by_width = params.canvas_width / (widest * ADVANCE_X);
    let by_height = params.canvas_height / (lines.len() * ADVANCE_Y);
    params.cell_px.min(by_width).min(by_height).max(1)
}

/// Draws `text` centred on a fresh canvas.
pub fn rasterize(text: &str, params: &TextParams) -> Bitmap {
    let mut bitmap = Bitmap::new(params.canvas_width, params.canvas_height);
    let lines = layout_lines(text, params.max_line_chars);
    if lines.is_empty() {
        return bitmap;
    }
    let px = fit_cell_px(&lines, params);
    let block_h = (lines.len() * ADVANCE_Y - (ADVANCE_Y - GLYPH_H)) * px;
    let top = bitmap.height.saturating_sub(block_h) / 2;

    for (li, line) in lines.iter().enumerate() {
        let n = line.chars().count();
        let line_w = (n * ADVANCE_X - (ADVANCE_X - GLYPH_W)) * px;
        let left = bitmap.width.saturating_sub(line_w) / 2;
        let y0 = top + li * ADVANCE_Y * px;
        for (ci, ch) in line.chars().enumerate() {
            let Some(rows) = font::glyph(ch) else {
                continue;
            };
            let x0 = left + ci * ADVANCE_X * px;
            for row in 0..GLYPH_H {
                for col in 0..GLYPH_W {
                    if font::is_lit(&rows, col, row) {
                        bitmap.fill_square(x0 + col * px, y0 + row * px, px, 255);
                    }
                }
            }
        }
    }
    bitmap
}

/// Bitmap-space pixels brighter than the threshold, sampled on a grid.
pub fn bright_pixels(bitmap: &Bitmap, step: usize, threshold: u8) -> Vec<(usize, usize)> {
    let step = step.max(1);
    let mut out = Vec::new();
    for y in (0..bitmap.height).step_by(step) {
        for x in (0..bitmap.width).step_by(step) {
            if bitmap.get(x, y) > threshold {
                out.push((x, y));
            }
        }
    }
    out
}

/// Exactly `count` scene-space points spelling `text`.
///
/// Bitmap y grows downward, so it is flipped. When nothing is bright enough
/// (empty string, only unsupported glyphs) every point collapses to the
/// origin.
pub fn text_points<R: Rng + ?Sized>(
    text: &str,
    count: usize,
    params: &TextParams,
    rng: &mut R,
) -> Vec<Vec3> {
    let bitmap = rasterize(text, params);
    let candidates = bright_pixels(&bitmap, params.sample_step, params.brightness_threshold);
    if candidates.is_empty() {
        warn!("text {text:?} rasterised to no visible pixels; collapsing to origin");
        return vec![Vec3::ZERO; count];
    }

    let half_w = bitmap.width as f32 * 0.5;
    let half_h = bitmap.height as f32 * 0.5;
    let spread = params.sample_step.max(1) as f32;
    (0..count)
        .map(|_| {
            let (px, py) = candidates[rng.gen_range(0..candidates.len())];
            let jx = (rng.gen::<f32>() - 0.5) * spread;
            let jy = (rng.gen::<f32>() - 0.5) * spread;
            Vec3::new(
                (px as f32 + jx - half_w) * params.pixel_scale,
                (half_h - (py as f32 + jy)) * params.pixel_scale,
                (rng.gen::<f32>() - 0.5) * params.depth,
            )
        })
        .collect()
}
