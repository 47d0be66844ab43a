//! Drawing abstraction the field paints onto.
//!
//! The web frontend implements [`GlyphSurface`] over a 2D canvas context; tests
//! implement it with a recorder.

use crate::params::FieldParams;

pub trait GlyphSurface {
    /// Erase the whole frame.
    fn clear(&mut self, width: f32, height: f32);
    fn set_fill(&mut self, rgb: [u8; 3], alpha: f32);
    /// Monospace font size in pixels.
    fn set_font_size(&mut self, px: f32);
    /// Glow colour and blur radius; a blur of 0 turns the glow off.
    fn set_glow(&mut self, rgb: [u8; 3], blur: f32);
    /// Draw `glyph` centered on (x, y).
    fn draw_glyph(&mut self, glyph: char, x: f32, y: f32);
}

/// How one particle is painted at its current depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub scale: f32,
    pub size: f32,
    pub alpha: f32,
    pub glow_blur: f32,
}

/// Nearer glyphs are larger, more opaque and glow wider. Size never drops
/// below `glyph_min_size` so far glyphs stay legible.
pub fn glyph_style(params: &FieldParams, depth: f32, base_opacity: f32) -> GlyphStyle {
    let scale = params.parallax(depth);
    GlyphStyle {
        scale,
        size: (params.glyph_base_size * scale).max(params.glyph_min_size),
        alpha: base_opacity * scale,
        glow_blur: params.glow_blur * scale,
    }
}
