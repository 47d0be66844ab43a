use crate::constants::GLYPH_FONT_FAMILY;
use glyphfield_core::GlyphSurface;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`GlyphSurface`] over the overlay canvas's 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }
}

#[inline]
fn css_rgb([r, g, b]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

impl GlyphSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_fill(&mut self, [r, g, b]: [u8; 3], alpha: f32) {
        self.ctx
            .set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, alpha));
    }

    fn set_font_size(&mut self, px: f32) {
        // resizing the canvas resets context state, so alignment is reapplied here
        self.ctx.set_font(&format!("{}px {}", px, GLYPH_FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
    }

    fn set_glow(&mut self, rgb: [u8; 3], blur: f32) {
        self.ctx.set_shadow_color(&css_rgb(rgb));
        self.ctx.set_shadow_blur(blur as f64);
    }

    fn draw_glyph(&mut self, glyph: char, x: f32, y: f32) {
        let mut buf = [0u8; 4];
        _ = self
            .ctx
            .fill_text(glyph.encode_utf8(&mut buf), x as f64, y as f64);
    }
}
