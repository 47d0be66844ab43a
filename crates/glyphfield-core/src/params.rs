use crate::constants::*;
use crate::error::ParamsError;

/// Tuning knobs for spawning, moving and painting the glyph field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub small_count: usize,
    pub large_count: usize,
    pub large_tier_min_width: f32,
    pub mobile_max_width: f32,
    pub wrap_margin: f32,
    pub depth_near: f32,
    pub depth_far: f32,
    pub parallax_reference: f32,
    pub drift_xy: f32,
    pub drift_z: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
    pub interaction_radius: f32,
    pub repulsion_strength: f32,
    pub attraction_strength: f32,
    pub min_force_distance: f32,
    pub glyph_base_size: f32,
    pub glyph_min_size: f32,
    pub glow_blur: f32,
    pub glow_rgb: [u8; 3],
    pub fill_rgb: [u8; 3],
    pub alphabet: &'static [char],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            small_count: PARTICLES_SMALL,
            large_count: PARTICLES_LARGE,
            large_tier_min_width: LARGE_TIER_MIN_WIDTH,
            mobile_max_width: MOBILE_MAX_WIDTH,
            wrap_margin: WRAP_MARGIN,
            depth_near: DEPTH_NEAR,
            depth_far: DEPTH_FAR,
            parallax_reference: PARALLAX_REFERENCE,
            drift_xy: DRIFT_XY,
            drift_z: DRIFT_Z,
            opacity_min: OPACITY_MIN,
            opacity_span: OPACITY_SPAN,
            interaction_radius: INTERACTION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            attraction_strength: ATTRACTION_STRENGTH,
            min_force_distance: MIN_FORCE_DISTANCE,
            glyph_base_size: GLYPH_BASE_SIZE,
            glyph_min_size: GLYPH_MIN_SIZE,
            glow_blur: GLOW_BLUR,
            glow_rgb: GLOW_RGB,
            fill_rgb: FILL_RGB,
            alphabet: GLYPH_ALPHABET,
        }
    }
}

impl FieldParams {
    /// Check the values the simulation divides by or samples from.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.alphabet.is_empty() {
            return Err(ParamsError::EmptyAlphabet);
        }
        if !(self.depth_near > 0.0 && self.depth_far > self.depth_near) {
            return Err(ParamsError::InvalidDepthRange {
                near: self.depth_near,
                far: self.depth_far,
            });
        }
        for (name, value) in [
            ("parallax_reference", self.parallax_reference),
            ("interaction_radius", self.interaction_radius),
            ("min_force_distance", self.min_force_distance),
            ("glyph_base_size", self.glyph_base_size),
        ] {
            if !(value > 0.0) {
                return Err(ParamsError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("wrap_margin", self.wrap_margin),
            ("drift_xy", self.drift_xy),
            ("drift_z", self.drift_z),
            ("opacity_min", self.opacity_min),
            ("opacity_span", self.opacity_span),
            ("repulsion_strength", self.repulsion_strength),
            ("attraction_strength", self.attraction_strength),
            ("glyph_min_size", self.glyph_min_size),
            ("glow_blur", self.glow_blur),
        ] {
            if !(value >= 0.0) {
                return Err(ParamsError::Negative { name, value });
            }
        }
        if self.mobile_max_width >= self.large_tier_min_width {
            return Err(ParamsError::InvalidThresholds {
                mobile: self.mobile_max_width,
                large: self.large_tier_min_width,
            });
        }
        Ok(())
    }

    /// Parallax factor for a depth: 1 at the near plane, smaller further back.
    #[inline]
    pub fn parallax(&self, depth: f32) -> f32 {
        self.parallax_reference / depth
    }
}
