use crate::params::FieldParams;

/// Live surface size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeTier {
    /// At or below the mobile threshold; the field is not shown at all.
    Disabled,
    Small,
    Large,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn tier(&self, params: &FieldParams) -> SizeTier {
        if self.width <= params.mobile_max_width {
            SizeTier::Disabled
        } else if self.width < params.large_tier_min_width {
            SizeTier::Small
        } else {
            SizeTier::Large
        }
    }

    #[inline]
    pub fn is_disabled(&self, params: &FieldParams) -> bool {
        self.tier(params) == SizeTier::Disabled
    }

    /// Spawn count for this size. The disabled tier reuses the small count so a
    /// field built for it is still well-formed.
    pub fn particle_count(&self, params: &FieldParams) -> usize {
        match self.tier(params) {
            SizeTier::Large => params.large_count,
            SizeTier::Small | SizeTier::Disabled => params.small_count,
        }
    }
}
