// Simulation tuning constants. `FieldParams::default()` is built from these.

// Particle counts per viewport size tier
pub const PARTICLES_SMALL: usize = 100;
pub const PARTICLES_LARGE: usize = 150;
pub const LARGE_TIER_MIN_WIDTH: f32 = 1200.0; // width below this uses the small count

// Widths at or below this disable the whole field (mobile)
pub const MOBILE_MAX_WIDTH: f32 = 767.0;

// Distance past a viewport edge before a particle teleports to the opposite edge
pub const WRAP_MARGIN: f32 = 50.0;

// Depth range; also the reference depth for parallax (scale 1 at the near plane)
pub const DEPTH_NEAR: f32 = 50.0;
pub const DEPTH_FAR: f32 = 150.0;
pub const PARALLAX_REFERENCE: f32 = 50.0;

// Spawn velocity half-ranges
pub const DRIFT_XY: f32 = 0.25;
pub const DRIFT_Z: f32 = 0.1;

// Spawn opacity: MIN + random() * SPAN
pub const OPACITY_MIN: f32 = 0.3;
pub const OPACITY_SPAN: f32 = 0.5;

// Pointer interaction
pub const INTERACTION_RADIUS: f32 = 100.0;
pub const REPULSION_STRENGTH: f32 = 3.0;
pub const ATTRACTION_STRENGTH: f32 = 1.0;
pub const MIN_FORCE_DISTANCE: f32 = 1e-3; // closer than this the push direction is undefined

// Glyph rendering
pub const GLYPH_BASE_SIZE: f32 = 8.0;
pub const GLYPH_MIN_SIZE: f32 = 2.0;
pub const GLOW_BLUR: f32 = 10.0;
pub const GLOW_RGB: [u8; 3] = [0x00, 0xff, 0xff];
pub const FILL_RGB: [u8; 3] = [0xff, 0xff, 0xff];

pub const GLYPH_ALPHABET: &[char] = &[
    '{', '}', '(', ')', '=', '>', '/', ';', '*', '<', '>', '[', ']',
];
