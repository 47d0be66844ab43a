use glam::{Vec2, Vec3};

/// Identity of a particle within one field; never reused, even across respawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

/// One drifting glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub position: Vec2,
    /// Pseudo depth; lower is nearer, faster and larger.
    pub depth: f32,
    pub velocity: Vec3,
    pub symbol: char,
    pub base_opacity: f32,
}
