//! The glyph particle field: spawning, per-tick motion and painter's-order drawing.

use crate::params::FieldParams;
use crate::particle::{Particle, ParticleId};
use crate::pointer::PointerState;
use crate::surface::{glyph_style, GlyphSurface};
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};
use rand::prelude::*;

pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    next_id: u64,
    generation: u64,
}

impl ParticleField {
    /// Build a field sized for `viewport` with a freshly spawned particle set.
    pub fn new<R: Rng + ?Sized>(params: FieldParams, viewport: Viewport, rng: &mut R) -> Self {
        let mut field = Self {
            params,
            particles: Vec::new(),
            next_id: 0,
            generation: 0,
        };
        field.respawn(viewport, rng);
        field
    }

    /// Build a field around an existing particle set. Ids already present are
    /// never handed out again by later respawns.
    pub fn from_particles(params: FieldParams, particles: Vec<Particle>) -> Self {
        let next_id = particles.iter().map(|p| p.id.0 + 1).max().unwrap_or(0);
        Self {
            params,
            particles,
            next_id,
            generation: 0,
        }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of wholesale respawns since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Throw away every particle and spawn a new set for `viewport`.
    pub fn respawn<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let count = viewport.particle_count(&self.params);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let id = ParticleId(self.next_id);
            self.next_id += 1;
            particles.push(spawn_particle(&self.params, id, viewport, rng));
        }
        self.particles = particles;
        self.generation += 1;
        log::debug!(
            "[field] spawned {} particles for {}x{} (generation {})",
            count,
            viewport.width,
            viewport.height,
            self.generation
        );
    }

    /// Advance every particle by one tick.
    pub fn update(&mut self, pointer: &PointerState, viewport: Viewport) {
        for p in &mut self.particles {
            step_particle(&self.params, p, pointer, viewport);
        }
    }

    /// Reorder farthest-first so nearer glyphs paint on top.
    pub fn sort_by_depth(&mut self) {
        self.particles.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    }

    /// Paint the current frame.
    pub fn draw<S: GlyphSurface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
        surface.clear(viewport.width, viewport.height);
        self.sort_by_depth();

        let params = &self.params;
        for p in &self.particles {
            let style = glyph_style(params, p.depth, p.base_opacity);
            surface.set_glow(params.glow_rgb, style.glow_blur);
            surface.set_font_size(style.size);
            surface.set_fill(params.fill_rgb, style.alpha);
            surface.draw_glyph(p.symbol, p.position.x, p.position.y);
        }
        surface.set_glow(params.glow_rgb, 0.0);
    }
}

fn spawn_particle<R: Rng + ?Sized>(
    params: &FieldParams,
    id: ParticleId,
    viewport: Viewport,
    rng: &mut R,
) -> Particle {
    let depth_span = params.depth_far - params.depth_near;
    let position = Vec2::new(
        rng.gen::<f32>() * viewport.width,
        rng.gen::<f32>() * viewport.height,
    );
    let depth = rng.gen::<f32>() * depth_span + params.depth_near;
    let velocity = Vec3::new(
        (rng.gen::<f32>() - 0.5) * 2.0 * params.drift_xy,
        (rng.gen::<f32>() - 0.5) * 2.0 * params.drift_xy,
        (rng.gen::<f32>() - 0.5) * 2.0 * params.drift_z,
    );
    let symbol = *params.alphabet.choose(rng).unwrap_or(&'*');
    let base_opacity = rng.gen::<f32>() * params.opacity_span + params.opacity_min;
    Particle {
        id,
        position,
        depth,
        velocity,
        symbol,
        base_opacity,
    }
}

/// One tick for a single particle: parallax drift, pointer force, then wrap.
pub fn step_particle(
    params: &FieldParams,
    p: &mut Particle,
    pointer: &PointerState,
    viewport: Viewport,
) {
    let speed = params.parallax(p.depth);
    p.position += p.velocity.truncate() * speed;
    p.depth += p.velocity.z;

    if let Some(target) = pointer.position {
        p.position += pointer_push(params, p.position, target, pointer.pressed, speed);
    }

    wrap(params, p, viewport);
}

/// Displacement the pointer applies this tick. Inside the interaction radius the
/// force falls off linearly from 1 at the pointer to 0 at the edge. Pressed
/// pushes away, released pulls in. Within `min_force_distance` there is no
/// usable direction, so nothing moves.
pub fn pointer_push(
    params: &FieldParams,
    position: Vec2,
    pointer: Vec2,
    pressed: bool,
    speed: f32,
) -> Vec2 {
    let offset = position - pointer;
    let distance = offset.length();
    if distance >= params.interaction_radius || distance <= params.min_force_distance {
        return Vec2::ZERO;
    }
    let force = (params.interaction_radius - distance) / params.interaction_radius;
    let direction = offset / distance;
    if pressed {
        direction * force * params.repulsion_strength * speed
    } else {
        -direction * force * params.attraction_strength * speed
    }
}

fn wrap(params: &FieldParams, p: &mut Particle, viewport: Viewport) {
    let m = params.wrap_margin;
    if p.position.x > viewport.width + m {
        p.position.x = -m;
    }
    if p.position.x < -m {
        p.position.x = viewport.width + m;
    }
    if p.position.y > viewport.height + m {
        p.position.y = -m;
    }
    if p.position.y < -m {
        p.position.y = viewport.height + m;
    }
    if p.depth > params.depth_far {
        p.depth = params.depth_near;
    }
    if p.depth < params.depth_near {
        p.depth = params.depth_far;
    }
}
