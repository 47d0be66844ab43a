// Host-side tests for the render loop, driven by a hand-cranked frame clock.

use glyphfield_core::*;
use std::collections::HashSet;

#[derive(Default)]
struct ManualScheduler {
    next: i32,
    requested: Vec<i32>,
    cancelled: Vec<i32>,
    refuse: bool,
}

impl FrameScheduler for ManualScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.requested.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: i32) {
        self.cancelled.push(handle);
    }
}

#[derive(Default)]
struct CountingSurface {
    clears: usize,
    glyphs: usize,
}

impl GlyphSurface for CountingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }
    fn set_fill(&mut self, _rgb: [u8; 3], _alpha: f32) {}
    fn set_font_size(&mut self, _px: f32) {}
    fn set_glow(&mut self, _rgb: [u8; 3], _blur: f32) {}
    fn draw_glyph(&mut self, _glyph: char, _x: f32, _y: f32) {
        self.glyphs += 1;
    }
}

fn make_loop(width: f32) -> RenderLoop<ManualScheduler> {
    let sim = Simulation::new(FieldParams::default(), Viewport::new(width, 800.0), 42);
    RenderLoop::new(sim, ManualScheduler::default())
}

fn ids(render_loop: &RenderLoop<ManualScheduler>) -> HashSet<ParticleId> {
    render_loop
        .simulation()
        .field
        .particles()
        .iter()
        .map(|p| p.id)
        .collect()
}

#[test]
fn start_requests_one_frame_and_ticks_reschedule() {
    let mut rl = make_loop(1400.0);
    assert_eq!(rl.state(), LoopState::Stopped);
    assert!(rl.start());
    assert!(rl.start(), "second start keeps running without a new request");
    assert_eq!(rl.scheduler().requested, vec![1]);

    let mut surface = CountingSurface::default();
    for _ in 0..3 {
        assert!(rl.tick(&mut surface));
    }
    assert_eq!(rl.frames_drawn(), 3);
    assert_eq!(surface.clears, 3);
    assert_eq!(surface.glyphs, 3 * 150);
    assert_eq!(rl.scheduler().requested, vec![1, 2, 3, 4]);
    assert!(rl.is_running());
}

#[test]
fn start_refuses_mobile_viewport() {
    let mut rl = make_loop(767.0);
    assert!(!rl.start());
    assert!(rl.scheduler().requested.is_empty());
    let mut surface = CountingSurface::default();
    assert!(!rl.tick(&mut surface));
    assert_eq!(surface.clears, 0);
}

#[test]
fn stop_cancels_pending_frame_and_blocks_drawing() {
    let mut rl = make_loop(1400.0);
    rl.start();
    rl.stop();
    assert_eq!(rl.scheduler().cancelled, vec![1]);
    assert_eq!(rl.state(), LoopState::Stopped);

    let mut surface = CountingSurface::default();
    assert!(!rl.tick(&mut surface));
    assert_eq!(surface.glyphs, 0);
    assert_eq!(rl.frames_drawn(), 0);
}

#[test]
fn crossing_into_mobile_width_stops_until_widened_again() {
    let mut rl = make_loop(1400.0);
    let mut surface = CountingSurface::default();
    rl.start();
    rl.tick(&mut surface);

    rl.resize(Viewport::new(700.0, 800.0));
    assert!(!rl.is_running());
    assert_eq!(rl.scheduler().cancelled, vec![2]);

    let drawn = surface.glyphs;
    for _ in 0..5 {
        assert!(!rl.tick(&mut surface));
    }
    assert_eq!(surface.glyphs, drawn);

    rl.resize(Viewport::new(1000.0, 800.0));
    assert!(rl.is_running());
    assert_eq!(rl.simulation().field.len(), 100);
    assert!(rl.tick(&mut surface));
}

#[test]
fn resize_across_tier_respawns_a_fresh_set() {
    let mut rl = make_loop(1400.0);
    rl.start();
    assert_eq!(rl.simulation().field.len(), 150);
    let before = ids(&rl);

    rl.resize(Viewport::new(1100.0, 700.0));
    assert_eq!(rl.simulation().field.len(), 100);
    assert!(ids(&rl).is_disjoint(&before));
    assert_eq!(rl.simulation().viewport, Viewport::new(1100.0, 700.0));
    // an ordinary resize does not touch the schedule
    assert!(rl.is_running());
    assert!(rl.scheduler().cancelled.is_empty());
}

#[test]
fn stopped_loop_stays_stopped_across_mobile_round_trip() {
    let mut rl = make_loop(1400.0);
    rl.start();
    rl.stop();
    rl.resize(Viewport::new(700.0, 800.0));
    rl.resize(Viewport::new(1400.0, 800.0));
    assert!(!rl.is_running());
    assert_eq!(rl.scheduler().requested, vec![1]);
}

#[test]
fn never_started_loop_stays_stopped_across_mobile_round_trip() {
    let mut rl = make_loop(1400.0);
    rl.resize(Viewport::new(700.0, 800.0));
    rl.resize(Viewport::new(1400.0, 800.0));
    assert!(!rl.is_running());
    assert!(rl.scheduler().requested.is_empty());
    assert_eq!(rl.simulation().field.len(), 150);
}

#[test]
fn explicit_stop_while_mobile_cancels_the_pending_restart() {
    let mut rl = make_loop(1400.0);
    rl.start();
    rl.resize(Viewport::new(700.0, 800.0));
    rl.stop();
    rl.resize(Viewport::new(1400.0, 800.0));
    assert!(!rl.is_running());
}

#[test]
fn resize_after_teardown_keeps_the_old_particles() {
    let mut rl = make_loop(1400.0);
    rl.start();
    rl.teardown();
    let before = ids(&rl);
    let generation = rl.simulation().field.generation();

    rl.resize(Viewport::new(1000.0, 600.0));
    assert_eq!(ids(&rl), before);
    assert_eq!(rl.simulation().field.generation(), generation);
    assert_eq!(rl.simulation().viewport, Viewport::new(1000.0, 600.0));
}

#[test]
fn teardown_is_final() {
    let mut rl = make_loop(1400.0);
    rl.start();
    rl.teardown();
    assert!(rl.is_torn_down());
    assert!(!rl.is_running());
    assert!(!rl.start());

    rl.resize(Viewport::new(600.0, 800.0));
    rl.resize(Viewport::new(1500.0, 800.0));
    assert!(!rl.is_running());
    assert_eq!(rl.scheduler().requested, vec![1]);
}

#[test]
fn refused_frame_leaves_loop_stopped() {
    let sim = Simulation::new(FieldParams::default(), Viewport::new(1400.0, 800.0), 1);
    let mut rl = RenderLoop::new(
        sim,
        ManualScheduler {
            refuse: true,
            ..ManualScheduler::default()
        },
    );
    assert!(!rl.start());
    assert_eq!(rl.state(), LoopState::Stopped);
}

#[test]
fn pointer_events_reach_the_simulation() {
    let mut rl = make_loop(1400.0);
    assert_eq!(rl.simulation().pointer.position, None);
    rl.pointer_moved(10.0, 20.0);
    rl.pointer_pressed();
    let pointer = rl.simulation().pointer;
    assert_eq!(pointer.position, Some(glam::Vec2::new(10.0, 20.0)));
    assert!(pointer.pressed);
    rl.pointer_released();
    assert!(!rl.simulation().pointer.pressed);
}

#[test]
fn ticks_keep_particles_inside_wrap_bounds() {
    let mut rl = make_loop(1250.0);
    let mut surface = CountingSurface::default();
    rl.start();
    rl.pointer_moved(600.0, 400.0);
    for _ in 0..500 {
        rl.tick(&mut surface);
    }
    for p in rl.simulation().field.particles() {
        assert!((50.0..=150.0).contains(&p.depth));
        assert!(p.position.x >= -50.0 && p.position.x <= 1300.0);
        assert!(p.position.y >= -50.0 && p.position.y <= 850.0);
    }
}
