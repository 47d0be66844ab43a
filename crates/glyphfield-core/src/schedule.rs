//! Start/stop controlled frame loop around a [`Simulation`].
//!
//! The host owns the real frame clock. It implements [`FrameScheduler`] and
//! calls [`RenderLoop::tick`] whenever a requested frame fires; tests drive the
//! same loop by hand.

use crate::field::ParticleField;
use crate::params::FieldParams;
use crate::pointer::PointerState;
use crate::surface::GlyphSurface;
use crate::viewport::Viewport;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Host frame clock: request one callback, or cancel a pending one.
pub trait FrameScheduler {
    type Handle: Copy;

    /// `None` when the host refused to schedule a frame.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Everything one tick reads or mutates.
pub struct Simulation {
    pub field: ParticleField,
    pub pointer: PointerState,
    pub viewport: Viewport,
    rng: StdRng,
}

impl Simulation {
    pub fn new(params: FieldParams, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(params, viewport, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: FieldParams, viewport: Viewport, mut rng: StdRng) -> Self {
        let field = ParticleField::new(params, viewport, &mut rng);
        Self {
            field,
            pointer: PointerState::default(),
            viewport,
            rng,
        }
    }

    /// Update then paint one frame.
    pub fn step<S: GlyphSurface + ?Sized>(&mut self, surface: &mut S) {
        self.field.update(&self.pointer, self.viewport);
        self.field.draw(self.viewport, surface);
    }

    /// Adopt a new viewport and recreate the particle set for it.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.field.respawn(viewport, &mut self.rng);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct RenderLoop<F: FrameScheduler> {
    sim: Simulation,
    scheduler: F,
    pending: Option<F::Handle>,
    disabled_by_size: bool,
    torn_down: bool,
    frames_drawn: u64,
}

impl<F: FrameScheduler> RenderLoop<F> {
    pub fn new(sim: Simulation, scheduler: F) -> Self {
        Self {
            sim,
            scheduler,
            pending: None,
            disabled_by_size: false,
            torn_down: false,
            frames_drawn: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn state(&self) -> LoopState {
        if self.pending.is_some() {
            LoopState::Running
        } else {
            LoopState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Begin scheduling frames. Returns whether the loop is running afterwards.
    pub fn start(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        if self.sim.viewport.is_disabled(self.sim.field.params()) {
            self.disabled_by_size = true;
            log::info!(
                "[loop] not starting: viewport width {} is in the mobile class",
                self.sim.viewport.width
            );
            return false;
        }
        self.disabled_by_size = false;
        if self.pending.is_none() {
            self.request_next();
            if self.pending.is_some() {
                log::info!("[loop] started");
            }
        }
        self.is_running()
    }

    /// Cancel the pending frame, if any. A frame already in progress is never
    /// interrupted; only the next one is prevented. A later resize does not
    /// restart a loop stopped this way.
    pub fn stop(&mut self) {
        self.disabled_by_size = false;
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            log::info!("[loop] stopped after {} frames", self.frames_drawn);
        }
    }

    /// Stop for good; nothing restarts the loop afterwards.
    pub fn teardown(&mut self) {
        self.stop();
        self.torn_down = true;
        log::info!("[loop] torn down");
    }

    /// The requested frame fired. Returns `false` if the loop was stopped in
    /// the meantime and nothing was drawn.
    pub fn tick<S: GlyphSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.sim.step(surface);
        self.frames_drawn += 1;
        self.request_next();
        true
    }

    /// React to a viewport change. Entering the mobile class stops the loop;
    /// any other size rebuilds the particle set and resumes a loop that was
    /// stopped only because of its size.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.torn_down {
            self.sim.viewport = viewport;
            return;
        }
        if viewport.is_disabled(self.sim.field.params()) {
            self.sim.viewport = viewport;
            // a loop that was not running stays stopped after widening
            if self.is_running() {
                log::info!("[loop] disabled at width {}", viewport.width);
                self.disabled_by_size = true;
            }
            self.cancel_pending();
            return;
        }

        self.sim.resize(viewport);
        if self.disabled_by_size {
            log::info!("[loop] re-enabled at width {}", viewport.width);
            self.start();
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.sim.pointer.move_to(x, y);
    }

    pub fn pointer_pressed(&mut self) {
        self.sim.pointer.press();
    }

    pub fn pointer_released(&mut self) {
        self.sim.pointer.release();
    }

    fn request_next(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] host refused to schedule a frame; loop stopped");
        }
    }
}
