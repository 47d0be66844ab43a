use glam::Vec2;

/// Last observed pointer position and button state.
///
/// Input handlers overwrite it whenever an event arrives; the update step reads
/// whatever is there at tick time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// `None` until the pointer has moved at least once.
    pub position: Option<Vec2>,
    pub pressed: bool,
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    #[inline]
    pub fn press(&mut self) {
        self.pressed = true;
    }

    #[inline]
    pub fn release(&mut self) {
        self.pressed = false;
    }
}
