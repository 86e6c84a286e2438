use glam::Vec2;

/// Last known pointer position in surface pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    #[inline]
    pub fn leave(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.active.then(|| Vec2::new(self.x, self.y))
    }
}

/// Pointer position relative to a box, as fractions of its size.
///
/// A degenerate box maps everything to its center.
#[inline]
pub fn normalized_in_box(client: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    if size.x > 0.0 && size.y > 0.0 {
        (client - origin) / size
    } else {
        Vec2::splat(0.5)
    }
}
