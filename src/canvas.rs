//! Drawing surface abstraction.
//!
//! [`ParticleField::advance`](crate::field::ParticleField::advance) emits draw
//! commands against a [`Canvas2d`] instead of talking to a renderer directly.
//! [`DrawList`] is the one implementation the crate ships: it records the
//! frame's circles for the GPU layer, and doubles as a cheap probe in tests.

use glam::Vec2;

use crate::config::Rgba;

/// An immediate-mode 2D surface that accepts one frame of draw commands.
pub trait Canvas2d {
    /// Discard everything drawn so far; called once at the start of each tick.
    fn clear(&mut self);

    /// Draw a filled circle at `center` with the given radius and fill color.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// One recorded circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// A retained list of the current frame's circles.
#[derive(Debug, Default)]
pub struct DrawList {
    circles: Vec<Circle>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

impl Canvas2d for DrawList {
    fn clear(&mut self) {
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_and_clears() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::new(1.0, 2.0), 3.0, Rgba::new(1.0, 1.0, 1.0, 0.2));
        list.fill_circle(Vec2::new(4.0, 5.0), 6.0, Rgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(list.len(), 2);
        assert_eq!(list.circles()[0].center, Vec2::new(1.0, 2.0));

        list.clear();
        assert!(list.is_empty());
    }
}
