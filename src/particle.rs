//! The particle record and its per-frame update rule.
//!
//! A particle is a plain data record; all behavior lives in [`Particle::update`],
//! which applies boundary reflection, pointer avoidance, and velocity
//! integration for one frame. Particles never interact with each other, so
//! update order across the field does not matter.

use glam::Vec2;

use crate::config::Rgba;

/// Fixed push applied along each qualifying axis while the pointer is close.
/// No falloff by distance: full step or nothing.
pub const AVOID_STEP: f32 = 5.0;

/// Multiple of the particle radius kept clear of the far boundary before a
/// push is allowed. Carried over from the source effect as a literal.
pub const EDGE_MARGIN_FACTOR: f32 = 10.0;

/// A single animated point with position, velocity, size, and color.
///
/// Positions are in canvas pixel space, velocities in pixels/frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub direction_x: f32,
    pub direction_y: f32,
    pub size: f32,
    pub color: Rgba,
}

impl Particle {
    /// Advance this particle by one frame.
    ///
    /// Steps, in order:
    /// 1. Boundary reflection: a hard velocity sign flip when the position is
    ///    outside `[0, width]` or `[0, height]`. Not a clamp, so the particle
    ///    may sit outside the bounds for a single frame.
    /// 2. Pointer avoidance: within `avoidance_radius + size` of the pointer,
    ///    nudge [`AVOID_STEP`] pixels away along each axis independently,
    ///    unless that axis is already within `size * EDGE_MARGIN_FACTOR` of
    ///    the far boundary. Skipped entirely when `pointer` is `None`.
    /// 3. Integration: position += velocity, additive with the nudge.
    ///
    /// A non-finite pointer makes the distance NaN; the threshold comparison
    /// is then false and avoidance is silently skipped. Keep that fallback.
    pub fn update(&mut self, width: f32, height: f32, pointer: Option<Vec2>, avoidance_radius: f32) {
        if self.x > width || self.x < 0.0 {
            self.direction_x = -self.direction_x;
        }
        if self.y > height || self.y < 0.0 {
            self.direction_y = -self.direction_y;
        }

        if let Some(p) = pointer {
            let dx = p.x - self.x;
            let dy = p.y - self.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < avoidance_radius + self.size {
                let margin = self.size * EDGE_MARGIN_FACTOR;
                if p.x < self.x && self.x < width - margin {
                    self.x += AVOID_STEP;
                }
                if p.x > self.x && self.x > margin {
                    self.x -= AVOID_STEP;
                }
                if p.y < self.y && self.y < height - margin {
                    self.y += AVOID_STEP;
                }
                if p.y > self.y && self.y > margin {
                    self.y -= AVOID_STEP;
                }
            }
        }

        self.x += self.direction_x;
        self.y += self.direction_y;
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;
    const RADIUS: f32 = 150.0;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            direction_x: 0.2,
            direction_y: -0.1,
            size: 3.0,
            color: Rgba::new(1.0, 1.0, 1.0, 0.2),
        }
    }

    #[test]
    fn test_reflection_right_edge() {
        let mut p = particle_at(W + 1.0, 300.0);
        p.update(W, H, None, RADIUS);
        assert_eq!(p.direction_x, -0.2);
        // Integration still happens the same frame, with the flipped sign.
        assert_eq!(p.x, W + 1.0 - 0.2);
    }

    #[test]
    fn test_reflection_left_edge() {
        let mut p = particle_at(-0.5, 300.0);
        p.direction_x = -0.3;
        p.update(W, H, None, RADIUS);
        assert_eq!(p.direction_x, 0.3);
    }

    #[test]
    fn test_reflection_vertical_edges() {
        let mut p = particle_at(400.0, H + 2.0);
        p.direction_y = 0.4;
        p.update(W, H, None, RADIUS);
        assert_eq!(p.direction_y, -0.4);

        let mut p = particle_at(400.0, -1.0);
        p.direction_y = -0.4;
        p.update(W, H, None, RADIUS);
        assert_eq!(p.direction_y, 0.4);
    }

    #[test]
    fn test_inside_bounds_keeps_velocity() {
        let mut p = particle_at(400.0, 300.0);
        p.update(W, H, None, RADIUS);
        assert_eq!(p.direction_x, 0.2);
        assert_eq!(p.direction_y, -0.1);
    }

    #[test]
    fn test_no_pointer_is_pure_integration() {
        let mut p = particle_at(400.0, 300.0);
        p.update(W, H, None, RADIUS);
        assert_eq!(p.x, 400.2);
        assert_eq!(p.y, 299.9);
    }

    #[test]
    fn test_avoidance_pushes_five_units_per_axis() {
        // Pointer up-left of the particle, particle well away from all edges.
        let mut p = particle_at(400.0, 300.0);
        p.update(W, H, Some(Vec2::new(390.0, 290.0)), RADIUS);
        // +5 on each axis away from the pointer, plus velocity integration.
        assert_eq!(p.x, 400.0 + AVOID_STEP + 0.2);
        assert_eq!(p.y, 300.0 + AVOID_STEP - 0.1);
    }

    #[test]
    fn test_avoidance_direction_follows_pointer_side() {
        let mut p = particle_at(400.0, 300.0);
        p.update(W, H, Some(Vec2::new(410.0, 310.0)), RADIUS);
        assert_eq!(p.x, 400.0 - AVOID_STEP + 0.2);
        assert_eq!(p.y, 300.0 - AVOID_STEP - 0.1);
    }

    #[test]
    fn test_avoidance_outside_radius_is_noop() {
        let mut p = particle_at(400.0, 300.0);
        p.update(W, H, Some(Vec2::new(400.0 + RADIUS + p.size + 1.0, 300.0)), RADIUS);
        assert_eq!(p.x, 400.2);
        assert_eq!(p.y, 299.9);
    }

    #[test]
    fn test_avoidance_suppressed_near_far_edge() {
        // Pushing right would eject the particle: x is inside the
        // size * EDGE_MARGIN_FACTOR margin from the right boundary.
        let mut p = particle_at(W - 10.0, 300.0);
        p.update(W, H, Some(Vec2::new(W - 15.0, 300.0)), RADIUS);
        assert_eq!(p.x, W - 10.0 + 0.2); // no push, only integration
    }

    #[test]
    fn test_nan_pointer_skips_avoidance() {
        let mut p = particle_at(400.0, 300.0);
        p.update(W, H, Some(Vec2::new(f32::NAN, 300.0)), RADIUS);
        assert_eq!(p.x, 400.2);
        assert_eq!(p.y, 299.9);
    }
}
