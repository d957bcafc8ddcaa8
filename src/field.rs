//! The particle field: owned particle state plus the per-frame step.
//!
//! A [`ParticleField`] starts empty (UNINITIALIZED) and becomes ACTIVE on the
//! first [`init`](ParticleField::init). From then on it only self-loops:
//! [`advance`](ParticleField::advance) once per tick, [`resize`](ParticleField::resize)
//! on dimension changes. There is no terminal state; the field lives as long
//! as its host surface does.

use glam::Vec2;
use tracing::debug;

use crate::canvas::Canvas2d;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::spawn::SpawnContext;

/// Spawn positions keep this many radii clear of each canvas edge, so a fresh
/// particle lies fully inside the bounds.
const SPAWN_MARGIN_FACTOR: f32 = 2.0;

/// Last-known pointer position in canvas pixel space.
///
/// Written only by the pointer-move event handler and read by every particle
/// during [`ParticleField::advance`]. Both run on the same logical thread of
/// control (the host event loop), so no locking is needed; last write wins. A
/// reimplementation that moves input handling off that thread must replace
/// this with a lock or an atomic snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub position: Option<Vec2>,
}

impl Pointer {
    pub fn set(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }
}

/// A field of particles reacting to canvas bounds and pointer proximity.
#[derive(Debug)]
pub struct ParticleField {
    width: f32,
    height: f32,
    config: FieldConfig,
    pointer: Pointer,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create an uninitialized field; call [`init`](Self::init) before advancing.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            config,
            pointer: Pointer::default(),
            particles: Vec::new(),
        }
    }

    /// Seed (or reseed) the field for the given canvas dimensions.
    ///
    /// Any existing particles are discarded. `floor(width * height / density)`
    /// fresh particles are created with radius in [1, 6), a position that
    /// keeps the whole circle inside the canvas, velocity components in
    /// (-speed/2, +speed/2), and a color picked uniformly from the palette.
    /// A zero-area canvas degenerates to an empty field.
    pub fn init(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles.clear();

        let count = self.config.particle_count(width, height);
        self.particles.reserve(count);
        let half_speed = self.config.speed / 2.0;

        for index in 0..count {
            let mut ctx = SpawnContext::new(index, count);
            let size = ctx.random_range(1.0, 6.0);
            let margin = size * SPAWN_MARGIN_FACTOR;
            let x = if width > margin * 2.0 {
                ctx.random_range(margin, width - margin)
            } else {
                width / 2.0
            };
            let y = if height > margin * 2.0 {
                ctx.random_range(margin, height - margin)
            } else {
                height / 2.0
            };
            let color = ctx.pick_color(self.config.palette.colors());

            self.particles.push(Particle {
                x,
                y,
                direction_x: ctx.random_range(-half_speed, half_speed),
                direction_y: ctx.random_range(-half_speed, half_speed),
                size,
                color,
            });
        }

        debug!(count, width, height, "reseeded particle field");
    }

    /// Update stored dimensions and reseed. No particle survives a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.init(width, height);
    }

    /// Drop all particles without touching dimensions or pointer state.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Record the latest pointer position, in canvas pixel space.
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer.set(position);
    }

    /// Forget the pointer; avoidance becomes a no-op until the next move.
    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.position
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

    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance every particle by one tick and emit the frame's draw commands.
    ///
    /// Per particle, in array order (order is irrelevant for correctness since
    /// particles do not interact): boundary reflection, pointer avoidance,
    /// velocity integration, then a filled circle into `canvas`. The canvas is
    /// cleared first.
    pub fn advance<C: Canvas2d>(&mut self, canvas: &mut C) {
        canvas.clear();
        let pointer = self.pointer.position;
        for particle in &mut self.particles {
            particle.update(self.width, self.height, pointer, self.config.avoidance_radius);
            canvas.fill_circle(particle.position(), particle.size, particle.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use crate::particle::AVOID_STEP;

    const W: f32 = 1280.0;
    const H: f32 = 720.0;

    fn active_field() -> ParticleField {
        let mut field = ParticleField::new(FieldConfig::default());
        field.init(W, H);
        field
    }

    #[test]
    fn test_init_count_matches_area_rule() {
        let field = active_field();
        assert_eq!(field.len(), (W * H / 9000.0).floor() as usize);
    }

    #[test]
    fn test_init_positions_and_sizes_in_range() {
        let field = active_field();
        for p in field.particles() {
            assert!((0.0..=W).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((0.0..=H).contains(&p.y), "y out of bounds: {}", p.y);
            assert!((1.0..6.0).contains(&p.size), "size out of range: {}", p.size);
        }
    }

    #[test]
    fn test_init_velocities_within_speed_range() {
        let field = active_field();
        for p in field.particles() {
            assert!(p.direction_x.abs() <= 0.2);
            assert!(p.direction_y.abs() <= 0.2);
        }
    }

    #[test]
    fn test_init_colors_come_from_palette() {
        let field = active_field();
        let palette = FieldConfig::default().palette;
        for p in field.particles() {
            assert!(palette.colors().contains(&p.color));
        }
    }

    #[test]
    fn test_zero_area_degenerates_to_empty() {
        let mut field = ParticleField::new(FieldConfig::default());
        field.init(0.0, H);
        assert!(field.is_empty());
    }

    #[test]
    fn test_resize_recomputes_count_and_discards_particles() {
        let mut field = active_field();
        let before: Vec<_> = field.particles().to_vec();

        field.resize(300.0, 300.0);
        assert_eq!(field.len(), (300.0 * 300.0 / 9000.0) as usize);
        assert_eq!(field.dimensions(), (300.0, 300.0));
        // Wholesale reseed: old instances are gone, all positions fit the
        // new, smaller canvas.
        assert_ne!(field.len(), before.len());
        for p in field.particles() {
            assert!(p.x <= 300.0 && p.y <= 300.0);
        }
    }

    #[test]
    fn test_advance_without_pointer_is_velocity_integration() {
        let mut field = active_field();
        let before: Vec<_> = field.particles().to_vec();
        let mut frame = DrawList::new();

        field.advance(&mut frame);

        for (old, new) in before.iter().zip(field.particles()) {
            // Freshly seeded particles are strictly inside bounds, so no
            // reflection fires on the first tick.
            assert_eq!(new.x, old.x + old.direction_x);
            assert_eq!(new.y, old.y + old.direction_y);
            assert_eq!(new.direction_x, old.direction_x);
            assert_eq!(new.direction_y, old.direction_y);
        }
    }

    #[test]
    fn test_repeated_advance_accumulates_no_hidden_state() {
        let mut field = active_field();
        let before: Vec<_> = field.particles().to_vec();
        let mut frame = DrawList::new();

        // Few enough ticks that nothing reaches a boundary.
        for _ in 0..3 {
            field.advance(&mut frame);
        }

        for (old, new) in before.iter().zip(field.particles()) {
            assert!((new.x - (old.x + 3.0 * old.direction_x)).abs() < 1e-3);
            assert!((new.y - (old.y + 3.0 * old.direction_y)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_advance_emits_one_circle_per_particle() {
        let mut field = active_field();
        let mut frame = DrawList::new();

        field.advance(&mut frame);
        assert_eq!(frame.len(), field.len());

        // The list is cleared each tick, not appended to.
        field.advance(&mut frame);
        assert_eq!(frame.len(), field.len());

        let circle = frame.circles()[0];
        let particle = &field.particles()[0];
        assert_eq!(circle.center, particle.position());
        assert_eq!(circle.radius, particle.size);
        assert_eq!(circle.color, particle.color);
    }

    #[test]
    fn test_pointer_write_visible_to_next_advance() {
        let mut field = active_field();
        field.particles.clear();
        field.particles.push(Particle {
            x: 400.0,
            y: 300.0,
            direction_x: 0.0,
            direction_y: 0.0,
            size: 3.0,
            color: FieldConfig::default().palette.colors()[0],
        });

        field.set_pointer(Vec2::new(390.0, 300.0));
        let mut frame = DrawList::new();
        field.advance(&mut frame);

        // Pointer left of the particle pushes it right by the fixed step.
        assert_eq!(field.particles()[0].x, 400.0 + AVOID_STEP);
        assert_eq!(field.particles()[0].y, 300.0);
    }

    #[test]
    fn test_clear_pointer_disables_avoidance() {
        let mut field = active_field();
        field.particles.clear();
        field.particles.push(Particle {
            x: 400.0,
            y: 300.0,
            direction_x: 0.1,
            direction_y: 0.0,
            size: 3.0,
            color: FieldConfig::default().palette.colors()[0],
        });

        field.set_pointer(Vec2::new(390.0, 300.0));
        field.clear_pointer();
        assert_eq!(field.pointer(), None);

        let mut frame = DrawList::new();
        field.advance(&mut frame);
        assert_eq!(field.particles()[0].x, 400.1);
    }
}
