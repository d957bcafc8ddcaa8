//! Field configuration and color palettes.
//!
//! A [`FieldConfig`] is fixed at construction and injected into the
//! [`ParticleField`](crate::field::ParticleField); the particle count is the
//! only derived quantity, recomputed from the canvas area on every reseed.

/// An RGBA color with straight (non-premultiplied) alpha, channels in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 8-bit channels plus a float alpha, CSS `rgba()` style.
    pub fn from_u8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// An ordered, non-empty list of particle colors.
///
/// Spawning picks uniformly from the list. Constructing a palette from an
/// empty list silently falls back to [`Palette::default`], in keeping with
/// the crate's degrade-never-crash philosophy.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false // invariant: never empty
    }
}

impl Default for Palette {
    /// The two translucent brand colors of the original backdrop: warm amber
    /// and teal, both at 0.2 alpha.
    fn default() -> Self {
        Self {
            colors: vec![
                Rgba::from_u8(233, 159, 71, 0.2),
                Rgba::from_u8(0, 168, 150, 0.2),
            ],
        }
    }
}

/// Tuning constants for a particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Pixel area covered by a single particle; the particle count is
    /// `floor(width * height / density_divisor)`.
    pub density_divisor: f32,
    /// Colors particles are drawn in.
    pub palette: Palette,
    /// Distance from the pointer below which particles are pushed away.
    pub avoidance_radius: f32,
    /// Full width of the symmetric per-axis velocity range, in pixels/frame.
    pub speed: f32,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_density_divisor(mut self, divisor: f32) -> Self {
        self.density_divisor = divisor;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_avoidance_radius(mut self, radius: f32) -> Self {
        self.avoidance_radius = radius;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Particle count for the given canvas dimensions.
    ///
    /// A zero or degenerate area yields zero particles rather than an error.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        let area = width * height;
        if !(area > 0.0) || !(self.density_divisor > 0.0) {
            return 0;
        }
        (area / self.density_divisor).floor() as usize
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_divisor: 9000.0,
            palette: Palette::default(),
            avoidance_radius: 150.0,
            speed: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_matches_area() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(1920.0, 1080.0), 230); // floor(2073600 / 9000)
        assert_eq!(config.particle_count(300.0, 30.0), 1);
    }

    #[test]
    fn test_zero_area_yields_zero_particles() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(0.0, 1080.0), 0);
        assert_eq!(config.particle_count(1920.0, 0.0), 0);
        assert_eq!(config.particle_count(f32::NAN, 1080.0), 0);
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let palette = Palette::new(Vec::new());
        assert_eq!(palette, Palette::default());
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_palette_keeps_order() {
        let colors = vec![
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
        ];
        let palette = Palette::new(colors.clone());
        assert_eq!(palette.colors(), colors.as_slice());
    }

    #[test]
    fn test_rgba_from_u8() {
        let c = Rgba::from_u8(255, 0, 51, 0.2);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 0.01);
        assert_eq!(c.a, 0.2);
    }
}
