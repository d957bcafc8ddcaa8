//! # driftfield
//!
//! Mouse-reactive 2D particle backdrops for hero sections.
//!
//! The simulation is a plain CPU loop: a [`ParticleField`] owns a set of
//! particles that drift at a fixed per-frame velocity, reflect off the canvas
//! edges, and scatter away from the pointer. Each tick emits a list of filled
//! circles through the [`Canvas2d`] trait; the bundled renderer draws them as
//! alpha-blended instanced quads with wgpu.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! fn main() -> Result<(), BackdropError> {
//!     Backdrop::new()
//!         .with_heading("KYNECTED")
//!         .with_taglines(["One call for every solution!"])
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField::init`] seeds `floor(width * height / 9000)` particles for
//! the current canvas area; [`ParticleField::advance`] steps them once per
//! animation frame; [`ParticleField::resize`] reseeds from scratch. All
//! tuning knobs live in [`FieldConfig`].
//!
//! ### Driving it yourself
//!
//! The field has no opinion about windowing. Feed it pointer positions with
//! [`ParticleField::set_pointer`], call `advance` from any frame scheduler,
//! and hand the recorded [`DrawList`] to whatever renders your circles:
//!
//! ```ignore
//! let mut field = ParticleField::new(FieldConfig::default());
//! field.init(1920.0, 1080.0);
//!
//! let mut frame = DrawList::new();
//! loop {
//!     field.advance(&mut frame);
//!     my_renderer.draw(frame.circles());
//! }
//! ```
//!
//! ### Hero text
//!
//! [`Typewriter`] and [`TaglineCycler`] are small timer-driven state machines
//! for the classic hero-section text reveal; the bundled window runs them
//! against the title bar.
//!
//! All access is single-threaded: pointer writes from the event handler are
//! seen by the next `advance` call, last write wins, no locking anywhere.

mod app;
pub mod canvas;
pub mod config;
mod error;
pub mod field;
mod gpu;
pub mod hero;
pub mod particle;
mod spawn;
pub mod time;

pub use app::Backdrop;
pub use canvas::{Canvas2d, Circle, DrawList};
pub use config::{FieldConfig, Palette, Rgba};
pub use error::{BackdropError, GpuError};
pub use field::{ParticleField, Pointer};
pub use glam::Vec2;
pub use hero::{TaglineCycler, Typewriter};
pub use particle::Particle;
pub use spawn::SpawnContext;
pub use time::Time;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::app::Backdrop;
    pub use crate::canvas::{Canvas2d, Circle, DrawList};
    pub use crate::config::{FieldConfig, Palette, Rgba};
    pub use crate::error::{BackdropError, GpuError};
    pub use crate::field::ParticleField;
    pub use crate::hero::{TaglineCycler, Typewriter};
    pub use crate::particle::Particle;
    pub use crate::time::Time;
    pub use glam::Vec2;
}
