//! # scintilla
//!
//! Decorative particle-field visualizations rendered on a CPU pixel surface.
//!
//! A field of 60 drifting particles is drawn onto a fixed-size RGBA surface:
//! each particle pulses on its own phase, nearby particles are joined by
//! connection lines that "breathe" with a shared phase, and a randomized
//! scheduler ignites short flashes on a few idle particles at a time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use scintilla::Visualization;
//!
//! fn main() {
//!     Visualization::new()
//!         .with_size(250, 400)
//!         .with_title("score card")
//!         .run();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Engine
//!
//! [`Engine`] owns one visualization instance end to end: the particle
//! field, the flash scheduler, the shared connection phase, and the pixel
//! surface. One [`Engine::tick`] runs the full update-and-redraw cycle.
//! Engines are plain values; independent instances never share state.
//!
//! ### Animation loop
//!
//! [`AnimationLoop`] turns host frame timestamps into elapsed seconds and
//! feeds them to the engine. Its `tick` returns whether the caller should
//! re-arm the next frame; after [`AnimationLoop::stop`] a callback that was
//! already pending performs no draw.
//!
//! ### Headless use
//!
//! The engine has no window dependency. Drive it yourself and read the
//! surface bytes:
//!
//! ```
//! use scintilla::Engine;
//!
//! let mut engine = Engine::new(250, 400);
//! engine.tick(0.016);
//! let rgba = engine.surface().frame();
//! assert_eq!(rgba.len(), 250 * 400 * 4);
//! ```
//!
//! ### Randomness
//!
//! Spawning and flash scheduling draw from an injectable
//! [`random::RandomSource`]; tests script it, production seeds from entropy
//! (or a fixed seed via [`Visualization::with_seed`]).

pub mod clock;
pub mod engine;
pub mod error;
pub mod field;
pub mod flash;
pub mod particle;
pub mod random;
pub mod surface;
pub mod viewer;
pub mod visuals;

pub use engine::{AnimationLoop, Engine, PHASE_INCREMENT};
pub use field::{ParticleField, PARTICLE_COUNT};
pub use flash::{FlashScheduler, MAX_FLASHES_PER_EVENT};
pub use glam::Vec2;
pub use particle::{Particle, CONNECTION_DISTANCE, FLASH_DURATION, MAX_RADIUS, MIN_RADIUS};
pub use surface::PixelSurface;
pub use viewer::{Visualization, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use visuals::Rgba;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use scintilla::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clock::FrameClock;
    pub use crate::engine::{AnimationLoop, Engine};
    pub use crate::field::{ParticleField, PARTICLE_COUNT};
    pub use crate::flash::FlashScheduler;
    pub use crate::particle::Particle;
    pub use crate::random::{EntropySource, RandomSource, ScriptedSource};
    pub use crate::surface::PixelSurface;
    pub use crate::viewer::Visualization;
    pub use crate::visuals::Rgba;
    pub use crate::Vec2;
}
