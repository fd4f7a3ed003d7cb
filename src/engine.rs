//! One tick of the whole simulation.
//!
//! [`Engine`] owns the field, the flash scheduler, the shared connection
//! phase, and the pixel surface, and runs the full update-and-redraw cycle:
//! schedule flashes, advance the phase, clear, advance every particle, draw
//! every particle and its connections.

use crate::clock::FrameClock;
use crate::field::ParticleField;
use crate::flash::FlashScheduler;
use crate::random::{EntropySource, RandomSource};
use crate::surface::PixelSurface;

/// Fixed per-tick increment of the connection phase. Deliberately not
/// scaled by elapsed time: the breathing rate follows frame count.
pub const PHASE_INCREMENT: f32 = 0.005;

/// The simulation core for one visualization instance.
pub struct Engine {
    field: ParticleField,
    scheduler: FlashScheduler,
    surface: PixelSurface,
    rng: Box<dyn RandomSource>,
    connection_phase: f32,
    width: f32,
    height: f32,
    ticks: u64,
}

impl Engine {
    /// Build an engine for a `width` x `height` surface with OS-seeded
    /// randomness.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(width, height, Box::new(EntropySource::new()))
    }

    /// Build an engine with a caller-supplied random source. Tests use this
    /// with a scripted source to pin decisions down exactly.
    pub fn with_rng(width: u32, height: u32, mut rng: Box<dyn RandomSource>) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            field: ParticleField::new(w, h, rng.as_mut()),
            scheduler: FlashScheduler::new(rng.as_mut()),
            surface: PixelSurface::new(width, height),
            rng,
            connection_phase: 0.0,
            width: w,
            height: h,
            ticks: 0,
        }
    }

    /// Run one full tick with `dt` elapsed seconds.
    pub fn tick(&mut self, dt: f32) {
        self.scheduler
            .tick(dt, self.field.particles_mut(), self.rng.as_mut());

        // Frame-count based, never reset, never time-scaled.
        self.connection_phase += PHASE_INCREMENT;

        self.surface.clear();
        for particle in self.field.particles_mut() {
            particle.advance(dt, self.width, self.height);
        }
        let particles = self.field.particles();
        for (i, particle) in particles.iter().enumerate() {
            particle.draw(&mut self.surface, &particles[i + 1..], self.connection_phase);
        }
        self.ticks += 1;
    }

    /// Rebuild the field and surface for new bounds. The connection phase
    /// and scheduler state carry over; no particle survives the resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        self.field.rebuild(self.width, self.height, self.rng.as_mut());
        self.surface = PixelSurface::new(width, height);
    }

    #[inline]
    pub fn connection_phase(&self) -> f32 {
        self.connection_phase
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    /// Ticks run since construction. Resizing does not reset the count.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("particles", &self.field.len())
            .field("connection_phase", &self.connection_phase)
            .field("ticks", &self.ticks)
            .finish()
    }
}

/// Drives an [`Engine`] from host frame timestamps and owns cancellation.
///
/// The host scheduling layer calls [`AnimationLoop::tick`] once per frame
/// callback and re-arms the next callback only while it returns `true`.
/// After [`AnimationLoop::stop`] returns, a callback that was already
/// pending finds the loop cancelled and performs no draw.
#[derive(Debug)]
pub struct AnimationLoop {
    engine: Engine,
    clock: FrameClock,
    cancelled: bool,
}

impl AnimationLoop {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            clock: FrameClock::new(),
            cancelled: false,
        }
    }

    /// Run one tick for the frame at `timestamp_ms`. Returns whether the
    /// caller should schedule another frame.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        if self.cancelled {
            return false;
        }
        let dt = self.clock.tick(timestamp_ms);
        self.engine.tick(dt);
        true
    }

    /// Cancel the loop. Guaranteed: no tick started after this returns.
    pub fn stop(&mut self) {
        self.cancelled = true;
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Rebuild for new bounds and reset frame timing, so the first tick at
    /// the new size does not integrate the time spent resizing.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
        self.clock.reset();
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PARTICLE_COUNT;
    use crate::random::EntropySource;

    fn engine() -> Engine {
        Engine::with_rng(250, 400, Box::new(EntropySource::seeded(7)))
    }

    #[test]
    fn test_phase_advances_per_tick_not_per_second() {
        let mut engine = engine();
        for _ in 0..10 {
            engine.tick(123.0); // wildly wrong dt must not affect the phase
        }
        assert!((engine.connection_phase() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_tick_renders_into_surface() {
        let mut engine = engine();
        engine.tick(0.016);
        assert!(engine.surface().frame().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_resize_rebuilds_field_and_surface() {
        let mut engine = engine();
        engine.tick(0.016);
        engine.resize(120, 90);
        assert_eq!(engine.field().len(), PARTICLE_COUNT);
        assert_eq!(engine.surface().frame().len(), 120 * 90 * 4);
        // Phase carries over.
        assert!(engine.connection_phase() > 0.0);
        for p in engine.field().particles() {
            assert!(p.position.x <= 120.0 + p.radius);
            assert!(p.position.y <= 90.0 + p.radius);
        }
    }

    #[test]
    fn test_degenerate_bounds_tick_without_panic() {
        let mut engine = Engine::with_rng(0, 0, Box::new(EntropySource::seeded(8)));
        for _ in 0..10 {
            engine.tick(0.016);
        }
        assert_eq!(engine.field().len(), PARTICLE_COUNT);
        assert!(engine.surface().frame().is_empty());
    }

    #[test]
    fn test_loop_stop_prevents_pending_tick() {
        let mut animation = AnimationLoop::new(engine());
        assert!(animation.tick(0.0));
        assert!(animation.tick(16.0));
        let ticks_before = animation.engine().ticks();
        animation.stop();
        // A callback that was already queued still fires at the host level;
        // it must not reach the engine.
        assert!(!animation.tick(32.0));
        assert_eq!(animation.engine().ticks(), ticks_before);
    }

    #[test]
    fn test_loop_first_tick_has_zero_delta() {
        let mut animation = AnimationLoop::new(engine());
        animation.tick(5_000.0);
        // One tick happened, but with zero elapsed time.
        assert_eq!(animation.engine().ticks(), 1);
        assert!((animation.engine().connection_phase() - PHASE_INCREMENT).abs() < 1e-6);
    }

    #[test]
    fn test_loop_resize_resets_timing() {
        let mut animation = AnimationLoop::new(engine());
        animation.tick(0.0);
        animation.tick(16.0);
        animation.resize(300, 200);
        assert!(animation.tick(10_000.0));
        assert_eq!(animation.engine().field().len(), PARTICLE_COUNT);
    }
}
