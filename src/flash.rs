//! Randomized flash scheduling.
//!
//! Every tick the scheduler accumulates elapsed time; when the accumulator
//! crosses the current interval it makes one scheduling decision: ignite a
//! small random number of currently idle particles, each picked at most
//! once, then redraw the interval from `[0, 1)` seconds. The decision is
//! independent of the connection phase and of any particle's motion.

use crate::particle::Particle;
use crate::random::RandomSource;

/// Most particles a single scheduling decision can ignite.
pub const MAX_FLASHES_PER_EVENT: usize = 3;

/// Decides when and which particles start flashing.
#[derive(Debug)]
pub struct FlashScheduler {
    timer: f32,
    interval: f32,
}

impl FlashScheduler {
    /// The first interval is drawn immediately so the scheduler never waits
    /// on an uninitialized threshold.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        Self {
            timer: 0.0,
            interval: rng.uniform(),
        }
    }

    /// Accumulate `dt` seconds and, if the interval elapsed, run one
    /// scheduling decision. Returns how many particles were ignited.
    pub fn tick(
        &mut self,
        dt: f32,
        particles: &mut [Particle],
        rng: &mut dyn RandomSource,
    ) -> usize {
        self.timer += dt;
        if self.timer <= self.interval {
            return 0;
        }
        self.timer = 0.0;
        self.interval = rng.uniform();

        // Selection without replacement over the idle particles only.
        let mut candidates: Vec<usize> = particles
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_flashing)
            .map(|(i, _)| i)
            .collect();

        let flash_count = (rng.uniform() * (MAX_FLASHES_PER_EVENT + 1) as f32) as usize;
        let ignited = flash_count.min(candidates.len());
        for _ in 0..ignited {
            let pick = rng.index(candidates.len());
            let index = candidates.swap_remove(pick);
            particles[index].ignite();
        }
        ignited
    }

    /// Seconds accumulated toward the current interval.
    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Current interval threshold in seconds.
    #[inline]
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ParticleField;
    use crate::random::{EntropySource, ScriptedSource};

    fn field() -> ParticleField {
        let mut rng = EntropySource::seeded(99);
        ParticleField::new(250.0, 400.0, &mut rng)
    }

    #[test]
    fn test_no_decision_before_interval_elapses() {
        let mut rng = ScriptedSource::new([0.5]);
        let mut scheduler = FlashScheduler::new(&mut rng);
        let mut field = field();
        assert_eq!(scheduler.tick(0.1, field.particles_mut(), &mut rng), 0);
        assert!(field.particles().iter().all(|p| !p.is_flashing));
        assert!(scheduler.timer() > 0.0);
    }

    #[test]
    fn test_decision_resets_timer_and_redraws_interval() {
        // interval 0.2, then next interval 0.7, flash count draw 0.0 -> 0.
        let mut rng = ScriptedSource::new([0.2, 0.7, 0.0]);
        let mut scheduler = FlashScheduler::new(&mut rng);
        scheduler.tick(0.3, field().particles_mut(), &mut rng);
        assert_eq!(scheduler.timer(), 0.0);
        assert!((scheduler.interval() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_flash_count_bounded_and_exact() {
        // interval 0.0; next interval 0.9; count draw 0.99 -> floor(3.96) = 3;
        // then three index picks.
        let mut rng = ScriptedSource::new([0.0, 0.9, 0.99, 0.0, 0.0, 0.0]);
        let mut scheduler = FlashScheduler::new(&mut rng);
        let mut field = field();
        let ignited = scheduler.tick(0.1, field.particles_mut(), &mut rng);
        assert_eq!(ignited, 3);
        let flashing = field.particles().iter().filter(|p| p.is_flashing).count();
        assert_eq!(flashing, 3);
    }

    #[test]
    fn test_zero_count_decision_ignites_nothing() {
        let mut rng = ScriptedSource::new([0.0, 0.5, 0.1]);
        let mut scheduler = FlashScheduler::new(&mut rng);
        let mut field = field();
        assert_eq!(scheduler.tick(0.1, field.particles_mut(), &mut rng), 0);
        assert!(field.particles().iter().all(|p| !p.is_flashing));
    }

    #[test]
    fn test_selection_without_replacement() {
        // Always pick index 0 of the remaining candidates; with swap-removal
        // that still has to land on three distinct particles.
        let mut rng = ScriptedSource::new([0.0, 0.5, 0.99, 0.0]);
        let mut scheduler = FlashScheduler::new(&mut rng);
        let mut field = field();
        let ignited = scheduler.tick(0.1, field.particles_mut(), &mut rng);
        assert_eq!(ignited, 3);
        assert_eq!(
            field.particles().iter().filter(|p| p.is_flashing).count(),
            ignited
        );
    }

    #[test]
    fn test_already_flashing_never_reselected() {
        let mut field = field();
        let total = field.len();
        // Leave two idle particles.
        for p in field.particles_mut().iter_mut().take(total - 2) {
            p.ignite();
        }
        // count draw 0.99 asks for 3 but only 2 candidates remain.
        let mut rng = ScriptedSource::new([0.0, 0.5, 0.99, 0.0]);
        let mut scheduler = FlashScheduler::new(&mut rng);
        let ignited = scheduler.tick(0.1, field.particles_mut(), &mut rng);
        assert_eq!(ignited, 2);
        assert!(field.particles().iter().all(|p| p.is_flashing));
    }

    #[test]
    fn test_many_decisions_stay_in_range() {
        let mut rng = EntropySource::seeded(5);
        let mut scheduler = FlashScheduler::new(&mut rng);
        let mut field = field();
        for _ in 0..500 {
            let before = field.particles().iter().filter(|p| p.is_flashing).count();
            let ignited = scheduler.tick(0.2, field.particles_mut(), &mut rng);
            assert!(ignited <= MAX_FLASHES_PER_EVENT);
            let after = field.particles().iter().filter(|p| p.is_flashing).count();
            assert_eq!(after, before + ignited);
            // Let flashes run down a little between decisions.
            for p in field.particles_mut() {
                p.advance(0.2, 250.0, 400.0);
            }
        }
    }
}
