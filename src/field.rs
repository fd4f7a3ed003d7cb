//! The particle field: a fixed-size collection of particles.

use crate::particle::Particle;
use crate::random::RandomSource;

/// Number of particles in every field.
pub const PARTICLE_COUNT: usize = 60;

/// Owns exactly [`PARTICLE_COUNT`] particles for the lifetime of one set of
/// bounds. A bounds change rebuilds the whole field; particles are never
/// resized or moved in place across bounds.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Initialize a field for a `width` x `height` surface. Degenerate
    /// bounds still produce a full field; it just renders as nothing.
    pub fn new(width: f32, height: f32, rng: &mut dyn RandomSource) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(width, height, rng))
            .collect();
        Self { particles }
    }

    /// Discard every particle and spawn a fresh set for the new bounds.
    pub fn rebuild(&mut self, width: f32, height: f32, rng: &mut dyn RandomSource) {
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(width, height, rng))
            .collect();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{MAX_RADIUS, MIN_RADIUS};
    use crate::random::EntropySource;

    #[test]
    fn test_fresh_field_has_exact_count() {
        let mut rng = EntropySource::seeded(1);
        let field = ParticleField::new(250.0, 400.0, &mut rng);
        assert_eq!(field.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_fresh_field_radii_within_bounds() {
        let mut rng = EntropySource::seeded(2);
        let field = ParticleField::new(250.0, 400.0, &mut rng);
        for p in field.particles() {
            assert!(p.radius >= MIN_RADIUS && p.radius <= MAX_RADIUS);
        }
    }

    #[test]
    fn test_degenerate_bounds_still_fill_the_field() {
        let mut rng = EntropySource::seeded(3);
        let field = ParticleField::new(0.0, 0.0, &mut rng);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert_eq!(p.position, glam::Vec2::ZERO);
        }
    }

    #[test]
    fn test_rebuild_discards_previous_state() {
        let mut rng = EntropySource::seeded(4);
        let mut field = ParticleField::new(250.0, 400.0, &mut rng);
        for p in field.particles_mut() {
            p.ignite();
        }
        field.rebuild(300.0, 300.0, &mut rng);
        assert_eq!(field.len(), PARTICLE_COUNT);
        assert!(field.particles().iter().all(|p| !p.is_flashing));
    }
}
