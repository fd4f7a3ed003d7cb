//! A single animated particle.
//!
//! Each particle owns its position, a fixed radius, a set of drift/pulse
//! parameters that are opaque to the rest of the engine, and its flash
//! state. Advancing is deterministic given prior state and elapsed time;
//! all randomness happens at spawn or in the flash scheduler.

use crate::random::RandomSource;
use crate::surface::PixelSurface;
use crate::visuals::{self, Rgba};
use glam::Vec2;
use std::f32::consts::TAU;

/// Smallest radius a particle can spawn with, in pixels.
pub const MIN_RADIUS: f32 = 1.0;
/// Largest radius a particle can spawn with, in pixels.
pub const MAX_RADIUS: f32 = 3.5;
/// Particles closer than this get a connection line, in pixels.
pub const CONNECTION_DISTANCE: f32 = 70.0;
/// Seconds a flash takes from ignition back to rest.
pub const FLASH_DURATION: f32 = 0.6;

const MIN_DRIFT_SPEED: f32 = 4.0;
const MAX_DRIFT_SPEED: f32 = 14.0;
const MAX_TURN_SPEED: f32 = 0.6;
const MIN_PULSE_SPEED: f32 = 0.8;
const MAX_PULSE_SPEED: f32 = 2.4;

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
    drift_angle: f32,
    drift_speed: f32,
    turn_speed: f32,
    pulse_phase: f32,
    pulse_speed: f32,
    pub is_flashing: bool,
    pub flash_progress: f32,
}

impl Particle {
    /// Spawn a particle at a random position inside `width` x `height` with
    /// randomized radius and motion parameters.
    pub fn spawn(width: f32, height: f32, rng: &mut dyn RandomSource) -> Self {
        Self {
            position: Vec2::new(
                rng.range(0.0, width.max(0.0)),
                rng.range(0.0, height.max(0.0)),
            ),
            radius: rng.range(MIN_RADIUS, MAX_RADIUS),
            drift_angle: rng.range(0.0, TAU),
            drift_speed: rng.range(MIN_DRIFT_SPEED, MAX_DRIFT_SPEED),
            turn_speed: rng.range(-MAX_TURN_SPEED, MAX_TURN_SPEED),
            pulse_phase: rng.range(0.0, TAU),
            pulse_speed: rng.range(MIN_PULSE_SPEED, MAX_PULSE_SPEED),
            is_flashing: false,
            flash_progress: 0.0,
        }
    }

    /// Begin a flash cycle. Called by the scheduler, never by the particle.
    pub fn ignite(&mut self) {
        self.is_flashing = true;
        self.flash_progress = 0.0;
    }

    /// Advance motion, pulse, and flash state by `dt` seconds.
    ///
    /// Boundary policy is wrap-around: a particle that drifts past an edge
    /// re-enters on the opposite side, offset by its own radius so it never
    /// pops into view mid-surface.
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) {
        self.pulse_phase += self.pulse_speed * dt;
        self.drift_angle += self.turn_speed * dt;
        self.position += Vec2::from_angle(self.drift_angle) * self.drift_speed * dt;

        let margin = self.radius;
        self.position.x = wrap(self.position.x, width, margin);
        self.position.y = wrap(self.position.y, height, margin);

        if self.is_flashing {
            self.flash_progress += dt / FLASH_DURATION;
            if self.flash_progress >= 1.0 {
                // Immediate reset: the half-sine envelope has already faded
                // the flash back to zero brightness at progress 1.
                self.is_flashing = false;
                self.flash_progress = 0.0;
            }
        }
    }

    /// Current draw color: base color pulsed by the particle's own phase,
    /// pushed toward the flash color by the flash envelope.
    pub fn color(&self) -> Rgba {
        let pulse = 0.5 + 0.5 * self.pulse_phase.sin();
        let base = visuals::BASE_COLOR.with_alpha(0.3 + 0.35 * pulse);
        if self.is_flashing {
            base.lerp(visuals::FLASH_COLOR, visuals::flash_envelope(self.flash_progress))
        } else {
            base
        }
    }

    /// Draw the particle and its connections to `neighbors`.
    ///
    /// The caller passes each pair exactly once (particles later in the
    /// field order), so no line is drawn twice. Neighbors are read-only.
    pub fn draw(
        &self,
        surface: &mut PixelSurface,
        neighbors: &[Particle],
        connection_phase: f32,
    ) {
        surface.fill_circle(self.position, self.radius, self.color());

        for other in neighbors {
            let distance = self.position.distance(other.position);
            let alpha = visuals::connection_alpha(distance, CONNECTION_DISTANCE, connection_phase);
            if alpha > 0.0 {
                surface.stroke_line(
                    self.position,
                    other.position,
                    visuals::CONNECTION_COLOR.with_alpha(alpha),
                );
            }
        }
    }
}

/// Wrap `v` into `[-margin, extent + margin]`, re-entering from the far side.
fn wrap(v: f32, extent: f32, margin: f32) -> f32 {
    let extent = extent.max(0.0);
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}
