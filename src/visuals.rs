//! Color and modulation helpers for particle rendering.
//!
//! This module provides the small visual vocabulary the renderer needs:
//! an RGBA color with fractional alpha, the flash brightness envelope, and
//! the "breathing" alpha applied to connection lines.

/// An RGB color with a fractional alpha in `0.0..=1.0`.
///
/// Channels are stored as bytes because they go straight into the RGBA8
/// framebuffer; alpha stays fractional because it is repeatedly modulated
/// before blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha (clamped to `0..=1`).
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear interpolation toward `other` by `t` in `0..=1`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Resting particle color: muted slate, mostly transparent.
pub const BASE_COLOR: Rgba = Rgba::new(148, 163, 184, 0.45);

/// Flash peak color: the card's red accent at full strength.
pub const FLASH_COLOR: Rgba = Rgba::new(239, 68, 68, 1.0);

/// Connection line color before phase/distance modulation.
pub const CONNECTION_COLOR: Rgba = Rgba::new(148, 163, 184, 1.0);

/// Brightness envelope of a flash over its normalized progress.
///
/// A half-sine: silent at ignition, peaks mid-cycle, fades back to zero as
/// progress reaches 1, so flash end needs no separate fade-out state.
pub fn flash_envelope(progress: f32) -> f32 {
    (progress.clamp(0.0, 1.0) * std::f32::consts::PI).sin()
}

/// Alpha of a connection line between two particles `distance` apart.
///
/// Linear falloff over `max_distance`, multiplied by a slow sinusoid of the
/// shared connection phase so all lines breathe in unison regardless of how
/// fast the particles themselves move.
pub fn connection_alpha(distance: f32, max_distance: f32, phase: f32) -> f32 {
    if max_distance <= 0.0 || distance >= max_distance {
        return 0.0;
    }
    let proximity = 1.0 - distance / max_distance;
    let breathing = 0.25 + 0.15 * phase.sin();
    (proximity * breathing).clamp(0.0, 1.0)
}
