//! Pointer influence field: vortex, pulsing attract/repel and turbulence
//! around the pointer, stronger on small particles.

use crate::params::FieldParams;
use glam::Vec2;
use rand::Rng;

/// Displacement produced by the field for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    pub offset: Vec2,
    /// `(1 - dist / influence_radius)^2`, in `(0, 1]`.
    pub influence: f32,
}

impl FieldParams {
    /// Attract/repel oscillator in `[0, 1]`; 1 is full attraction.
    pub fn pulse(&self, now_ms: f64) -> f32 {
        ((now_ms * self.pulse_frequency as f64).sin() * 0.5 + 0.5) as f32
    }

    /// Quadratic falloff, `None` outside the influence radius.
    pub fn influence(&self, dist: f32) -> Option<f32> {
        if dist < self.influence_radius {
            let k = 1.0 - dist / self.influence_radius;
            Some(k * k)
        } else {
            None
        }
    }

    /// Inverse-radius weight so smaller dots move further.
    #[inline]
    pub fn size_weight(&self, r: f32) -> f32 {
        self.size_weight / (r + 0.1)
    }

    /// Displacement of a particle drawn at `pos` with radius `r`, for a pointer
    /// at `pointer` (both in shape space).
    pub fn displace<R: Rng + ?Sized>(
        &self,
        pos: Vec2,
        r: f32,
        pointer: Vec2,
        pulse: f32,
        rng: &mut R,
    ) -> Option<Displacement> {
        let delta = pos - pointer;
        let influence = self.influence(delta.length())?;

        let radial = Vec2::from_angle(delta.y.atan2(delta.x));
        let vortex = radial.perp() * self.vortex_strength * influence;
        let attract = -radial * self.vortex_strength * influence * pulse * self.attract_weight;
        let repel = radial * self.push_strength * influence * (1.0 - pulse) * self.repel_boost;
        let turbulence = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5)
            * self.turbulence_factor
            * self.influence_radius
            * influence;

        Some(Displacement {
            offset: (vortex + attract + repel + turbulence) * self.size_weight(r),
            influence,
        })
    }

    /// Turbulence-free displacement length at full influence, i.e. with the
    /// pointer exactly on the particle.
    pub fn peak_magnitude(&self, r: f32, pulse: f32) -> f32 {
        let radial = self.push_strength * (1.0 - pulse) * self.repel_boost
            - self.vortex_strength * pulse * self.attract_weight;
        Vec2::new(radial, self.vortex_strength).length() * self.size_weight(r)
    }
}
