use crate::params::MorphParams;
use crate::schedule::{lerp, Phase, PhaseEnvelope};
use crate::shape::Circle;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// How a particle came out of the last allocation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// At rest on its own circle; no transition has touched it.
    Resting,
    /// Already within the snap threshold of its new target.
    Snapped,
    /// Matched to a new target and animating toward it.
    Moving,
    /// Created for a target nobody could claim; grows out of the origin.
    Spawned,
    /// Left over; shrinks to nothing and is dropped when the transition ends.
    Fading,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Base (unswirled, undisplaced) position of the last step.
    pub pos: Vec2,
    pub r: f32,
    pub start: Vec2,
    pub start_r: f32,
    pub target: Vec2,
    pub target_r: f32,
    pub is_stationary: bool,
    pub envelope: PhaseEnvelope,
    pub swirl_angle: f32,
    /// Radians per frame, fixed for the particle's lifetime.
    pub swirl_speed: f32,
    pub role: Role,
}

impl Particle {
    /// A particle sitting on `circle` with freshly drawn swirl state.
    pub fn resting<R: Rng + ?Sized>(circle: &Circle, params: &MorphParams, rng: &mut R) -> Self {
        let at = circle.center();
        let (swirl_angle, swirl_speed) = sample_swirl(params, rng);
        Self {
            pos: at,
            r: circle.r,
            start: at,
            start_r: circle.r,
            target: at,
            target_r: circle.r,
            is_stationary: true,
            envelope: PhaseEnvelope::default(),
            swirl_angle,
            swirl_speed,
            role: Role::Resting,
        }
    }

    /// A new particle growing out of the origin toward `circle`.
    pub fn spawn<R: Rng + ?Sized>(circle: &Circle, params: &MorphParams, rng: &mut R) -> Self {
        let (swirl_angle, swirl_speed) = sample_swirl(params, rng);
        Self {
            pos: Vec2::ZERO,
            r: 0.0,
            start: Vec2::ZERO,
            start_r: 0.0,
            target: circle.center(),
            target_r: circle.r,
            is_stationary: false,
            envelope: PhaseEnvelope::sample(params.duration_ms, rng),
            swirl_angle,
            swirl_speed,
            role: Role::Spawned,
        }
    }

    /// Start a new leg from wherever this particle currently is.
    /// Swirl state carries over.
    pub fn retarget(&self, target: Vec2, target_r: f32, role: Role, envelope: PhaseEnvelope) -> Self {
        Self {
            start: self.pos,
            start_r: self.r,
            target,
            target_r,
            is_stationary: matches!(role, Role::Snapped | Role::Resting),
            envelope,
            role,
            ..self.clone()
        }
    }

    /// Base position and radius at transition time `t`.
    pub fn base_at(&self, t: f32, converge_radius: f32) -> (Vec2, f32) {
        if self.is_stationary {
            return (self.start, self.start_r);
        }
        match self.envelope.phase_at(t) {
            Phase::Before => (self.start, self.start_r),
            Phase::Converge(e) => (self.start.lerp(Vec2::ZERO, e), lerp(self.start_r, converge_radius, e)),
            Phase::Wait => (Vec2::ZERO, converge_radius),
            Phase::Diverge(e) => (Vec2::ZERO.lerp(self.target, e), lerp(converge_radius, self.target_r, e)),
            Phase::After => (self.target, self.target_r),
        }
    }

    /// Collapse the active leg onto its target.
    pub fn settle(&mut self) {
        self.pos = self.target;
        self.r = self.target_r;
        self.start = self.target;
        self.start_r = self.target_r;
        self.is_stationary = true;
    }

    pub fn is_fading(&self) -> bool {
        self.role == Role::Fading
    }
}

fn sample_swirl<R: Rng + ?Sized>(params: &MorphParams, rng: &mut R) -> (f32, f32) {
    let angle = rng.gen::<f32>() * TAU;
    let speed = if params.swirl_speed_max > params.swirl_speed_min {
        rng.gen_range(params.swirl_speed_min..params.swirl_speed_max)
    } else {
        params.swirl_speed_min
    };
    (angle, speed)
}
