//! Transition timing: per-particle converge/wait/diverge envelopes, easing
//! and the transition clock.

use rand::Rng;

/// Boundaries (ms from transition start) of one particle's converge, wait and
/// diverge phases. Always `0 <= converge_start <= converge_end <= wait_end <= diverge_end <= duration`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseEnvelope {
    pub converge_start: f32,
    pub converge_end: f32,
    pub wait_end: f32,
    pub diverge_end: f32,
}

/// Where a particle is inside its envelope at a given transition time.
/// Converge and diverge carry the eased progress in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Before,
    Converge(f32),
    Wait,
    Diverge(f32),
    After,
}

impl PhaseEnvelope {
    /// Draw a fresh envelope for a transition lasting `duration` ms.
    pub fn sample<R: Rng + ?Sized>(duration: f32, rng: &mut R) -> Self {
        let converge_start = rng.gen::<f32>() * 0.2 * duration;
        let converge_len = rng.gen_range(0.2..0.4) * duration;
        let wait_len = rng.gen::<f32>() * 0.1 * duration;
        let diverge_len = rng.gen_range(0.2..0.4) * duration;

        let converge_end = (converge_start + converge_len).min(duration);
        let wait_end = (converge_end + wait_len).min(duration);
        let diverge_end = (wait_end + diverge_len).min(duration);
        Self {
            converge_start,
            converge_end,
            wait_end,
            diverge_end,
        }
    }

    pub fn is_ordered(&self, duration: f32) -> bool {
        0.0 <= self.converge_start
            && self.converge_start <= self.converge_end
            && self.converge_end <= self.wait_end
            && self.wait_end <= self.diverge_end
            && self.diverge_end <= duration
    }

    pub fn phase_at(&self, t: f32) -> Phase {
        if t < self.converge_start {
            Phase::Before
        } else if t < self.converge_end {
            let ratio = (t - self.converge_start) / (self.converge_end - self.converge_start);
            Phase::Converge(ease_in_out_quad(ratio))
        } else if t < self.wait_end {
            Phase::Wait
        } else if t < self.diverge_end {
            let ratio = (t - self.wait_end) / (self.diverge_end - self.wait_end);
            Phase::Diverge(ease_in_out_quad(ratio))
        } else {
            Phase::After
        }
    }
}

#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// An in-flight shape change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub target_index: usize,
    /// Timestamp (ms) the transition began.
    pub started_at: f64,
    /// Camera scale when the transition began; the camera eases from here to
    /// the target shape's fit.
    pub from_scale: f32,
}

impl Transition {
    /// Transition clock `min(now - started_at, duration)`, never negative.
    pub fn elapsed(&self, now: f64, duration: f32) -> f32 {
        ((now - self.started_at) as f32).clamp(0.0, duration)
    }

    pub fn is_complete(&self, now: f64, duration: f32) -> bool {
        self.elapsed(now, duration) >= duration
    }
}
