//! Tunables for the morph engine.
//!
//! Values are expressed in shape-space units (the coordinate system of the
//! loaded SVG documents) unless noted otherwise. Times are milliseconds.

use glam::Vec2;

/// Pointer influence field tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub influence_radius: f32,
    pub vortex_strength: f32,
    pub push_strength: f32,
    pub turbulence_factor: f32,
    /// Radians per millisecond of the attract/repel oscillation.
    pub pulse_frequency: f32,
    /// Share of `vortex_strength` used for the attract pull.
    pub attract_weight: f32,
    /// Extra multiplier on the repel phase so it outweighs attraction.
    pub repel_boost: f32,
    /// Numerator of the inverse-radius weight `n / (r + 0.1)`.
    pub size_weight: f32,
    /// Swirl angle added per frame at full influence.
    pub swirl_boost: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            influence_radius: 240.0,
            vortex_strength: 210.0,
            push_strength: 160.0,
            turbulence_factor: 2.0,
            pulse_frequency: 0.005,
            attract_weight: 0.7,
            repel_boost: 1.5,
            size_weight: 8.0,
            swirl_boost: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MorphParams {
    /// Length of one shape transition.
    pub duration_ms: f32,
    /// Period of the shape-cycle timer.
    pub cycle_period_ms: u32,
    pub swirl_magnitude: f32,
    /// Half-open range the per-particle swirl speed is drawn from (rad/frame).
    pub swirl_speed_min: f32,
    pub swirl_speed_max: f32,
    /// Nearest-target distance at or below which a particle snaps instead of animating.
    pub snap_threshold: f32,
    /// Radius particles shrink to while collapsed at the origin.
    pub converge_radius: f32,
    /// Particles at or below this radius are not drawn.
    pub min_draw_radius: f32,
    /// Drawing surface size in pixels.
    pub canvas_size: Vec2,
    /// Share of the canvas a shape fills at best-fit scale.
    pub fit_margin: f32,
    pub field: FieldParams,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            duration_ms: 3000.0,
            cycle_period_ms: 6000,
            swirl_magnitude: 3.0,
            swirl_speed_min: 0.02,
            swirl_speed_max: 0.04,
            snap_threshold: 2.0,
            converge_radius: 0.1,
            min_draw_radius: 0.05,
            canvas_size: Vec2::new(300.0, 300.0),
            fit_margin: 0.9,
            field: FieldParams::default(),
        }
    }
}

impl MorphParams {
    pub fn with_duration_ms(mut self, ms: f32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn with_cycle_period_ms(mut self, ms: u32) -> Self {
        self.cycle_period_ms = ms;
        self
    }

    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_size = Vec2::new(width, height);
        self
    }

    pub fn with_snap_threshold(mut self, threshold: f32) -> Self {
        self.snap_threshold = threshold;
        self
    }

    pub fn with_swirl_magnitude(mut self, magnitude: f32) -> Self {
        self.swirl_magnitude = magnitude;
        self
    }

    pub fn with_field(mut self, field: FieldParams) -> Self {
        self.field = field;
        self
    }
}
