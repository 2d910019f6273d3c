//! Visual treatment of particles caught in the pointer field.
//!
//! Everything stochastic is decided here so a [`Look`] can be painted
//! without further random draws.

use crate::field::Displacement;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::PI;

pub const MAX_STRETCH: f32 = 12.0;
pub const STRETCH_PER_UNIT: f32 = 0.015;
pub const MAX_GLOW: f32 = 0.8;
pub const GLOW_MIN_VISIBLE: f32 = 0.05;
// Stretch thresholds for the elongated body, comet trails and spark bursts.
pub const STRETCH_BODY_MIN: f32 = 1.2;
pub const STRETCH_TRAIL_MIN: f32 = 2.0;
pub const STRETCH_FULL_BLUE: f32 = 3.0;
pub const STRETCH_SPARK_MIN: f32 = 5.0;
pub const SPARK_CHANCE: f32 = 0.3;
pub const BASE_HUE: f32 = 210.0;
pub const HUE_PULSE_SPAN: f32 = 40.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Look {
    /// Plain filled dot.
    Plain,
    Influenced(Influenced),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Influenced {
    /// Direction of the displacement, radians.
    pub angle: f32,
    pub stretch: f32,
    pub glow: Option<Glow>,
    pub body: Body,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub intensity: f32,
    pub radius: f32,
    pub hue: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// Barely moving: round dot with a blue tint in `[0, 0.3]`.
    Round { blue: f32 },
    /// Ellipse stretched along the motion. Trails and sparks are expressed in
    /// the stretched, rotated particle frame.
    Stretched {
        rgb: [u8; 3],
        alpha: f32,
        trails: SmallVec<[TrailSegment; 8]>,
        sparks: SmallVec<[Spark; 8]>,
    },
}

/// One triangle of a comet trail, tip at `(offset, 0)` pointing forward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub offset: f32,
    pub length: f32,
    pub half_width: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub angle: f32,
    pub distance: f32,
    pub size: f32,
    pub alpha: f32,
}

#[inline]
pub fn stretch_factor(offset: Vec2) -> f32 {
    (offset.length() * STRETCH_PER_UNIT).min(MAX_STRETCH)
}

/// Look of a particle of radius `r` displaced by `d` at pulse phase `pulse`.
pub fn influenced_look<R: Rng + ?Sized>(d: &Displacement, r: f32, pulse: f32, rng: &mut R) -> Look {
    let stretch = stretch_factor(d.offset);
    let angle = d.offset.y.atan2(d.offset.x);
    let intensity = (d.influence * stretch * 0.2).min(MAX_GLOW);
    let glow = (intensity > GLOW_MIN_VISIBLE).then(|| Glow {
        intensity,
        radius: r * (2.0 + stretch * 2.0),
        hue: BASE_HUE + pulse * HUE_PULSE_SPAN,
    });

    let body = if stretch > STRETCH_BODY_MIN {
        stretched_body(stretch, intensity, r, rng)
    } else {
        Body::Round {
            blue: d.influence * 0.3,
        }
    };

    Look::Influenced(Influenced {
        angle,
        stretch,
        glow,
        body,
    })
}

fn stretched_body<R: Rng + ?Sized>(stretch: f32, glow: f32, r: f32, rng: &mut R) -> Body {
    let alpha = (0.4 + stretch * 0.1).min(1.0);
    let rgb = if stretch > STRETCH_FULL_BLUE {
        [100, 150, 255]
    } else {
        let blend = (stretch - STRETCH_BODY_MIN) / (STRETCH_FULL_BLUE - STRETCH_BODY_MIN);
        [
            (blend * 100.0) as u8,
            (blend * 150.0) as u8,
            (blend * 255.0) as u8,
        ]
    };

    let mut trails = SmallVec::new();
    let mut sparks = SmallVec::new();
    if stretch > STRETCH_TRAIL_MIN {
        let count = (stretch * 2.0).floor() as usize;
        let total = r * stretch * 5.0;
        let length = total / count as f32;
        for seg in 0..count {
            let frac = seg as f32 / count as f32;
            trails.push(TrailSegment {
                offset: -(total * frac),
                length,
                half_width: r * (1.0 - frac * 0.7),
                opacity: (1.0 - frac) * glow * 0.7,
            });
        }

        if stretch > STRETCH_SPARK_MIN && rng.gen::<f32>() < SPARK_CHANCE {
            for _ in 0..count {
                sparks.push(Spark {
                    angle: (rng.gen::<f32>() - 0.5) * PI * 0.8,
                    distance: rng.gen::<f32>() * total * 0.7,
                    size: rng.gen::<f32>() * r * 0.6,
                    alpha: 0.7 * rng.gen::<f32>(),
                });
            }
        }
    }

    Body::Stretched {
        rgb,
        alpha,
        trails,
        sparks,
    }
}
