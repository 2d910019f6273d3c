//! The morph engine: owns shapes and particles, advances transitions and
//! produces a drawable [`Frame`] per call to [`MorphEngine::step`].

use crate::allocate::reallocate;
use crate::params::MorphParams;
use crate::particle::Particle;
use crate::schedule::{lerp, Transition};
use crate::shape::ShapeDescriptor;
use crate::style::{influenced_look, Look};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One particle ready to paint, in shape space.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub r: f32,
    /// Pointer-field displacement already included in `pos`.
    pub offset: Vec2,
    pub look: Look,
}

/// Everything needed to paint one frame. Sprites are centered on the origin;
/// the painter translates to the canvas center and applies `scale`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub scale: f32,
    pub pulse: f32,
    pub sprites: Vec<Sprite>,
}

impl Frame {
    pub fn empty() -> Self {
        Self {
            scale: 1.0,
            pulse: 0.0,
            sprites: Vec::new(),
        }
    }
}

pub struct MorphEngine {
    params: MorphParams,
    shapes: Vec<ShapeDescriptor>,
    particles: Vec<Particle>,
    current_shape: usize,
    transition: Option<Transition>,
    pointer: Option<Vec2>,
    rng: StdRng,
}

impl MorphEngine {
    pub fn new(params: MorphParams, seed: u64) -> Self {
        Self {
            params,
            shapes: Vec::new(),
            particles: Vec::new(),
            current_shape: 0,
            transition: None,
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn params(&self) -> &MorphParams {
        &self.params
    }

    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn current_shape(&self) -> usize {
        self.current_shape
    }

    pub fn target_shape(&self) -> Option<usize> {
        self.transition.map(|t| t.target_index)
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Install the loaded shapes and seed one resting particle per circle of
    /// the first shape. Any previous state is discarded.
    pub fn load_shapes(&mut self, shapes: Vec<ShapeDescriptor>) {
        self.transition = None;
        self.current_shape = 0;
        self.particles = match shapes.first() {
            Some(first) => first
                .circles
                .iter()
                .map(|c| Particle::resting(c, &self.params, &mut self.rng))
                .collect(),
            None => Vec::new(),
        };
        log::info!(
            "[engine] shapes={} circles={:?} particles={}",
            shapes.len(),
            shapes.iter().map(|s| s.circles.len()).collect::<Vec<_>>(),
            self.particles.len()
        );
        self.shapes = shapes;
    }

    /// Pointer position in canvas pixels, `None` once the pointer leaves.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Start morphing toward `target_index`. A transition already in flight is
    /// abandoned and the new allocation starts from the particles' current
    /// base positions. Returns `false` for an unknown shape.
    pub fn begin_transition(&mut self, target_index: usize, now: f64) -> bool {
        let Some(target) = self.shapes.get(target_index) else {
            return false;
        };
        let from_scale = self.camera_scale(now);
        if let Some(prev) = self.transition {
            log::debug!(
                "[engine] preempting transition to {} with {}",
                prev.target_index,
                target_index
            );
        }
        self.particles = reallocate(&self.particles, &target.circles, &self.params, &mut self.rng);
        self.transition = Some(Transition {
            target_index,
            started_at: now,
            from_scale,
        });
        log::debug!(
            "[engine] transition {} -> {} particles={}",
            self.current_shape,
            target_index,
            self.particles.len()
        );
        true
    }

    /// Shape-cycle timer hook: advance to the shape after the pending target
    /// (or the current shape when idle).
    pub fn cycle(&mut self, now: f64) -> bool {
        if self.shapes.is_empty() {
            return false;
        }
        let base = self.target_shape().unwrap_or(self.current_shape);
        let next = (base + 1) % self.shapes.len();
        self.begin_transition(next, now)
    }

    /// Transition clock in ms, 0 when idle.
    pub fn elapsed(&self, now: f64) -> f32 {
        self.transition
            .map(|t| t.elapsed(now, self.params.duration_ms))
            .unwrap_or(0.0)
    }

    fn fit_scale(&self, index: usize) -> f32 {
        self.shapes
            .get(index)
            .map(|s| s.fit_scale(self.params.canvas_size, self.params.fit_margin))
            .unwrap_or(1.0)
    }

    /// Overall drawing scale, eased linearly over the transition.
    pub fn camera_scale(&self, now: f64) -> f32 {
        match self.transition {
            Some(t) => {
                let duration = self.params.duration_ms;
                let ratio = if duration > 0.0 {
                    t.elapsed(now, duration) / duration
                } else {
                    1.0
                };
                lerp(t.from_scale, self.fit_scale(t.target_index), ratio)
            }
            None => self.fit_scale(self.current_shape),
        }
    }

    /// Complete the active transition: the target becomes current, every
    /// particle rests on its target and faded particles are dropped.
    /// A no-op when idle.
    pub fn finalize(&mut self) {
        let Some(done) = self.transition.take() else {
            return;
        };
        self.current_shape = done.target_index;
        for p in &mut self.particles {
            p.settle();
        }
        self.particles.retain(|p| !p.is_fading());
        log::debug!(
            "[engine] settled on shape {} particles={}",
            self.current_shape,
            self.particles.len()
        );
    }

    /// Advance one frame at wall-clock `now` (ms) and return what to paint.
    pub fn step(&mut self, now: f64) -> Frame {
        if self.shapes.is_empty() {
            return Frame::empty();
        }

        let t = self.elapsed(now);
        let scale = self.camera_scale(now);
        let half = self.params.canvas_size / 2.0;
        let pointer = self.pointer.map(|p| (p - half) / scale);
        let field = &self.params.field;
        let pulse = field.pulse(now);
        let converge_radius = self.params.converge_radius;
        let swirl_mag = self.params.swirl_magnitude;
        let min_r = self.params.min_draw_radius;
        let rng = &mut self.rng;

        let mut sprites = Vec::with_capacity(self.particles.len());
        for p in &mut self.particles {
            p.swirl_angle += p.swirl_speed;
            let (base, r) = p.base_at(t, converge_radius);
            p.pos = base;
            p.r = r;

            let mut pos = base + Vec2::from_angle(p.swirl_angle) * swirl_mag;
            let mut offset = Vec2::ZERO;
            let mut look = Look::Plain;
            if let Some(ptr) = pointer {
                if let Some(d) = field.displace(pos, r, ptr, pulse, rng) {
                    offset = d.offset;
                    pos += offset;
                    p.swirl_angle += d.influence * field.swirl_boost;
                    if r > min_r {
                        look = influenced_look(&d, r, pulse, rng);
                    }
                }
            }

            if r > min_r {
                sprites.push(Sprite {
                    pos,
                    r,
                    offset,
                    look,
                });
            }
        }

        if self
            .transition
            .is_some_and(|tr| tr.is_complete(now, self.params.duration_ms))
        {
            self.finalize();
        }

        Frame {
            scale,
            pulse,
            sprites,
        }
    }
}
