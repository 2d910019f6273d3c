//! Greedy nearest-neighbor assignment of particles to the next shape's circles.

use crate::params::MorphParams;
use crate::particle::{Particle, Role};
use crate::schedule::PhaseEnvelope;
use crate::shape::Circle;
use rand::Rng;

/// Build the particle set for a transition from `current` to `targets`.
///
/// Particles are visited in order and each claims the closest circle still in
/// the pool (first index wins ties). Particles left without a circle fade out
/// in place; circles left without a particle get a newly spawned particle.
/// The result holds `max(current.len(), targets.len())` particles and every
/// circle is claimed exactly once.
pub fn reallocate<R: Rng + ?Sized>(
    current: &[Particle],
    targets: &[Circle],
    params: &MorphParams,
    rng: &mut R,
) -> Vec<Particle> {
    let mut pool: Vec<Circle> = targets.to_vec();
    let mut next = Vec::with_capacity(current.len().max(targets.len()));

    for p in current {
        let Some((index, dist)) = nearest(&pool, p) else {
            let envelope = PhaseEnvelope::sample(params.duration_ms, rng);
            next.push(p.retarget(p.pos, 0.0, Role::Fading, envelope));
            continue;
        };
        let chosen = pool.remove(index);
        if dist <= params.snap_threshold {
            next.push(p.retarget(chosen.center(), chosen.r, Role::Snapped, PhaseEnvelope::default()));
        } else {
            let envelope = PhaseEnvelope::sample(params.duration_ms, rng);
            next.push(p.retarget(chosen.center(), chosen.r, Role::Moving, envelope));
        }
    }

    for circle in &pool {
        next.push(Particle::spawn(circle, params, rng));
    }
    next
}

fn nearest(pool: &[Circle], p: &Particle) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, c) in pool.iter().enumerate() {
        let d = p.pos.distance(c.center());
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best
}
