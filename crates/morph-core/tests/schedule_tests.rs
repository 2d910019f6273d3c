// Host-side tests for envelope sampling, easing and per-phase positions.

use glam::Vec2;
use morph_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sampled_envelopes_are_ordered_and_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    for duration in [3000.0_f32, 400.0, 1.0, 0.0] {
        for _ in 0..500 {
            let env = PhaseEnvelope::sample(duration, &mut rng);
            assert!(env.is_ordered(duration), "{env:?} for {duration}");
            assert!(env.converge_start <= 0.2 * duration);
        }
    }
}

#[test]
fn ease_in_out_quad_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
    assert!((ease_in_out_quad(1.0) - 1.0).abs() < 1e-6);
    assert!(ease_in_out_quad(0.25) < 0.25);
    assert!(ease_in_out_quad(0.75) > 0.75);
}

#[test]
fn phase_boundaries() {
    let env = PhaseEnvelope {
        converge_start: 100.0,
        converge_end: 900.0,
        wait_end: 1100.0,
        diverge_end: 2000.0,
    };
    assert_eq!(env.phase_at(0.0), Phase::Before);
    assert_eq!(env.phase_at(100.0), Phase::Converge(0.0));
    assert_eq!(env.phase_at(500.0), Phase::Converge(0.5));
    assert_eq!(env.phase_at(900.0), Phase::Wait);
    assert_eq!(env.phase_at(1100.0), Phase::Diverge(0.0));
    assert_eq!(env.phase_at(2000.0), Phase::After);
    assert_eq!(env.phase_at(3000.0), Phase::After);
}

#[test]
fn moving_particle_collapses_then_reemerges() {
    let params = MorphParams::default();
    let mut rng = StdRng::seed_from_u64(9);
    let resting = Particle::resting(&Circle::new(-30.0, 20.0, 4.0), &params, &mut rng);
    let env = PhaseEnvelope {
        converge_start: 0.0,
        converge_end: 1000.0,
        wait_end: 1200.0,
        diverge_end: 2400.0,
    };
    let p = resting.retarget(Vec2::new(60.0, 0.0), 6.0, Role::Moving, env);
    let cr = params.converge_radius;

    assert_eq!(p.base_at(0.0, cr), (Vec2::new(-30.0, 20.0), 4.0));
    let (mid, mid_r) = p.base_at(500.0, cr);
    assert!((mid - Vec2::new(-15.0, 10.0)).length() < 1e-4);
    assert!((mid_r - (4.0 + cr) / 2.0).abs() < 1e-4);
    assert_eq!(p.base_at(1100.0, cr), (Vec2::ZERO, cr));
    let (out, _) = p.base_at(1800.0, cr);
    assert!((out - Vec2::new(30.0, 0.0)).length() < 1e-4);
    assert_eq!(p.base_at(3000.0, cr), (Vec2::new(60.0, 0.0), 6.0));
}

#[test]
fn transition_clock_is_clamped() {
    let tr = Transition {
        target_index: 1,
        started_at: 1000.0,
        from_scale: 1.0,
    };
    assert_eq!(tr.elapsed(500.0, 3000.0), 0.0);
    assert_eq!(tr.elapsed(2500.0, 3000.0), 1500.0);
    assert_eq!(tr.elapsed(9000.0, 3000.0), 3000.0);
    assert!(!tr.is_complete(3999.0, 3000.0));
    assert!(tr.is_complete(4000.0, 3000.0));
}
