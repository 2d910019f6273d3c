// Host-side tests for the pointer influence field and sprite styling.

use glam::Vec2;
use morph_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn calm_field() -> FieldParams {
    FieldParams {
        turbulence_factor: 0.0,
        ..FieldParams::default()
    }
}

#[test]
fn influence_is_quadratic_and_bounded() {
    let f = FieldParams::default();
    assert_eq!(f.influence(0.0), Some(1.0));
    let half = f.influence(f.influence_radius / 2.0).unwrap();
    assert!((half - 0.25).abs() < 1e-6);
    assert_eq!(f.influence(f.influence_radius), None);
    assert_eq!(f.influence(f.influence_radius * 2.0), None);
}

#[test]
fn pulse_stays_in_unit_range() {
    let f = FieldParams::default();
    for i in 0..2000 {
        let p = f.pulse(i as f64 * 7.3);
        assert!((0.0..=1.0).contains(&p));
    }
    assert!((f.pulse(0.0) - 0.5).abs() < 1e-6);
}

#[test]
fn pointer_on_particle_gives_peak_displacement() {
    let f = calm_field();
    let mut rng = StdRng::seed_from_u64(1);
    let pos = Vec2::new(12.0, -7.0);
    for (r, pulse) in [(1.0, 0.0), (3.0, 0.5), (0.5, 1.0)] {
        let d = f.displace(pos, r, pos, pulse, &mut rng).unwrap();
        assert_eq!(d.influence, 1.0);
        let expected = f.peak_magnitude(r, pulse);
        assert!(
            (d.offset.length() - expected).abs() < expected * 1e-5,
            "r={r} pulse={pulse}: {} vs {expected}",
            d.offset.length()
        );
    }
}

#[test]
fn smaller_particles_move_further() {
    let f = calm_field();
    let mut rng = StdRng::seed_from_u64(2);
    let pos = Vec2::new(10.0, 0.0);
    let small = f.displace(pos, 0.5, Vec2::ZERO, 0.3, &mut rng).unwrap();
    let large = f.displace(pos, 5.0, Vec2::ZERO, 0.3, &mut rng).unwrap();
    assert!(small.offset.length() > large.offset.length());
}

#[test]
fn vortex_is_tangential_when_pulse_balances() {
    // Pick the pulse where attract and repel cancel; only the vortex remains.
    let f = calm_field();
    let balance = f.push_strength * f.repel_boost
        / (f.push_strength * f.repel_boost + f.vortex_strength * f.attract_weight);
    let mut rng = StdRng::seed_from_u64(3);
    let d = f
        .displace(Vec2::new(20.0, 0.0), 1.0, Vec2::ZERO, balance, &mut rng)
        .unwrap();
    assert!(d.offset.x.abs() < 1e-2, "radial residue {}", d.offset.x);
    assert!(d.offset.y > 0.0);
}

#[test]
fn outside_radius_is_untouched() {
    let f = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(4);
    let far = Vec2::new(f.influence_radius + 1.0, 0.0);
    assert!(f.displace(far, 1.0, Vec2::ZERO, 0.5, &mut rng).is_none());
}

#[test]
fn gentle_displacement_is_a_round_tinted_dot() {
    let mut rng = StdRng::seed_from_u64(5);
    let d = Displacement {
        offset: Vec2::new(10.0, 0.0),
        influence: 0.5,
    };
    match influenced_look(&d, 2.0, 0.0, &mut rng) {
        Look::Influenced(l) => {
            assert!(l.stretch < STRETCH_BODY_MIN);
            assert!(l.glow.is_none());
            assert_eq!(l.body, Body::Round { blue: 0.15 });
        }
        Look::Plain => panic!("expected influenced look"),
    }
}

#[test]
fn violent_displacement_streaks_with_trails() {
    let mut rng = StdRng::seed_from_u64(6);
    let d = Displacement {
        offset: Vec2::new(0.0, 5000.0),
        influence: 1.0,
    };
    let Look::Influenced(l) = influenced_look(&d, 2.0, 1.0, &mut rng) else {
        panic!("expected influenced look");
    };
    assert_eq!(l.stretch, MAX_STRETCH);
    assert!((l.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    let glow = l.glow.unwrap();
    assert_eq!(glow.intensity, MAX_GLOW);
    assert_eq!(glow.hue, BASE_HUE + HUE_PULSE_SPAN);
    assert_eq!(glow.radius, 2.0 * (2.0 + MAX_STRETCH * 2.0));
    match l.body {
        Body::Stretched {
            rgb,
            alpha,
            trails,
            sparks,
        } => {
            assert_eq!(rgb, [100, 150, 255]);
            assert_eq!(alpha, 1.0);
            assert_eq!(trails.len(), 24);
            assert_eq!(trails[0].offset, 0.0);
            assert!(trails.windows(2).all(|w| w[1].offset < w[0].offset));
            assert!(sparks.is_empty() || sparks.len() == 24);
        }
        Body::Round { .. } => panic!("expected stretched body"),
    }
}

#[test]
fn moderate_stretch_blends_toward_blue() {
    let mut rng = StdRng::seed_from_u64(7);
    // 140 * 0.015 puts the stretch at 2.1
    let d = Displacement {
        offset: Vec2::new(140.0, 0.0),
        influence: 0.2,
    };
    let Look::Influenced(l) = influenced_look(&d, 1.0, 0.0, &mut rng) else {
        panic!("expected influenced look");
    };
    match l.body {
        Body::Stretched { rgb, trails, sparks, .. } => {
            assert!(rgb[2] > 100 && rgb[2] < 255);
            assert_eq!(trails.len(), 4);
            assert!(sparks.is_empty());
        }
        Body::Round { .. } => panic!("expected stretched body"),
    }
}
