use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

// =============================================================
// spawn
// =============================================================

#[test]
fn spawn_stays_within_documented_ranges() {
	let mut rng = SmallRng::seed_from_u64(42);
	let area = Size::new(800.0, 600.0);
	for _ in 0..2_000 {
		let p = Particle::spawn(&mut rng, area);
		assert!((0.0..=800.0).contains(&p.x));
		assert!((0.0..=600.0).contains(&p.y));
		assert!((1.0..4.0).contains(&p.size));
		assert!((0.2..0.8).contains(&p.alpha));
		assert!((-0.25..0.25).contains(&p.vx));
		assert!((-0.25..0.25).contains(&p.vy));
		assert!(PARTICLE_PALETTE.contains(&p.color));
	}
}

#[test]
fn spawn_uses_every_palette_color() {
	let mut rng = SmallRng::seed_from_u64(3);
	let area = Size::new(100.0, 100.0);
	let spawned: Vec<Particle> = (0..500).map(|_| Particle::spawn(&mut rng, area)).collect();
	for color in PARTICLE_PALETTE {
		assert!(spawned.iter().any(|p| p.color == color));
	}
}

#[test]
fn spawn_on_empty_area_lands_at_origin() {
	let mut rng = SmallRng::seed_from_u64(1);
	let p = Particle::spawn(&mut rng, Size::default());
	assert_eq!((p.x, p.y), (0.0, 0.0));
}

// =============================================================
// wrap
// =============================================================

#[test]
fn wrap_leaves_in_bounds_values_untouched() {
	for v in [-50.0, -12.5, 0.0, 400.0, 849.999] {
		assert_eq!(wrap(v, 800.0), v);
	}
}

#[test]
fn wrap_past_left_margin_reenters_at_right_margin() {
	let wrapped = wrap(-50.1, 800.0);
	assert!((wrapped - 849.9).abs() < 1e-9);
}

#[test]
fn wrap_at_right_margin_reenters_at_left_margin() {
	assert_eq!(wrap(850.0, 800.0), -50.0);
	assert!((wrap(850.2, 800.0) - -49.8).abs() < 1e-9);
}

#[test]
fn wrap_handles_coordinates_far_outside_after_shrink() {
	// A particle left behind when the surface shrinks from 1600 to 200 wide.
	let wrapped = wrap(1500.0, 200.0);
	assert!((-50.0..250.0).contains(&wrapped));
}

#[test]
fn wrap_never_returns_upper_bound_for_tiny_overshoot() {
	let wrapped = wrap(-50.0 - 1e-14, 800.0);
	assert!((-50.0..850.0).contains(&wrapped));
}

#[test]
fn advance_wraps_each_axis_independently() {
	let mut p = Particle {
		x: 849.9,
		y: 10.0,
		size: 1.0,
		alpha: 0.5,
		color: PARTICLE_PALETTE[0],
		vx: 0.2,
		vy: -0.1,
	};
	p.advance(Size::new(800.0, 600.0));
	assert!((p.x - -49.9).abs() < 1e-9);
	assert!((p.y - 9.9).abs() < 1e-9);
}
