//! Ambient background particles.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use super::palette::{Color, PARTICLE_PALETTE};
use super::surface::Size;

/// Overscan past each edge before a particle wraps to the opposite side.
pub const WRAP_MARGIN: f64 = 50.0;

/// A single drifting particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub alpha: f64,
	pub color: Color,
	pub vx: f64,
	pub vy: f64,
}

impl Particle {
	/// Spawns a particle at a uniformly random position inside `area`.
	pub fn spawn<R: Rng + ?Sized>(rng: &mut R, area: Size) -> Self {
		Self {
			x: rng.random::<f64>() * area.width,
			y: rng.random::<f64>() * area.height,
			size: rng.random_range(1.0..4.0),
			alpha: rng.random_range(0.2..0.8),
			color: PARTICLE_PALETTE[rng.random_range(0..PARTICLE_PALETTE.len())],
			vx: rng.random_range(-0.25..0.25),
			vy: rng.random_range(-0.25..0.25),
		}
	}

	/// Moves the particle by one frame of velocity, wrapping within `area`.
	pub fn advance(&mut self, area: Size) {
		self.x = wrap(self.x + self.vx, area.width);
		self.y = wrap(self.y + self.vy, area.height);
	}
}

/// Wraps `value` into `[-WRAP_MARGIN, extent + WRAP_MARGIN)`.
///
/// A coordinate that leaves one side re-enters at the opposite margin
/// boundary, keeping its overshoot.
pub fn wrap(value: f64, extent: f64) -> f64 {
	let high = extent + WRAP_MARGIN;
	if (-WRAP_MARGIN..high).contains(&value) {
		return value;
	}
	let span = high + WRAP_MARGIN;
	let shifted = (value + WRAP_MARGIN).rem_euclid(span);
	// rem_euclid rounds tiny negative inputs up to `span`
	if shifted >= span {
		-WRAP_MARGIN
	} else {
		shifted - WRAP_MARGIN
	}
}
