//! Particle field state machine.
//!
//! The field owns its particles, its drawing surface and its frame
//! scheduler. Every mutation goes through the lifecycle methods below, which
//! the host calls one at a time from the frame callback and from the resize
//! and motion-preference listeners.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::frames::{FrameId, FrameScheduler};
use super::particle::Particle;
use super::surface::{self, Surface, SurfaceGeometry};

/// Lifecycle state of a [`ParticleField`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
	/// Particles generated, no frame loop.
	Seeded,
	/// A frame is scheduled and every frame steps the field.
	Running,
	/// Reduced motion: no particles, cleared surface, no frames.
	Paused,
}

/// Construction parameters for a [`ParticleField`].
#[derive(Clone, Copy, Debug)]
pub struct FieldSettings {
	/// Particle count used at mount, when re-enabling motion, and when
	/// resizing an empty field.
	pub default_count: usize,
	/// Motion preference at mount time.
	pub reduced_motion: bool,
	pub rng_seed: u64,
}

/// Ambient particle background bound to a surface and frame scheduler.
pub struct ParticleField<S, F> {
	surface: S,
	frames: F,
	particles: Vec<Particle>,
	state: FieldState,
	pending: Option<FrameId>,
	reduced_motion: bool,
	default_count: usize,
	rng: SmallRng,
}

impl<S: Surface, F: FrameScheduler> ParticleField<S, F> {
	/// Syncs the surface and seeds the initial batch. The field starts
	/// `Paused` and empty when motion is already reduced.
	pub fn new(mut surface: S, frames: F, settings: FieldSettings) -> Self {
		surface::resize(&mut surface);
		let mut field = Self {
			surface,
			frames,
			particles: Vec::new(),
			state: FieldState::Seeded,
			pending: None,
			reduced_motion: settings.reduced_motion,
			default_count: settings.default_count,
			rng: SmallRng::seed_from_u64(settings.rng_seed),
		};
		if settings.reduced_motion {
			field.state = FieldState::Paused;
		} else {
			field.seed(settings.default_count);
		}
		field
	}

	pub fn state(&self) -> FieldState {
		self.state
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn frames(&self) -> &F {
		&self.frames
	}

	pub fn is_reduced_motion(&self) -> bool {
		self.reduced_motion
	}

	/// Replaces every particle with `count` fresh ones spread over the
	/// current logical area.
	pub fn seed(&mut self, count: usize) {
		let area = self.surface.logical_size();
		let rng = &mut self.rng;
		self.particles = (0..count).map(|_| Particle::spawn(&mut *rng, area)).collect();
		if self.state != FieldState::Running {
			self.state = FieldState::Seeded;
		}
	}

	/// Advances every particle one frame, then redraws the surface.
	pub fn step(&mut self) {
		let area = self.surface.logical_size();
		for p in &mut self.particles {
			p.advance(area);
		}

		self.surface.clear(area);
		for p in &self.particles {
			self.surface.fill_circle(p.x, p.y, p.size, p.color, p.alpha);
		}
		self.surface.set_global_alpha(1.0);
	}

	/// Starts the frame loop unless it is already running or motion is reduced.
	pub fn start(&mut self) {
		if self.reduced_motion || self.state == FieldState::Running {
			return;
		}
		self.state = FieldState::Running;
		self.schedule();
	}

	/// Cancels the pending frame. Particles are kept.
	pub fn stop(&mut self) {
		if let Some(id) = self.pending.take() {
			self.frames.cancel_frame(id);
		}
		if self.state == FieldState::Running {
			self.state = FieldState::Seeded;
		}
	}

	/// Frame callback: steps once and schedules the next frame.
	///
	/// Does nothing unless a frame is pending for a running field, so a
	/// callback that was already queued when the loop stopped is inert.
	pub fn on_frame(&mut self) {
		if self.state != FieldState::Running || self.pending.take().is_none() {
			return;
		}
		self.step();
		self.schedule();
	}

	/// Re-syncs the surface's backing buffer with its logical size.
	pub fn resize_surface(&mut self) -> SurfaceGeometry {
		surface::resize(&mut self.surface)
	}

	/// Reseeds across the new logical area, keeping the particle count.
	///
	/// The surface itself must already be resized.
	pub fn on_surface_resized(&mut self) {
		if self.reduced_motion {
			return;
		}
		let count = match self.particles.len() {
			0 => self.default_count,
			n => n,
		};
		self.seed(count);
	}

	pub fn on_motion_policy_changed(&mut self, reduced: bool) {
		self.reduced_motion = reduced;
		if reduced {
			self.stop();
			self.particles.clear();
			let area = self.surface.logical_size();
			self.surface.clear(area);
			self.state = FieldState::Paused;
			debug!("particles: paused for reduced motion");
		} else {
			self.seed(self.default_count);
			self.start();
			debug!("particles: resumed with {} particles", self.particles.len());
		}
	}

	fn schedule(&mut self) {
		self.pending = self.frames.request_frame();
		if self.pending.is_none() {
			warn!("particles: host refused an animation frame, stopping");
			self.state = FieldState::Seeded;
		}
	}
}
