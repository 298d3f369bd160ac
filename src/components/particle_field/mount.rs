//! Wires a [`ParticleField`] to the page.
//!
//! The field is shared between three host callbacks through
//! `Rc<RefCell<_>>`: the `requestAnimationFrame` loop, the window `resize`
//! listener and the reduced-motion `change` listener. The host never runs
//! them concurrently, so each borrow completes before the next callback.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use super::canvas::CanvasSurface;
use super::field::{FieldSettings, ParticleField};
use super::frames::{AnimationFrames, FrameCallback};
use crate::components::motion::MediaSignal;
use crate::config::ParticleConfig;
use crate::error::HostError;

type PageField = ParticleField<CanvasSurface, AnimationFrames>;

/// Mounts the particle background on the configured canvas and starts it.
pub fn mount(window: &Window, document: &Document, config: &ParticleConfig) -> Result<(), HostError> {
	let surface = CanvasSurface::find(document, &config.canvas_id)?;
	let motion = MediaSignal::reduced_motion(window)?;

	let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
	let field: Rc<RefCell<PageField>> = Rc::new(RefCell::new(ParticleField::new(
		surface,
		AnimationFrames::new(frame_cb.clone()),
		FieldSettings {
			default_count: config.count,
			reduced_motion: motion.matches(),
			rng_seed: entropy_seed(),
		},
	)));

	let field_frame = field.clone();
	*frame_cb.borrow_mut() = Some(Closure::new(move || {
		field_frame.borrow_mut().on_frame();
	}));

	let field_resize = field.clone();
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let mut field = field_resize.borrow_mut();
		field.resize_surface();
		field.on_surface_resized();
	});
	window
		.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
		.map_err(|_| HostError::Unsupported("resize events"))?;
	on_resize.forget();

	let field_motion = field.clone();
	motion.on_change(move |reduced| {
		field_motion.borrow_mut().on_motion_policy_changed(reduced);
	})?;

	let mut field = field.borrow_mut();
	field.start();
	info!(
		"particles: mounted {} particles ({:?})",
		field.particles().len(),
		field.state()
	);
	Ok(())
}

fn entropy_seed() -> u64 {
	let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let low = js_sys::Date::now() as u64;
	(high << 32) ^ low
}
