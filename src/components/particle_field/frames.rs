//! Per-frame callback scheduling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Handle returned by the host for a scheduled frame.
pub type FrameId = i32;

/// Schedules a single callback at the host's next display refresh.
pub trait FrameScheduler {
	/// Requests one frame. Returns `None` when the host refuses.
	fn request_frame(&mut self) -> Option<FrameId>;

	fn cancel_frame(&mut self, id: FrameId);
}

/// Shared slot holding the frame callback, filled once the field exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
pub struct AnimationFrames {
	callback: FrameCallback,
}

impl AnimationFrames {
	pub fn new(callback: FrameCallback) -> Self {
		Self { callback }
	}
}

impl FrameScheduler for AnimationFrames {
	fn request_frame(&mut self) -> Option<FrameId> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
	}

	fn cancel_frame(&mut self, id: FrameId) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(id);
		}
	}
}
