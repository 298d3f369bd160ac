//! Media query signals: the reduced-motion preference and viewport breakpoints.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, Window};

use crate::error::HostError;

/// Query matched when the visitor asks for less animation.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// A live `matchMedia` query with change notifications.
pub struct MediaSignal {
	query: MediaQueryList,
}

impl MediaSignal {
	pub fn watch(window: &Window, query: &str) -> Result<Self, HostError> {
		window
			.match_media(query)
			.ok()
			.flatten()
			.map(|query| Self { query })
			.ok_or(HostError::Unsupported("matchMedia"))
	}

	/// The visitor's reduced-motion preference.
	pub fn reduced_motion(window: &Window) -> Result<Self, HostError> {
		Self::watch(window, REDUCED_MOTION_QUERY)
	}

	pub fn matches(&self) -> bool {
		self.query.matches()
	}

	/// Calls `handler` with the new match state on every change, for the
	/// lifetime of the page.
	pub fn on_change(&self, mut handler: impl FnMut(bool) + 'static) -> Result<(), HostError> {
		let query = self.query.clone();
		let cb = Closure::<dyn FnMut()>::new(move || handler(query.matches()));
		self.query
			.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
			.map_err(|_| HostError::Unsupported("media query change events"))?;
		cb.forget();
		Ok(())
	}
}
