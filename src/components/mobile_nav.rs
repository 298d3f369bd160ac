//! Mobile navigation menu.
//!
//! [`NavMenu`] holds the open/closed state; [`MobileNav`] mirrors it onto the
//! toggle button, the nav element and `<body>` (classes plus aria
//! attributes). The menu closes when a nav link is followed and when the
//! viewport grows past the desktop breakpoint.

#[cfg(test)]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::components::motion::MediaSignal;
use crate::config::NavConfig;
use crate::error::HostError;

/// Open/closed state of the mobile menu. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
	open: bool,
}

impl NavMenu {
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Flips the menu and returns the new state.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	/// Closes the menu. Returns `true` if it was open.
	pub fn close(&mut self) -> bool {
		std::mem::replace(&mut self.open, false)
	}

	/// `aria-expanded` value for the toggle button.
	pub fn aria_expanded(&self) -> &'static str {
		if self.open { "true" } else { "false" }
	}

	/// `aria-hidden` value for the nav element.
	pub fn aria_hidden(&self) -> &'static str {
		if self.open { "false" } else { "true" }
	}
}

/// The menu's DOM elements and current state.
struct MobileNav {
	menu: NavMenu,
	toggle: Element,
	nav: Element,
	body: HtmlElement,
	open_class: String,
	body_open_class: String,
}

impl MobileNav {
	fn sync(&self) {
		let open = self.menu.is_open();
		let _ = self.toggle.class_list().toggle_with_force(&self.open_class, open);
		let _ = self.nav.class_list().toggle_with_force(&self.open_class, open);
		let _ = self.body.class_list().toggle_with_force(&self.body_open_class, open);
		let _ = self.toggle.set_attribute("aria-expanded", self.menu.aria_expanded());
		let _ = self.nav.set_attribute("aria-hidden", self.menu.aria_hidden());
	}

	fn toggle(&mut self) {
		self.menu.toggle();
		self.sync();
	}

	fn close(&mut self) {
		if self.menu.close() {
			self.sync();
		}
	}
}

fn listen(target: &Element, event: &str, handler: impl FnMut() + 'static) -> Result<(), HostError> {
	let cb = Closure::<dyn FnMut()>::new(handler);
	target
		.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
		.map_err(|_| HostError::Unsupported("click events"))?;
	cb.forget();
	Ok(())
}

/// Wires the menu toggle, nav links and desktop breakpoint.
pub fn init(window: &Window, document: &Document, config: &NavConfig) -> Result<(), HostError> {
	let find = |id: &str| {
		document
			.get_element_by_id(id)
			.ok_or_else(|| HostError::MissingElement(format!("#{id}")))
	};
	let toggle = find(&config.toggle_id)?;
	let nav = find(&config.nav_id)?;
	let body = document
		.body()
		.ok_or_else(|| HostError::MissingElement("body".into()))?;

	let state = MobileNav {
		menu: NavMenu::default(),
		toggle: toggle.clone(),
		nav: nav.clone(),
		body,
		open_class: config.open_class.clone(),
		body_open_class: config.body_open_class.clone(),
	};
	let _ = toggle.set_attribute("aria-expanded", state.menu.aria_expanded());
	let _ = nav.set_attribute("aria-hidden", state.menu.aria_hidden());
	let state = Rc::new(RefCell::new(state));

	let state_toggle = state.clone();
	listen(&toggle, "click", move || state_toggle.borrow_mut().toggle())?;

	if let Ok(links) = nav.query_selector_all("a") {
		for i in 0..links.length() {
			let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
				continue;
			};
			let state_link = state.clone();
			listen(&link, "click", move || state_link.borrow_mut().close())?;
		}
	}

	// Without matchMedia the menu still works, it just won't auto-close.
	if let Ok(desktop) = MediaSignal::watch(window, &config.desktop_query) {
		let state_desktop = state.clone();
		desktop.on_change(move |matches| {
			if matches {
				state_desktop.borrow_mut().close();
			}
		})?;
	}
	Ok(())
}
