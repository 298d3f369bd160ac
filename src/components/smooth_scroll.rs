//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::ScrollConfig;
use crate::error::HostError;

/// Selector for the element an in-page `href` points at.
///
/// A bare `#` (or anything not starting with `#`) has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
	let href = href.trim();
	match href.strip_prefix('#') {
		Some(id) if !id.is_empty() => Some(href),
		_ => None,
	}
}

fn scroll_target(document: &Document, link: &Element) -> Option<Element> {
	let href = link.get_attribute("href")?;
	let selector = anchor_selector(&href)?;
	// Ids that are not valid selectors (e.g. `#1-intro`) are left to the browser.
	document.query_selector(selector).ok().flatten()
}

/// Intercepts clicks on every in-page link that resolves to an element.
pub fn init(document: &Document, config: &ScrollConfig) -> Result<(), HostError> {
	let links = document
		.query_selector_all(&config.link_selector)
		.map_err(|_| HostError::MissingElement(config.link_selector.clone()))?;

	for i in 0..links.length() {
		let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		let (document, target_link) = (document.clone(), link.clone());
		let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			let Some(target) = scroll_target(&document, &target_link) else {
				return;
			};
			ev.prevent_default();
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			target.scroll_into_view_with_scroll_into_view_options(&options);
		});
		let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
	}
	Ok(())
}
