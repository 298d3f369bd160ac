//! Reveal-on-scroll: marks elements visible the first time they enter the
//! viewport.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::error::HostError;

/// Observes every matching element once.
pub fn init(document: &Document, config: &RevealConfig) -> Result<(), HostError> {
	let elements = document
		.query_selector_all(&config.selector)
		.map_err(|_| HostError::MissingElement(config.selector.clone()))?;
	if elements.length() == 0 {
		return Err(HostError::MissingElement(config.selector.clone()));
	}

	let visible_class = config.visible_class.clone();
	let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				let _ = target.class_list().add_1(&visible_class);
				observer.unobserve(&target);
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.threshold));
	let observer =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
			.map_err(|_| HostError::Unsupported("IntersectionObserver"))?;
	on_intersect.forget();

	for i in 0..elements.length() {
		if let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&element);
		}
	}
	Ok(())
}
