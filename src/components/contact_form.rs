//! Contact form: swallows the submission and thanks the visitor with a toast.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, FormData, HtmlFormElement};

use super::toast::{ToastStack, ToastTiming, show_toast};
use crate::config::ContactConfig;
use crate::error::HostError;

/// Thank-you text, personalised when the visitor left a name.
pub fn thank_you_message(name: Option<&str>) -> String {
	match name.map(str::trim).filter(|n| !n.is_empty()) {
		Some(name) => format!("¡Gracias {name}! Pronto nos pondremos en contacto contigo."),
		None => "¡Gracias! Pronto nos pondremos en contacto contigo.".to_string(),
	}
}

/// Handles submissions of the contact form.
pub fn init(
	document: &Document,
	config: &ContactConfig,
	toasts: RwSignal<ToastStack>,
) -> Result<(), HostError> {
	let form: HtmlFormElement = document
		.query_selector(&config.form_selector)
		.ok()
		.flatten()
		.ok_or_else(|| HostError::MissingElement(config.form_selector.clone()))?
		.dyn_into()
		.map_err(|_| HostError::WrongElement(config.form_selector.clone(), "form"))?;

	let timing = ToastTiming {
		visible_ms: config.toast_visible_ms,
		fade_ms: config.toast_fade_ms,
	};
	let name_field = config.name_field.clone();
	let submitted = form.clone();
	let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		ev.prevent_default();
		let name = FormData::new_with_form(&submitted)
			.ok()
			.and_then(|data| data.get(&name_field).as_string());
		submitted.reset();
		show_toast(toasts, thank_you_message(name.as_deref()), timing);
	});
	form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
		.map_err(|_| HostError::Unsupported("submit events"))?;
	on_submit.forget();
	Ok(())
}
