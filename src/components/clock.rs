//! Footer clock showing the visitor's local time.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use gloo_timers::callback::Interval;
use js_sys::{Array, Date, Intl, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::ClockConfig;
use crate::error::HostError;

/// `HH:MM`, used when the host has no `Intl` time formatting.
pub fn format_hh_mm(hours: u32, minutes: u32) -> String {
	format!("{:02}:{:02}", hours, minutes)
}

/// Formats `date` with a 2-digit hour and minute for `locale`.
fn locale_time(date: &Date, locale: &str) -> Option<String> {
	let options = Object::new();
	Reflect::set(&options, &"hour".into(), &"2-digit".into()).ok()?;
	Reflect::set(&options, &"minute".into(), &"2-digit".into()).ok()?;
	let locales = Array::of1(&JsValue::from_str(locale));
	let formatter = Intl::DateTimeFormat::new(&locales, &options);
	formatter
		.format()
		.call1(&JsValue::UNDEFINED, date)
		.ok()?
		.as_string()
}

fn current_time(locale: &str) -> String {
	let now = Date::new_0();
	locale_time(&now, locale).unwrap_or_else(|| format_hh_mm(now.get_hours(), now.get_minutes()))
}

fn render(element: &Element, locale: &str) {
	element.set_text_content(Some(&current_time(locale)));
}

/// Renders the time now and refreshes it on a fixed interval.
pub fn init(document: &Document, config: &ClockConfig) -> Result<(), HostError> {
	let element = document
		.get_element_by_id(&config.element_id)
		.ok_or_else(|| HostError::MissingElement(format!("#{}", config.element_id)))?;

	render(&element, &config.locale);
	let locale = config.locale.clone();
	Interval::new(config.refresh_ms, move || render(&element, &locale)).forget();
	Ok(())
}
