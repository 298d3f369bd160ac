//! Light/dark theme toggle.
//!
//! The site is dark by default. The light theme is the `light-mode` class on
//! `<body>`, and the choice persists in `localStorage` under a single key.
//! Without storage the toggle still works for the current page view.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage};

use crate::config::ThemeConfig;
use crate::error::HostError;

/// Which theme the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	/// Only an explicit `"light"` selects the light theme.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("light") => ThemeMode::Light,
			_ => ThemeMode::Dark,
		}
	}

	pub fn from_light(light: bool) -> Self {
		if light { ThemeMode::Light } else { ThemeMode::Dark }
	}

	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}
}

/// A string key/value store that survives page loads.
pub trait PreferenceStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`, or nothing when storage is blocked.
pub struct LocalStorage(Option<Storage>);

impl LocalStorage {
	pub fn from_window() -> Self {
		Self(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
	}
}

impl PreferenceStore for LocalStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.0.as_ref()?.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) {
		if let Some(storage) = &self.0 {
			let _ = storage.set_item(key, value);
		}
	}
}

/// The persisted theme choice.
pub struct ThemePreference<S> {
	store: S,
	key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
	pub fn new(store: S, key: impl Into<String>) -> Self {
		Self {
			store,
			key: key.into(),
		}
	}

	pub fn load(&self) -> ThemeMode {
		ThemeMode::from_stored(self.store.get(&self.key).as_deref())
	}

	pub fn save(&self, mode: ThemeMode) {
		self.store.set(&self.key, mode.as_str());
	}
}

/// Applies the stored theme and wires the toggle button.
pub fn init(document: &Document, config: &ThemeConfig) -> Result<(), HostError> {
	let toggle = document
		.get_element_by_id(&config.toggle_id)
		.ok_or_else(|| HostError::MissingElement(format!("#{}", config.toggle_id)))?;
	let body = document
		.body()
		.ok_or_else(|| HostError::MissingElement("body".into()))?;

	let preference = ThemePreference::new(LocalStorage::from_window(), config.storage_key.as_str());
	if preference.load() == ThemeMode::Light {
		let _ = body.class_list().add_1(&config.light_class);
	}

	let light_class = config.light_class.clone();
	let on_click = Closure::<dyn FnMut()>::new(move || {
		let Ok(light) = body.class_list().toggle(&light_class) else {
			return;
		};
		preference.save(ThemeMode::from_light(light));
	});
	toggle
		.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
		.map_err(|_| HostError::Unsupported("click events"))?;
	on_click.forget();
	Ok(())
}
