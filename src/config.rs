//! Page configuration.
//!
//! Every element id, selector, class name and timing the page modules rely
//! on lives here with a default matching the site's markup. A page can
//! override any subset by embedding JSON in
//! `<script id="page-config" type="application/json">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Settings for every page module.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
	pub theme: ThemeConfig,
	pub clock: ClockConfig,
	pub reveal: RevealConfig,
	pub scroll: ScrollConfig,
	pub nav: NavConfig,
	pub contact: ContactConfig,
	pub particles: ParticleConfig,
}

/// Light/dark theme toggle.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
	pub toggle_id: String,
	pub storage_key: String,
	/// Class added to `<body>` while the light theme is active.
	pub light_class: String,
}

impl Default for ThemeConfig {
	fn default() -> Self {
		Self {
			toggle_id: "modeToggle".into(),
			storage_key: "prisma-theme".into(),
			light_class: "light-mode".into(),
		}
	}
}

/// Footer clock.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockConfig {
	pub element_id: String,
	pub locale: String,
	pub refresh_ms: u32,
}

impl Default for ClockConfig {
	fn default() -> Self {
		Self {
			element_id: "footerClock".into(),
			locale: "es-CO".into(),
			refresh_ms: 60 * 1000,
		}
	}
}

/// Reveal-on-scroll.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
	pub selector: String,
	pub visible_class: String,
	/// Fraction of the element that must be visible before it reveals.
	pub threshold: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: "[data-animate]".into(),
			visible_class: "is-visible".into(),
			threshold: 0.15,
		}
	}
}

/// Smooth in-page anchor scrolling.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
	pub link_selector: String,
}

impl Default for ScrollConfig {
	fn default() -> Self {
		Self {
			link_selector: "a[href^=\"#\"]".into(),
		}
	}
}

/// Mobile navigation menu.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
	pub toggle_id: String,
	pub nav_id: String,
	pub open_class: String,
	/// Class added to `<body>` while the menu is open.
	pub body_open_class: String,
	/// Media query at which the mobile menu no longer applies.
	pub desktop_query: String,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			toggle_id: "navToggle".into(),
			nav_id: "mainNav".into(),
			open_class: "is-open".into(),
			body_open_class: "nav-open".into(),
			desktop_query: "(min-width: 961px)".into(),
		}
	}
}

/// Contact form and its confirmation toast.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
	pub form_selector: String,
	pub name_field: String,
	/// How long a toast stays up before fading out.
	pub toast_visible_ms: u32,
	/// Upper bound on the fade-out before the toast is removed regardless.
	pub toast_fade_ms: u32,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			form_selector: ".contact-form".into(),
			name_field: "nombre".into(),
			toast_visible_ms: 3600,
			toast_fade_ms: 450,
		}
	}
}

/// Ambient particle canvas.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
	pub canvas_id: String,
	pub count: usize,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			canvas_id: "particles-canvas".into(),
			count: 70,
		}
	}
}

impl PageConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Reads configuration overrides from the page, falling back to defaults.
pub fn load_config() -> PageConfig {
	let Some(text) = config_text() else {
		return PageConfig::default();
	};
	match PageConfig::from_json(&text) {
		Ok(config) => {
			info!("prisma-site: loaded page configuration");
			config
		}
		Err(e) => {
			warn!("prisma-site: failed to parse page configuration: {}", e);
			PageConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
