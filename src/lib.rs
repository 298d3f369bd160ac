//! prisma-site: client-side enhancements for the Prisma marketing site.
//!
//! This crate is mounted onto an existing static page. It wires a light/dark
//! theme toggle, a footer clock, reveal-on-scroll, smooth anchor scrolling,
//! the mobile menu, a contact form toast and an ambient particle canvas. Each
//! feature checks for its own elements and is skipped when they are absent.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info};

pub mod components;
pub mod config;
pub mod error;

use components::toast::{TOAST_STYLES, TOAST_STYLES_ID, ToastRegion, ToastStack};
use components::{
	clock, contact_form, mobile_nav, particle_field, reveal, smooth_scroll, theme_toggle,
};
pub use config::{PageConfig, load_config};
pub use error::HostError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("prisma-site: logging initialized");
}

fn report(feature: &str, result: Result<(), HostError>) {
	if let Err(e) = result {
		debug!("prisma-site: {} skipped: {}", feature, e);
	}
}

/// Initializes every page module against the live document.
fn enhance_page(config: &PageConfig, toasts: RwSignal<ToastStack>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};

	report("theme toggle", theme_toggle::init(&document, &config.theme));
	report("footer clock", clock::init(&document, &config.clock));
	report("reveal", reveal::init(&document, &config.reveal));
	report("smooth scroll", smooth_scroll::init(&document, &config.scroll));
	report("mobile nav", mobile_nav::init(&window, &document, &config.nav));
	report(
		"contact form",
		contact_form::init(&document, &config.contact, toasts),
	);
	report(
		"particles",
		particle_field::mount(&window, &document, &config.particles),
	);
}

fn has_element(id: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
		.is_some()
}

/// Root component: hosts the toast region and enhances the page once mounted.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let toasts = RwSignal::new(ToastStack::default());
	let inject_styles = !has_element(TOAST_STYLES_ID);

	// Runs once, after the component is in the DOM.
	Effect::new(move |_| enhance_page(&config, toasts));

	view! {
		{inject_styles.then(|| view! { <Style id=TOAST_STYLES_ID>{TOAST_STYLES}</Style> })}
		<ToastRegion toasts=toasts />
	}
}
