use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore(RefCell<HashMap<String, String>>);

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.0.borrow_mut().insert(key.to_string(), value.to_string());
	}
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_defaults_to_dark() {
	assert_eq!(ThemeMode::default(), ThemeMode::Dark);
}

#[test]
fn only_light_value_selects_light() {
	assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
	assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
	assert_eq!(ThemeMode::from_stored(Some("LIGHT")), ThemeMode::Dark);
	assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::Dark);
	assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
}

#[test]
fn toggled_flips_mode() {
	assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
	assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
}

#[test]
fn from_light_follows_class_state() {
	assert_eq!(ThemeMode::from_light(true), ThemeMode::Light);
	assert_eq!(ThemeMode::from_light(false), ThemeMode::Dark);
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn empty_store_loads_dark() {
	let preference = ThemePreference::new(MemoryStore::default(), "prisma-theme");
	assert_eq!(preference.load(), ThemeMode::Dark);
}

#[test]
fn saved_mode_round_trips_through_store() {
	let preference = ThemePreference::new(MemoryStore::default(), "prisma-theme");
	preference.save(ThemeMode::Light);
	assert_eq!(preference.load(), ThemeMode::Light);
	preference.save(ThemeMode::Dark);
	assert_eq!(preference.load(), ThemeMode::Dark);
}

#[test]
fn preference_writes_under_its_key_only() {
	let preference = ThemePreference::new(MemoryStore::default(), "prisma-theme");
	preference.save(ThemeMode::Light);
	let stored = preference.store.0.borrow();
	assert_eq!(stored.len(), 1);
	assert_eq!(stored.get("prisma-theme").map(String::as_str), Some("light"));
}
