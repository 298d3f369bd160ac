use super::*;

#[test]
fn menu_starts_closed() {
	let menu = NavMenu::default();
	assert!(!menu.is_open());
	assert_eq!(menu.aria_expanded(), "false");
	assert_eq!(menu.aria_hidden(), "true");
}

#[test]
fn toggle_opens_then_closes() {
	let mut menu = NavMenu::default();
	assert!(menu.toggle());
	assert_eq!(menu.aria_expanded(), "true");
	assert_eq!(menu.aria_hidden(), "false");
	assert!(!menu.toggle());
	assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn close_reports_whether_it_changed_anything() {
	let mut menu = NavMenu::default();
	assert!(!menu.close());
	menu.toggle();
	assert!(menu.close());
	assert!(!menu.is_open());
	assert!(!menu.close());
}

#[test]
fn aria_values_are_always_complementary() {
	let mut menu = NavMenu::default();
	for _ in 0..4 {
		assert_ne!(menu.aria_expanded(), menu.aria_hidden());
		menu.toggle();
	}
}
