use super::*;

// =============================================================
// ToastStack lifecycle
// =============================================================

#[test]
fn pushed_toast_starts_hidden() {
	let mut stack = ToastStack::default();
	let id = stack.push("hola");
	assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Entering));
	assert!(!stack.is_visible(id));
}

#[test]
fn ids_are_unique_and_ordered() {
	let mut stack = ToastStack::default();
	let a = stack.push("a");
	let b = stack.push("b");
	stack.remove(a);
	let c = stack.push("c");
	assert_ne!(a, c);
	assert_eq!(stack.ids(), vec![b, c]);
}

#[test]
fn full_cycle_removes_toast_after_fade_out() {
	let mut stack = ToastStack::default();
	let id = stack.push("hola");
	stack.reveal(id);
	assert!(stack.is_visible(id));

	// End of the fade-in must not remove it.
	stack.transition_ended(id);
	assert_eq!(stack.len(), 1);

	stack.dismiss(id);
	assert!(!stack.is_visible(id));
	stack.transition_ended(id);
	assert!(stack.is_empty());
}

#[test]
fn reveal_after_dismiss_keeps_toast_leaving() {
	let mut stack = ToastStack::default();
	let id = stack.push("hola");
	stack.dismiss(id);
	stack.reveal(id);
	assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Leaving));
}

#[test]
fn toasts_progress_independently() {
	let mut stack = ToastStack::default();
	let first = stack.push("uno");
	let second = stack.push("dos");
	stack.reveal(first);
	stack.reveal(second);
	stack.dismiss(first);
	stack.transition_ended(first);
	assert_eq!(stack.ids(), vec![second]);
	assert!(stack.is_visible(second));
}

#[test]
fn operations_on_unknown_id_are_ignored() {
	let mut stack = ToastStack::default();
	let id = stack.push("hola");
	stack.reveal(id + 10);
	stack.dismiss(id + 10);
	stack.transition_ended(id + 10);
	stack.remove(id + 10);
	assert_eq!(stack.len(), 1);
	assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Entering));
}

#[test]
fn styles_target_toast_classes() {
	assert!(TOAST_STYLES.contains(".contact-toast {"));
	assert!(TOAST_STYLES.contains(".contact-toast.is-visible"));
}
