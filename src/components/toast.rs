//! Transient toast notifications.
//!
//! Toasts live in a [`ToastStack`] held by a `RwSignal` and are rendered by
//! [`ToastRegion`]. Each one moves through three phases: mounted hidden, made
//! visible on the next frame so the CSS fade-in runs, then hidden again
//! after its display time and removed once the fade-out transition ends.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Styles for `.contact-toast`, injected once per page.
pub const TOAST_STYLES: &str = r#"
.contact-toast {
	position: fixed;
	bottom: 2rem;
	right: 2rem;
	background: rgba(0, 0, 0, 0.75);
	border: 1px solid rgba(0, 224, 255, 0.25);
	padding: 0.95rem 1.4rem;
	border-radius: 0.9rem;
	color: #ffffff;
	font-family: var(--font-base, 'Inter', sans-serif);
	letter-spacing: 0.03em;
	box-shadow: 0 20px 45px rgba(0, 224, 255, 0.18);
	opacity: 0;
	transform: translateY(15px);
	transition: opacity 0.45s ease, transform 0.45s ease;
	z-index: 20;
}

.contact-toast.is-visible {
	opacity: 1;
	transform: translateY(0);
}

@media (max-width: 640px) {
	.contact-toast {
		left: 1.25rem;
		right: 1.25rem;
		bottom: 1.5rem;
		text-align: center;
	}
}
"#;

/// Id of the `<style>` element carrying [`TOAST_STYLES`].
pub const TOAST_STYLES_ID: &str = "toast-styles";

/// Where a toast is in its show/hide cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
	/// Mounted but not yet visible.
	Entering,
	Visible,
	/// Fading out; removed when the transition ends.
	Leaving,
}

/// A single toast message.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	pub id: u64,
	pub message: String,
	pub phase: ToastPhase,
}

/// All live toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
	toasts: Vec<Toast>,
	next_id: u64,
}

impl ToastStack {
	/// Adds a hidden toast and returns its id.
	pub fn push(&mut self, message: impl Into<String>) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.toasts.push(Toast {
			id,
			message: message.into(),
			phase: ToastPhase::Entering,
		});
		id
	}

	pub fn ids(&self) -> Vec<u64> {
		self.toasts.iter().map(|t| t.id).collect()
	}

	pub fn get(&self, id: u64) -> Option<&Toast> {
		self.toasts.iter().find(|t| t.id == id)
	}

	pub fn is_visible(&self, id: u64) -> bool {
		self.get(id).is_some_and(|t| t.phase == ToastPhase::Visible)
	}

	pub fn len(&self) -> usize {
		self.toasts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}

	/// Starts the fade-in of an entering toast.
	pub fn reveal(&mut self, id: u64) {
		self.set_phase(id, ToastPhase::Entering, ToastPhase::Visible);
	}

	/// Starts the fade-out. A toast that never became visible leaves too.
	pub fn dismiss(&mut self, id: u64) {
		if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
			toast.phase = ToastPhase::Leaving;
		}
	}

	/// Called when a toast's transition ends. Only a leaving toast is removed;
	/// the end of the fade-in is ignored.
	pub fn transition_ended(&mut self, id: u64) {
		self.toasts
			.retain(|t| t.id != id || t.phase != ToastPhase::Leaving);
	}

	/// Removes a toast regardless of phase.
	pub fn remove(&mut self, id: u64) {
		self.toasts.retain(|t| t.id != id);
	}

	fn set_phase(&mut self, id: u64, from: ToastPhase, to: ToastPhase) {
		if let Some(toast) = self
			.toasts
			.iter_mut()
			.find(|t| t.id == id && t.phase == from)
		{
			toast.phase = to;
		}
	}
}

/// Display timings for a toast, in milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct ToastTiming {
	pub visible_ms: u32,
	pub fade_ms: u32,
}

/// Shows `message` and schedules its fade-out and removal.
pub fn show_toast(toasts: RwSignal<ToastStack>, message: String, timing: ToastTiming) {
	let Some(id) = toasts.try_update(|stack| stack.push(message)) else {
		return;
	};

	// Reveal after the hidden toast has painted so the transition runs.
	request_animation_frame(move || toasts.update(|stack| stack.reveal(id)));

	Timeout::new(timing.visible_ms, move || {
		toasts.update(|stack| stack.dismiss(id));
	})
	.forget();

	// Fallback for hosts that never fire `transitionend` (e.g. transitions disabled).
	Timeout::new(timing.visible_ms + timing.fade_ms * 2, move || {
		toasts.update(|stack| stack.remove(id));
	})
	.forget();
}

/// Renders every live toast.
#[component]
pub fn ToastRegion(toasts: RwSignal<ToastStack>) -> impl IntoView {
	view! {
		<For
			each=move || toasts.with(|stack| stack.ids())
			key=|id| *id
			children=move |id| {
				let message = toasts
					.with_untracked(|stack| stack.get(id).map(|t| t.message.clone()))
					.unwrap_or_default();
				view! {
					<div
						class="contact-toast"
						role="status"
						class:is-visible=move || toasts.with(|stack| stack.is_visible(id))
						on:transitionend=move |_| toasts.update(|stack| stack.transition_ended(id))
					>
						{message}
					</div>
				}
			}
		/>
	}
}
