//! Host capability errors.
//!
//! Every page module checks for the elements and browser features it needs
//! when it initialises. A missing piece is reported as a [`HostError`] and the
//! module is skipped; nothing here is ever shown to the visitor.

use thiserror::Error;

/// A required DOM element or browser capability is unavailable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
	/// No element matched the id or selector.
	#[error("no element matches `{0}`")]
	MissingElement(String),
	/// The element exists but is not of the expected kind.
	#[error("`{0}` is not a {1}")]
	WrongElement(String, &'static str),
	/// The canvas refused a 2D rendering context.
	#[error("2d drawing context unavailable")]
	NoDrawingContext,
	/// A browser API is missing or rejected the call.
	#[error("{0} is not supported")]
	Unsupported(&'static str),
}
