//! Ambient particle background.
//!
//! Draws a field of slowly drifting translucent dots on a full-page canvas:
//! - Device-pixel-ratio aware surface sizing that tracks viewport resizes
//! - Toroidal wraparound with an overscan margin so particles never pile up
//! - A `requestAnimationFrame` loop that honours `prefers-reduced-motion`,
//!   pausing and clearing the canvas when the visitor asks for less motion
//!
//! The state machine in [`ParticleField`] is host-independent: it talks to
//! the page only through the [`Surface`] and [`FrameScheduler`] traits.

mod canvas;
mod field;
mod frames;
mod mount;
pub mod palette;
mod particle;
pub mod surface;

pub use canvas::CanvasSurface;
pub use field::{FieldSettings, FieldState, ParticleField};
pub use frames::{AnimationFrames, FrameId, FrameScheduler};
pub use mount::mount;
pub use particle::{Particle, WRAP_MARGIN};
pub use surface::{Size, Surface, SurfaceGeometry};
