//! Drawing surface abstraction and device-pixel-ratio bookkeeping.
//!
//! All drawing happens in logical (CSS) units. The backing buffer is sized
//! in physical pixels and the context carries a uniform `ratio` scale so the
//! two stay in sync. [`resize`] re-establishes that relationship and must run
//! before the first frame and after every viewport resize.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use super::palette::Color;

/// Logical dimensions of a surface, in CSS units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Backing-buffer geometry for a logical size at a given device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
	pub logical: Size,
	pub ratio: f64,
}

impl SurfaceGeometry {
	/// A ratio that is zero, negative or not finite falls back to `1.0`.
	pub fn new(logical: Size, ratio: f64) -> Self {
		let ratio = if ratio.is_finite() && ratio > 0.0 {
			ratio
		} else {
			1.0
		};
		Self { logical, ratio }
	}

	/// Backing buffer size in whole device pixels.
	pub fn physical_size(&self) -> (u32, u32) {
		(
			to_pixels(self.logical.width * self.ratio),
			to_pixels(self.logical.height * self.ratio),
		)
	}
}

fn to_pixels(value: f64) -> u32 {
	// `as` saturates: NaN and negatives become 0
	value as u32
}

/// A 2D immediate-mode drawing target addressed in logical units.
pub trait Surface {
	/// Current layout size of the surface element.
	fn logical_size(&self) -> Size;

	/// Device pixel ratio reported by the host.
	fn device_pixel_ratio(&self) -> f64;

	/// Sets the backing buffer size in physical pixels.
	fn set_backing_size(&mut self, width: u32, height: u32);

	/// Resets the transform to identity, then applies a uniform scale.
	fn reset_scale(&mut self, ratio: f64);

	/// Clears `area`, anchored at the origin.
	fn clear(&mut self, area: Size);

	/// Fills a circle with the given color and global alpha.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);

	fn set_global_alpha(&mut self, alpha: f64);
}

/// Re-syncs the backing buffer and transform with the surface's current
/// logical size and pixel ratio.
pub fn resize<S: Surface + ?Sized>(surface: &mut S) -> SurfaceGeometry {
	let geometry = SurfaceGeometry::new(surface.logical_size(), surface.device_pixel_ratio());
	let (width, height) = geometry.physical_size();
	surface.set_backing_size(width, height);
	surface.reset_scale(geometry.ratio);
	geometry
}
