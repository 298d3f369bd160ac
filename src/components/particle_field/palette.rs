//! Particle colors.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Translucent neon palette the background particles draw from.
pub const PARTICLE_PALETTE: [Color; 4] = [
	Color::rgba(0, 224, 255, 0.65), // Cyan
	Color::rgba(255, 0, 255, 0.55), // Magenta
	Color::rgba(0, 255, 168, 0.5),  // Mint
	Color::rgba(127, 93, 255, 0.45), // Violet
];
