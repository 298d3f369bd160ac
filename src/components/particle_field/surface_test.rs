use super::*;

#[derive(Default)]
struct FakeCanvas {
	logical: Size,
	ratio: f64,
	backing: (u32, u32),
	scale: Option<f64>,
	scale_calls: usize,
}

impl Surface for FakeCanvas {
	fn logical_size(&self) -> Size {
		self.logical
	}

	fn device_pixel_ratio(&self) -> f64 {
		self.ratio
	}

	fn set_backing_size(&mut self, width: u32, height: u32) {
		self.backing = (width, height);
	}

	fn reset_scale(&mut self, ratio: f64) {
		// Reset then scale: the result never compounds.
		self.scale = Some(ratio);
		self.scale_calls += 1;
	}

	fn clear(&mut self, _area: Size) {}

	fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Color, _alpha: f64) {}

	fn set_global_alpha(&mut self, _alpha: f64) {}
}

#[test]
fn physical_size_scales_by_ratio() {
	let geometry = SurfaceGeometry::new(Size::new(800.0, 600.0), 2.0);
	assert_eq!(geometry.physical_size(), (1600, 1200));
}

#[test]
fn physical_size_truncates_fractional_pixels() {
	let geometry = SurfaceGeometry::new(Size::new(333.0, 101.0), 1.5);
	assert_eq!(geometry.physical_size(), (499, 151));
}

#[test]
fn invalid_ratio_falls_back_to_one() {
	for ratio in [0.0, -2.0, f64::NAN, f64::INFINITY] {
		let geometry = SurfaceGeometry::new(Size::new(10.0, 20.0), ratio);
		assert_eq!(geometry.ratio, 1.0);
		assert_eq!(geometry.physical_size(), (10, 20));
	}
}

#[test]
fn zero_sized_surface_has_empty_backing() {
	let geometry = SurfaceGeometry::new(Size::default(), 3.0);
	assert_eq!(geometry.physical_size(), (0, 0));
}

#[test]
fn resize_syncs_backing_and_scale() {
	let mut canvas = FakeCanvas {
		logical: Size::new(640.0, 480.0),
		ratio: 1.25,
		..FakeCanvas::default()
	};
	let geometry = resize(&mut canvas);
	assert_eq!(geometry.logical, Size::new(640.0, 480.0));
	assert_eq!(canvas.backing, (800, 600));
	assert_eq!(canvas.scale, Some(1.25));
}

#[test]
fn resize_is_idempotent() {
	let mut canvas = FakeCanvas {
		logical: Size::new(640.0, 480.0),
		ratio: 2.0,
		..FakeCanvas::default()
	};
	let first = resize(&mut canvas);
	let second = resize(&mut canvas);
	assert_eq!(first, second);
	assert_eq!(canvas.backing, (1280, 960));
	assert_eq!(canvas.scale, Some(2.0));
	assert_eq!(canvas.scale_calls, 2);
}

#[test]
fn resize_tracks_new_logical_size() {
	let mut canvas = FakeCanvas {
		logical: Size::new(640.0, 480.0),
		ratio: 1.0,
		..FakeCanvas::default()
	};
	resize(&mut canvas);
	canvas.logical = Size::new(1024.0, 768.0);
	canvas.ratio = 2.0;
	resize(&mut canvas);
	assert_eq!(canvas.backing, (2048, 1536));
	assert_eq!(canvas.scale, Some(2.0));
}
