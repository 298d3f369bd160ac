//! `<canvas>` 2D context adapter.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::palette::Color;
use super::surface::{Size, Surface};
use crate::error::HostError;

/// A canvas element paired with its 2D rendering context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Returns `None` when the canvas cannot provide a 2D context.
	pub fn attach(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()??
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}

	/// Looks up the canvas with the given id and attaches to it.
	pub fn find(document: &Document, id: &str) -> Result<Self, HostError> {
		let element = document
			.get_element_by_id(id)
			.ok_or_else(|| HostError::MissingElement(format!("#{id}")))?;
		let canvas: HtmlCanvasElement = element
			.dyn_into()
			.map_err(|_| HostError::WrongElement(format!("#{id}"), "canvas"))?;
		Self::attach(canvas).ok_or(HostError::NoDrawingContext)
	}
}

impl Surface for CanvasSurface {
	fn logical_size(&self) -> Size {
		Size::new(
			self.canvas.offset_width() as f64,
			self.canvas.offset_height() as f64,
		)
	}

	fn device_pixel_ratio(&self) -> f64 {
		web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
	}

	fn set_backing_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn reset_scale(&mut self, ratio: f64) {
		let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
		let _ = self.ctx.scale(ratio, ratio);
	}

	fn clear(&mut self, area: Size) {
		self.ctx.clear_rect(0.0, 0.0, area.width, area.height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.ctx.begin_path();
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.set_global_alpha(alpha);
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
		self.ctx.close_path();
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
	}
}
