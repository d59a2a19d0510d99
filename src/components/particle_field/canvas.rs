//! [`Surface`] backed by an HTML canvas 2D context.

use std::f64::consts::PI;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Surface, Viewport};
use super::theme::Color;

/// Canvas element plus its 2D rendering context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context of `canvas`.
	///
	/// Returns `None` (and logs) when the browser will not hand out a context;
	/// callers should then render nothing.
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx,
			Ok(None) => {
				warn!("particle-field: 2d context unavailable");
				return None;
			}
			Err(e) => {
				warn!("particle-field: get_context failed: {:?}", e);
				return None;
			}
		};
		let ctx: CanvasRenderingContext2d = ctx.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}

	/// The underlying canvas element.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, viewport: Viewport) {
		self.canvas.set_width(viewport.width);
		self.canvas.set_height(viewport.height);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ctx.begin_path();
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}
