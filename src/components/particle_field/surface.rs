//! Drawing target abstraction.
//!
//! The field only ever clears, fills circles and strokes lines, so that is all
//! a surface has to offer. The browser implementation lives in `canvas.rs`.

use super::theme::Color;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
}

impl Viewport {
	/// Viewport of the given size.
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Width as a surface coordinate.
	pub fn w(self) -> f64 {
		self.width as f64
	}

	/// Height as a surface coordinate.
	pub fn h(self) -> f64 {
		self.height as f64
	}
}

/// A 2D pixel target the field redraws from scratch every frame.
pub trait Surface {
	/// Match the backing store to the viewport.
	fn resize(&mut self, viewport: Viewport);
	/// Erase the rectangle `(0, 0) .. (width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	/// Paint a filled circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}
