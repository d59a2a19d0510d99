//! A single drifting point of light.

use rand::Rng;

use super::config::MotionStyle;
use super::surface::{Surface, Viewport};
use super::theme::Color;

/// One moving particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface space.
	pub x: f64,
	/// Vertical position in surface space.
	pub y: f64,
	/// Horizontal velocity, units per tick.
	pub vx: f64,
	/// Vertical velocity, units per tick.
	pub vy: f64,
	/// Fixed at spawn, in `[0, max_radius)`.
	pub radius: f64,
}

impl Particle {
	/// Spawn at a uniformly random position inside `viewport`.
	pub fn spawn<R: Rng>(rng: &mut R, viewport: Viewport, motion: &MotionStyle) -> Self {
		Self {
			x: rng.r#gen::<f64>() * viewport.w(),
			y: rng.r#gen::<f64>() * viewport.h(),
			vx: signed_unit(rng) * motion.max_speed,
			vy: signed_unit(rng) * motion.max_speed,
			radius: rng.r#gen::<f64>() * motion.max_radius,
		}
	}

	/// Advance one tick.
	///
	/// Velocity is negated once the new position is outside the viewport; the
	/// position itself is never clamped, so a particle may sit up to one step
	/// past the edge before it heads back.
	pub fn update(&mut self, viewport: Viewport) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > viewport.w() {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > viewport.h() {
			self.vy = -self.vy;
		}
	}

	/// Paint as a filled circle.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Color) {
		surface.fill_circle(self.x, self.y, self.radius, color);
	}

	/// Euclidean distance to `other`.
	pub fn distance(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Uniform in `[-1, 1)`.
fn signed_unit<R: Rng>(rng: &mut R) -> f64 {
	rng.r#gen::<f64>() * 2.0 - 1.0
}
