//! Tunable parameters for the particle field.
//!
//! Defaults reproduce the reference look: one particle per 20px of viewport
//! width capped at 100, slow drift, and faint cyan links under 150px.
//! Every section is `#[serde(default)]` so a page can override a single value
//! without restating the rest.

use serde::Deserialize;

use super::theme::{ACCENT, Color};

/// How many particles a viewport gets.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizingPolicy {
	/// Particles per unit of viewport width.
	pub density: f64,
	/// Upper bound on the population.
	///
	/// Raising this past [`super::links::DIRECT_SCAN_LIMIT`] switches the link
	/// pass to grid buckets.
	pub cap: usize,
}

impl Default for SizingPolicy {
	fn default() -> Self {
		Self {
			density: 0.05,
			cap: 100,
		}
	}
}

impl SizingPolicy {
	/// `min(floor(width * density), cap)`.
	pub fn count(&self, width: u32) -> usize {
		let raw = (width as f64 * self.density).floor();
		if raw <= 0.0 {
			return 0;
		}
		(raw as usize).min(self.cap)
	}
}

/// Initial motion ranges for spawned particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionStyle {
	/// Velocity components are drawn from `[-max_speed, max_speed)` units/tick.
	pub max_speed: f64,
	/// Radii are drawn from `[0, max_radius)`.
	pub max_radius: f64,
}

impl Default for MotionStyle {
	fn default() -> Self {
		Self {
			max_speed: 0.25,
			max_radius: 2.0,
		}
	}
}

/// Proximity link appearance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Pairs at or beyond this distance are never linked.
	pub threshold: f64,
	/// Opacity of a zero-length link.
	pub base_opacity: f64,
	/// Opacity lost per unit of distance is `1 / fade_distance`.
	pub fade_distance: f64,
	/// Stroke width.
	pub width: f64,
	/// Stroke color; alpha is replaced per link.
	pub color: Color,
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			threshold: 150.0,
			base_opacity: 0.1,
			fade_distance: 1500.0,
			width: 0.5,
			color: ACCENT,
		}
	}
}

/// Complete field configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Population sizing.
	pub sizing: SizingPolicy,
	/// Spawn ranges.
	pub motion: MotionStyle,
	/// Particle fill color.
	pub particle_color: Color,
	/// Link appearance.
	pub links: LinkStyle,
}

impl FieldConfig {
	/// Reject values the field cannot animate with.
	pub fn validate(&self) -> Result<(), String> {
		let positive = |name: &str, v: f64| {
			if v.is_finite() && v > 0.0 {
				Ok(())
			} else {
				Err(format!("{} must be positive and finite, got {}", name, v))
			}
		};
		let non_negative = |name: &str, v: f64| {
			if v.is_finite() && v >= 0.0 {
				Ok(())
			} else {
				Err(format!("{} must be non-negative and finite, got {}", name, v))
			}
		};

		positive("links.threshold", self.links.threshold)?;
		positive("links.fade_distance", self.links.fade_distance)?;
		non_negative("links.width", self.links.width)?;
		non_negative("sizing.density", self.sizing.density)?;
		non_negative("motion.max_speed", self.motion.max_speed)?;
		non_negative("motion.max_radius", self.motion.max_radius)
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			sizing: SizingPolicy::default(),
			motion: MotionStyle::default(),
			particle_color: ACCENT.with_alpha(0.5),
			links: LinkStyle::default(),
		}
	}
}
