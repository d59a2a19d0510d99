//! Colors used by the particle field.

use serde::Deserialize;

/// Accent cyan used for particles and links.
pub const ACCENT: Color = Color::rgb(0, 242, 234);

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Fully opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string, `#rrggbb` when opaque and `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(ACCENT.to_css(), "#00f2ea");
	}

	#[test]
	fn css_uses_rgba_when_translucent() {
		assert_eq!(ACCENT.with_alpha(0.5).to_css(), "rgba(0, 242, 234, 0.5)");
	}

	#[test]
	fn alpha_defaults_to_opaque_when_omitted() {
		let c: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
		assert_eq!(c, Color::rgb(1, 2, 3));
	}
}
