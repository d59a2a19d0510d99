//! particle-field: ambient particle background for a single-page site.
//!
//! This crate provides a WASM canvas component that animates a field of
//! drifting particles joined by faint proximity links, sized to the viewport
//! and regenerated whenever the window is resized.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	Color, FieldConfig, FieldController, FrameHandle, Host, LifecycleState, Particle,
	ParticleField, ParticleFieldCanvas, Population, ResizeHandle, Surface, Viewport,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Parse a field configuration document.
///
/// Missing fields keep their defaults; malformed JSON or out-of-range values
/// are logged and yield `None`.
pub fn parse_field_config(json: &str) -> Option<FieldConfig> {
	match serde_json::from_str::<FieldConfig>(json) {
		Ok(config) => {
			if let Err(e) = config.validate() {
				warn!("particle-field: rejected config: {}", e);
				return None;
			}
			info!(
				"particle-field: loaded config (density {}, cap {})",
				config.sizing.density, config.sizing.cap
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Load field configuration from a script element with id="field-config".
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	parse_field_config(&json_text)
}

/// Main application component.
/// Renders the particle background beneath a title overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas config=config />
		<div class="field-overlay">
			<h1>"Particle Field"</h1>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_config_is_rejected() {
		assert!(parse_field_config("{ not json").is_none());
	}

	#[test]
	fn zero_threshold_config_is_rejected() {
		assert!(parse_field_config(r#"{ "links": { "threshold": 0 } }"#).is_none());
		assert!(parse_field_config(r#"{ "links": { "fade_distance": -5 } }"#).is_none());
	}

	#[test]
	fn tiny_threshold_with_raised_cap_is_accepted() {
		let cfg = parse_field_config(r#"{"sizing":{"cap":200},"links":{"threshold":1e-9}}"#)
			.unwrap();
		assert_eq!(cfg.sizing.cap, 200);
	}

	#[test]
	fn config_overrides_apply() {
		let cfg = parse_field_config(r#"{ "particle_color": { "r": 255, "g": 0, "b": 0, "a": 0.3 } }"#)
			.unwrap();
		assert_eq!(cfg.particle_color, Color::rgba(255, 0, 0, 0.3));
		assert_eq!(cfg.sizing.cap, 100);
	}
}
