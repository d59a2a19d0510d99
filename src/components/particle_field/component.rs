//! Leptos component hosting the particle field behind the page.
//!
//! The canvas is fixed to the viewport, sits beneath all other content at
//! reduced opacity and ignores pointer events. Mounting happens once the
//! canvas node exists; the controller is unmounted when the component's
//! owner is cleaned up.

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::HtmlCanvasElement;

use super::canvas::CanvasSurface;
use super::config::FieldConfig;
use super::controller::FieldController;
use super::host::BrowserHost;

type BrowserController = FieldController<CanvasSurface, BrowserHost>;

fn entropy_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Full-viewport animated particle background.
///
/// If the canvas context or the window is unavailable the component renders
/// an empty canvas and logs a warning; it never panics.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let controller = StoredValue::new_local(None::<BrowserController>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let Some(surface) = CanvasSurface::from_canvas(canvas) else {
			return;
		};
		let Some(host) = BrowserHost::new() else {
			warn!("particle-field: no window, not animating");
			return;
		};

		let mut field = FieldController::new(
			surface,
			host,
			config.clone(),
			SmallRng::seed_from_u64(entropy_seed()),
		);
		field.mount();
		controller.set_value(Some(field));
	});

	on_cleanup(move || {
		let _ = controller.try_update_value(|c| {
			if let Some(mut c) = c.take() {
				c.unmount();
			}
		});
	});

	view! {
		<div
			class="particle-field"
			style="position: fixed; inset: 0; z-index: -10; opacity: 0.6; pointer-events: none;"
		>
			<canvas node_ref=canvas_ref style="display: block;" />
		</div>
	}
}
