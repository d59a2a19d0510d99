//! [`Host`] backed by the browser window.
//!
//! Frames come from `requestAnimationFrame` and viewport changes from the
//! window `resize` event. The JS closures are kept here so they live exactly
//! as long as the controller has them installed.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::controller::{FrameHandle, Host};
use super::surface::Viewport;

/// Window-backed frame clock and resize source.
pub struct BrowserHost {
	window: Window,
	frame_cb: RefCell<Option<Closure<dyn FnMut()>>>,
	resize_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl BrowserHost {
	/// Host for the global `window`, if there is one.
	pub fn new() -> Option<Self> {
		let window = web_sys::window()?;
		Some(Self {
			window,
			frame_cb: RefCell::new(None),
			resize_cb: RefCell::new(None),
		})
	}
}

impl Host for BrowserHost {
	fn viewport(&self) -> Option<Viewport> {
		let width = self.window.inner_width().ok()?.as_f64()?;
		let height = self.window.inner_height().ok()?.as_f64()?;
		Some(Viewport::new(width.max(0.0) as u32, height.max(0.0) as u32))
	}

	fn set_frame_callback(&self, callback: Option<Rc<dyn Fn()>>) {
		*self.frame_cb.borrow_mut() = callback.map(|cb| Closure::new(move || cb()));
	}

	fn request_frame(&self) -> Option<FrameHandle> {
		let cb = self.frame_cb.borrow();
		let cb = cb.as_ref()?;
		match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(handle) => Some(handle),
			Err(e) => {
				warn!("particle-field: requestAnimationFrame: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn set_resize_listener(&self, listener: Option<Rc<dyn Fn()>>) {
		if let Some(old) = self.resize_cb.borrow_mut().take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", old.as_ref().unchecked_ref());
		}
		let Some(listener) = listener else {
			return;
		};
		let cb: Closure<dyn FnMut()> = Closure::new(move || listener());
		let _ = self
			.window
			.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		*self.resize_cb.borrow_mut() = Some(cb);
	}
}

impl Drop for BrowserHost {
	fn drop(&mut self) {
		self.set_resize_listener(None);
	}
}
