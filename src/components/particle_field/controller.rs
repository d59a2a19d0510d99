//! Mount/resize/unmount lifecycle and the self-rescheduling frame loop.
//!
//! The controller owns everything a running field needs: the field itself, the
//! host that delivers frames and resize events, the pending frame handle and
//! the stop token. Nothing lives in module scope, so any number of controllers
//! can run side by side.
//!
//! Callbacks handed to the host only hold `Weak` references to the runtime.
//! Dropping the controller therefore frees the field even if the host still
//! has a callback registered.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::field::ParticleField;
use super::surface::{Surface, Viewport};

/// Identifier returned by [`Host::request_frame`].
pub type FrameHandle = i32;

/// Environment the controller runs in: viewport size, frame scheduling and
/// resize notifications.
pub trait Host {
	/// Current viewport size, if it can be read.
	fn viewport(&self) -> Option<Viewport>;
	/// Install (or with `None`, release) the callback run on each frame.
	fn set_frame_callback(&self, callback: Option<Rc<dyn Fn()>>);
	/// Ask for the frame callback to run once on the next frame.
	fn request_frame(&self) -> Option<FrameHandle>;
	/// Withdraw a request made with [`Host::request_frame`].
	fn cancel_frame(&self, handle: FrameHandle);
	/// Install (or with `None`, remove) the viewport resize listener.
	fn set_resize_listener(&self, listener: Option<Rc<dyn Fn()>>);
}

/// Shared flag deciding whether a frame loop keeps going.
///
/// Each mount gets its own token; a frame that fires with a stopped token
/// returns without touching the surface. The controller reports `Running`
/// exactly while its current token is live.
#[derive(Clone, Debug)]
struct StopToken(Rc<Cell<bool>>);

impl StopToken {
	fn new() -> Self {
		Self(Rc::new(Cell::new(false)))
	}

	fn stopped() -> Self {
		Self(Rc::new(Cell::new(true)))
	}

	fn stop(&self) {
		self.0.set(true);
	}

	fn is_stopped(&self) -> bool {
		self.0.get()
	}
}

/// Lifecycle state of a [`FieldController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
	/// Not drawing. Initial and final state.
	Stopped,
	/// Frame loop scheduled and resize listener installed.
	Running,
}

struct FieldRuntime<S, H> {
	field: RefCell<ParticleField<S>>,
	host: H,
	stop: RefCell<StopToken>,
	frame: Cell<Option<FrameHandle>>,
	/// Resize that arrived while a frame held the field.
	pending_resize: Cell<Option<Viewport>>,
}

impl<S: Surface, H: Host> FieldRuntime<S, H> {
	fn is_running(&self) -> bool {
		!self.stop.borrow().is_stopped()
	}

	fn tick(&self, token: &StopToken) {
		self.frame.set(None);

		match self.field.try_borrow_mut() {
			Ok(mut field) => {
				if let Some(viewport) = self.pending_resize.take() {
					field.resize(viewport);
				}
				field.frame();
			}
			Err(_) => warn!("particle-field: frame skipped, field busy"),
		}

		if !token.is_stopped() {
			self.schedule();
		}
	}

	fn schedule(&self) {
		match self.host.request_frame() {
			Some(handle) => self.frame.set(Some(handle)),
			None => {
				warn!("particle-field: requestAnimationFrame failed, stopping");
				self.release();
			}
		}
	}

	/// Trip the stop token and hand every callback back to the host.
	fn release(&self) {
		self.stop.borrow().stop();
		if let Some(handle) = self.frame.take() {
			self.host.cancel_frame(handle);
		}
		self.host.set_resize_listener(None);
		self.host.set_frame_callback(None);
		self.pending_resize.set(None);
	}

	fn apply_resize(&self, viewport: Viewport) {
		if !self.is_running() {
			return;
		}
		match self.field.try_borrow_mut() {
			Ok(mut field) => {
				field.resize(viewport);
				debug!(
					"particle-field: resized to {}x{}, {} particles",
					viewport.width,
					viewport.height,
					field.population().len()
				);
			}
			// Called from inside a frame: the next frame picks it up before
			// reading the population.
			Err(_) => self.pending_resize.set(Some(viewport)),
		}
	}
}

trait Resize {
	fn resize(&self, viewport: Viewport);
}

impl<S: Surface, H: Host> Resize for FieldRuntime<S, H> {
	fn resize(&self, viewport: Viewport) {
		self.apply_resize(viewport);
	}
}

/// Non-owning handle that forwards viewport changes to a controller.
///
/// Does nothing once the controller is gone or stopped.
#[derive(Clone)]
pub struct ResizeHandle(Weak<dyn Resize>);

impl ResizeHandle {
	/// Resize and regenerate the field.
	pub fn resize(&self, viewport: Viewport) {
		if let Some(runtime) = self.0.upgrade() {
			runtime.resize(viewport);
		}
	}
}

/// Drives a [`ParticleField`] through `Stopped → Running → Stopped`.
pub struct FieldController<S: Surface + 'static, H: Host + 'static> {
	runtime: Rc<FieldRuntime<S, H>>,
}

impl<S: Surface + 'static, H: Host + 'static> FieldController<S, H> {
	/// A stopped controller. Nothing is drawn until [`FieldController::mount`].
	pub fn new(surface: S, host: H, config: FieldConfig, rng: SmallRng) -> Self {
		Self {
			runtime: Rc::new(FieldRuntime {
				field: RefCell::new(ParticleField::new(surface, config, rng)),
				host,
				stop: RefCell::new(StopToken::stopped()),
				frame: Cell::new(None),
				pending_resize: Cell::new(None),
			}),
		}
	}

	/// `Running` while the frame loop is alive.
	pub fn state(&self) -> LifecycleState {
		if self.runtime.is_running() {
			LifecycleState::Running
		} else {
			LifecycleState::Stopped
		}
	}

	/// Size the surface, populate it, start the frame loop and listen for
	/// viewport changes.
	pub fn mount(&mut self) {
		if self.runtime.is_running() {
			debug!("particle-field: already mounted");
			return;
		}
		let Some(viewport) = self.runtime.host.viewport() else {
			warn!("particle-field: viewport unavailable, not mounting");
			return;
		};

		self.runtime.pending_resize.set(None);
		{
			let mut field = self.runtime.field.borrow_mut();
			field.resize(viewport);
			info!(
				"particle-field: mounted at {}x{} with {} particles",
				viewport.width,
				viewport.height,
				field.population().len()
			);
		}

		let token = StopToken::new();
		*self.runtime.stop.borrow_mut() = token.clone();

		let weak = Rc::downgrade(&self.runtime);
		let tick: Rc<dyn Fn()> = Rc::new(move || {
			if token.is_stopped() {
				return;
			}
			if let Some(runtime) = weak.upgrade() {
				runtime.tick(&token);
			}
		});
		self.runtime.host.set_frame_callback(Some(tick));

		let weak = Rc::downgrade(&self.runtime);
		let on_resize: Rc<dyn Fn()> = Rc::new(move || {
			let Some(runtime) = weak.upgrade() else {
				return;
			};
			if let Some(viewport) = runtime.host.viewport() {
				runtime.apply_resize(viewport);
			}
		});
		self.runtime.host.set_resize_listener(Some(on_resize));

		self.runtime.schedule();
	}

	/// Apply a new viewport size without restarting the loop.
	pub fn resize(&self, viewport: Viewport) {
		self.runtime.apply_resize(viewport);
	}

	/// Handle for resizing from code that cannot hold the controller.
	pub fn resize_handle(&self) -> ResizeHandle {
		let weak: Weak<dyn Resize> = Rc::downgrade(&self.runtime) as Weak<dyn Resize>;
		ResizeHandle(weak)
	}

	/// Stop drawing, cancel the pending frame and remove the resize listener.
	/// Safe to call more than once.
	pub fn unmount(&mut self) {
		if !self.runtime.is_running() {
			return;
		}
		self.runtime.release();
		info!("particle-field: unmounted");
	}

	/// Borrow the field, e.g. to inspect the population.
	///
	/// Panics if called from inside a frame.
	pub fn with_field<T>(&self, f: impl FnOnce(&ParticleField<S>) -> T) -> T {
		f(&self.runtime.field.borrow())
	}
}

impl<S: Surface + 'static, H: Host + 'static> Drop for FieldController<S, H> {
	fn drop(&mut self) {
		self.unmount();
	}
}
