//! Ambient particle field background.
//!
//! Renders a slowly drifting set of particles on a full-viewport canvas and
//! links every pair closer than a threshold with a faint line:
//! - Population sized to viewport width and regenerated wholesale on resize
//! - Euler integration with velocity reflection at the viewport edges
//! - Direct pairwise link scan, switching to grid buckets for large populations
//! - Cancellable `requestAnimationFrame` loop owned by a lifecycle controller
//!
//! The simulation and the loop are independent of the DOM: they talk to the
//! browser through [`Surface`] and [`Host`], which lets them run natively in
//! tests.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::ParticleFieldCanvas;
//!
//! view! { <ParticleFieldCanvas /> }
//! ```

mod canvas;
mod component;
pub mod config;
mod controller;
mod field;
mod host;
pub mod links;
mod particle;
mod population;
mod surface;
pub mod theme;

pub use canvas::CanvasSurface;
pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use controller::{FieldController, FrameHandle, Host, LifecycleState, ResizeHandle};
pub use field::ParticleField;
pub use host::BrowserHost;
pub use particle::Particle;
pub use population::Population;
pub use surface::{Surface, Viewport};
pub use theme::Color;
