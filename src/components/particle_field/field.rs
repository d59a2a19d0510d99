//! Per-frame update and rendering of the particle field.
//!
//! A frame is a full redraw: clear the surface, step and paint each particle in
//! population order, then stroke the proximity links. There is no incremental
//! diffing; the surface is only ever a function of the current population.

use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::links::LinkScan;
use super::population::Population;
use super::surface::{Surface, Viewport};

/// Owns the surface and the population and knows how to draw one frame.
pub struct ParticleField<S> {
	surface: S,
	config: FieldConfig,
	viewport: Viewport,
	population: Population,
	rng: SmallRng,
}

impl<S: Surface> ParticleField<S> {
	/// Field with an empty population. Call [`ParticleField::resize`] before the
	/// first frame.
	pub fn new(surface: S, config: FieldConfig, rng: SmallRng) -> Self {
		Self {
			surface,
			config,
			viewport: Viewport::default(),
			population: Population::default(),
			rng,
		}
	}

	/// Adopt new viewport dimensions, resize the surface and regenerate.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.surface.resize(viewport);
		self.regenerate();
	}

	/// Replace the whole population with a fresh one sized to the viewport.
	pub fn regenerate(&mut self) {
		let next = Population::generate(
			&mut self.rng,
			self.viewport,
			&self.config,
			self.population.generation() + 1,
		);
		self.population = next;
	}

	/// Draw one frame.
	pub fn frame(&mut self) {
		let Self {
			surface,
			config,
			viewport,
			population,
			..
		} = self;

		surface.clear(viewport.w(), viewport.h());

		for p in population.particles_mut() {
			p.update(*viewport);
			p.draw(surface, config.particle_color);
		}

		let particles = population.particles();
		let style = &config.links;
		LinkScan::for_count(particles.len()).scan(particles, style, |link| {
			let (a, b) = (&particles[link.a], &particles[link.b]);
			surface.stroke_line(
				(a.x, a.y),
				(b.x, b.y),
				style.width,
				style.color.with_alpha(link.opacity),
			);
		});
	}

	/// Dimensions the population was last generated for.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Read-only view of the current population.
	pub fn population(&self) -> &Population {
		&self.population
	}

	/// The drawing target.
	pub fn surface(&self) -> &S {
		&self.surface
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::super::theme::Color;
	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Resize(Viewport),
		Clear,
		Circle,
		Line(f64),
	}

	#[derive(Default)]
	struct Recorder {
		ops: Vec<Op>,
	}

	impl Surface for Recorder {
		fn resize(&mut self, viewport: Viewport) {
			self.ops.push(Op::Resize(viewport));
		}
		fn clear(&mut self, _: f64, _: f64) {
			self.ops.push(Op::Clear);
		}
		fn fill_circle(&mut self, _: f64, _: f64, _: f64, _: Color) {
			self.ops.push(Op::Circle);
		}
		fn stroke_line(&mut self, _: (f64, f64), _: (f64, f64), _: f64, color: Color) {
			self.ops.push(Op::Line(color.a));
		}
	}

	fn field(width: u32, height: u32) -> ParticleField<Recorder> {
		let mut f = ParticleField::new(
			Recorder::default(),
			FieldConfig::default(),
			SmallRng::seed_from_u64(11),
		);
		f.resize(Viewport::new(width, height));
		f
	}

	#[test]
	fn resize_sizes_surface_and_population() {
		let f = field(2000, 1000);
		assert_eq!(f.surface().ops, vec![Op::Resize(Viewport::new(2000, 1000))]);
		assert_eq!(f.population().len(), 100);
		assert_eq!(f.population().generation(), 1);
	}

	#[test]
	fn frame_clears_then_draws_then_links() {
		let mut f = field(400, 300);
		f.frame();

		let ops = &f.surface().ops[1..];
		assert_eq!(ops[0], Op::Clear);
		let circles = ops.iter().filter(|o| **o == Op::Circle).count();
		assert_eq!(circles, 20);

		let first_line = ops.iter().position(|o| matches!(o, Op::Line(_))).unwrap();
		assert!(ops[first_line..].iter().all(|o| matches!(o, Op::Line(_))));
		// Every particle links to itself at full base opacity.
		let self_links = ops
			.iter()
			.filter(|o| matches!(o, Op::Line(a) if (*a - 0.1).abs() < 1e-12))
			.count();
		assert!(self_links >= 20);
	}

	#[test]
	fn regenerate_replaces_population() {
		let mut f = field(400, 300);
		let before = f.population().particles().to_vec();
		f.regenerate();
		assert_eq!(f.population().generation(), 2);
		assert_eq!(f.population().len(), before.len());
		assert_ne!(f.population().particles(), &before[..]);
	}

	#[test]
	fn frame_moves_particles() {
		let mut f = field(400, 300);
		let before = f.population().particles().to_vec();
		f.frame();
		let moved = f
			.population()
			.particles()
			.iter()
			.zip(&before)
			.filter(|(now, was)| now.x != was.x || now.y != was.y)
			.count();
		assert!(moved > 0);
	}
}
