//! The set of particles currently on screen.

use rand::Rng;

use super::config::FieldConfig;
use super::particle::Particle;
use super::surface::Viewport;

/// Ordered particle collection sized to a viewport.
///
/// A population is never grown or shrunk in place. Resizing builds a new one
/// with the next `generation` and the old value is dropped in one assignment.
#[derive(Clone, Debug, Default)]
pub struct Population {
	generation: u64,
	particles: Vec<Particle>,
}

impl Population {
	/// Fresh population for `viewport`, sized by `config.sizing`.
	pub fn generate<R: Rng>(
		rng: &mut R,
		viewport: Viewport,
		config: &FieldConfig,
		generation: u64,
	) -> Self {
		let count = config.sizing.count(viewport.width);
		let particles = (0..count)
			.map(|_| Particle::spawn(rng, viewport, &config.motion))
			.collect();
		Self {
			generation,
			particles,
		}
	}

	/// Increments every time the field regenerates.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True when the viewport is too narrow for any particle.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn size_follows_viewport_width() {
		let mut rng = SmallRng::seed_from_u64(1);
		let config = FieldConfig::default();

		let wide = Population::generate(&mut rng, Viewport::new(2000, 900), &config, 1);
		assert_eq!(wide.len(), 100);

		let narrow = Population::generate(&mut rng, Viewport::new(200, 900), &config, 2);
		assert_eq!(narrow.len(), 10);
		assert_eq!(narrow.generation(), 2);
	}

	#[test]
	fn empty_viewport_yields_empty_population() {
		let mut rng = SmallRng::seed_from_u64(1);
		let pop = Population::generate(&mut rng, Viewport::new(0, 0), &FieldConfig::default(), 0);
		assert!(pop.is_empty());
	}

	#[test]
	fn particles_start_inside_viewport() {
		let mut rng = SmallRng::seed_from_u64(9);
		let viewport = Viewport::new(1280, 720);
		let pop = Population::generate(&mut rng, viewport, &FieldConfig::default(), 0);
		assert_eq!(pop.len(), 64);
		for p in pop.particles() {
			assert!(p.x >= 0.0 && p.x < 1280.0);
			assert!(p.y >= 0.0 && p.y < 720.0);
		}
	}
}
