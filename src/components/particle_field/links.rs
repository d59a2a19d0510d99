//! Proximity links between nearby particles.
//!
//! Every unordered pair `(i, j)` with `i <= j` closer than the threshold gets a
//! line whose opacity falls off linearly with distance. With the default cap of
//! 100 particles the direct O(n²) scan is cheap enough to run every frame.
//! Larger populations are bucketed into a uniform grid whose cell size equals
//! the threshold, so only the 3×3 neighbourhood of each particle is examined.

use std::collections::HashMap;

use super::config::LinkStyle;
use super::particle::Particle;

/// Populations above this size use [`LinkScan::Grid`].
pub const DIRECT_SCAN_LIMIT: usize = 100;

/// Cell coordinates are clamped to this magnitude so neighbour offsets never
/// overflow. Clamping only merges far-away cells; the exact distance check
/// still decides every link.
const CELL_LIMIT: f64 = 1e12;

/// One link to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle (`a <= b`).
	pub a: usize,
	/// Index of the second particle.
	pub b: usize,
	/// Stroke alpha.
	pub opacity: f64,
}

/// Opacity for a link of length `distance`, or `None` when no link is drawn.
///
/// A link exists iff `distance < threshold`; its opacity is
/// `max(0, base_opacity - distance / fade_distance)`.
pub fn link_opacity(distance: f64, style: &LinkStyle) -> Option<f64> {
	if distance < style.threshold {
		Some((style.base_opacity - distance / style.fade_distance).max(0.0))
	} else {
		None
	}
}

/// Pair enumeration strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkScan {
	/// Check every pair.
	Direct,
	/// Bucket particles into threshold-sized cells first.
	Grid,
}

impl LinkScan {
	/// Strategy for a population of `count` particles.
	pub fn for_count(count: usize) -> Self {
		if count > DIRECT_SCAN_LIMIT {
			LinkScan::Grid
		} else {
			LinkScan::Direct
		}
	}

	/// Call `emit` for every link among `particles`.
	pub fn scan<F: FnMut(Link)>(self, particles: &[Particle], style: &LinkStyle, emit: F) {
		match self {
			LinkScan::Direct => scan_direct(particles, style, emit),
			LinkScan::Grid => scan_grid(particles, style, emit),
		}
	}
}

fn scan_direct<F: FnMut(Link)>(particles: &[Particle], style: &LinkStyle, mut emit: F) {
	for (a, pa) in particles.iter().enumerate() {
		for (b, pb) in particles.iter().enumerate().skip(a) {
			if let Some(opacity) = link_opacity(pa.distance(pb), style) {
				emit(Link { a, b, opacity });
			}
		}
	}
}

fn scan_grid<F: FnMut(Link)>(particles: &[Particle], style: &LinkStyle, mut emit: F) {
	if style.threshold.is_nan() || style.threshold <= 0.0 {
		return;
	}

	let axis = |v: f64| (v / style.threshold).floor().clamp(-CELL_LIMIT, CELL_LIMIT) as i64;
	let cell_of = |p: &Particle| (axis(p.x), axis(p.y));

	let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
	for (i, p) in particles.iter().enumerate() {
		cells.entry(cell_of(p)).or_default().push(i);
	}

	for (a, pa) in particles.iter().enumerate() {
		let (cx, cy) = cell_of(pa);
		for dx in -1..=1 {
			for dy in -1..=1 {
				let Some(bucket) = cells.get(&(cx + dx, cy + dy)) else {
					continue;
				};
				for &b in bucket {
					if b < a {
						continue;
					}
					if let Some(opacity) = link_opacity(pa.distance(&particles[b]), style) {
						emit(Link { a, b, opacity });
					}
				}
			}
		}
	}
}
