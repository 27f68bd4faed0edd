//! Ambient particle field: population, motion and edge wrapping.

use rand::Rng;

use super::surface::Surface;
use super::types::BackdropConfig;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub r: f64,
}

/// Uniform sample in `[min, max)`. Unlike `random_range`, an empty range
/// yields `min` instead of panicking (zero-sized surfaces).
fn sample(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
	min + rng.random::<f64>() * (max - min)
}

/// Owns the particle set and the bounds it wraps within.
#[derive(Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Number of particles for a surface of `area` CSS px².
	pub fn target_count(area: f64, config: &BackdropConfig) -> usize {
		let raw = (area / config.density).floor().max(0.0) as usize;
		raw.clamp(config.min_particles, config.max_particles.max(config.min_particles))
	}

	pub fn new(surface: &Surface, config: &BackdropConfig, rng: &mut impl Rng) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width: surface.width,
			height: surface.height,
		};
		field.populate(surface, config, rng);
		field
	}

	/// Replaces the whole population with a fresh one sized to `surface`.
	pub fn populate(&mut self, surface: &Surface, config: &BackdropConfig, rng: &mut impl Rng) {
		self.width = surface.width;
		self.height = surface.height;

		let count = Self::target_count(surface.area(), config);
		self.particles = (0..count)
			.map(|_| Particle {
				x: sample(rng, 0.0, surface.width),
				y: sample(rng, 0.0, surface.height),
				vx: sample(rng, -config.max_speed, config.max_speed),
				vy: sample(rng, -config.max_speed, config.max_speed),
				r: sample(rng, config.radius_min, config.radius_max),
			})
			.collect();
	}

	/// Advances every particle by one frame: bias, damping, integration, wrap.
	pub fn update(&mut self, bias: (f64, f64), config: &BackdropConfig) {
		for p in &mut self.particles {
			p.vx += bias.0;
			p.vy += bias.1;

			p.vx *= config.damping;
			p.vy *= config.damping;

			p.x += p.vx;
			p.y += p.vy;

			Self::wrap(p, self.width, self.height, config.wrap_margin);
		}
	}

	/// Teleports a particle that has drifted more than `margin` past an edge
	/// to the same margin beyond the opposite edge.
	pub fn wrap(p: &mut Particle, width: f64, height: f64, margin: f64) {
		if p.x < -margin {
			p.x = width + margin;
		} else if p.x > width + margin {
			p.x = -margin;
		}
		if p.y < -margin {
			p.y = height + margin;
		} else if p.y > height + margin {
			p.y = -margin;
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
