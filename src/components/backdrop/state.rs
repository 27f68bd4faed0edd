//! Backdrop state: surface, particle field and pointer behind one painter.
//!
//! Created once at startup by [`Backdrop::launch`], then mutated by the
//! resize and pointer listeners and by the animation loop. Everything runs on
//! the browser's main thread, so the owner shares it through `Rc<RefCell<_>>`.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particles::ParticleField;
use super::pointer::Pointer;
use super::render::{self, Painter};
use super::surface::{Surface, Viewport};
use super::theme::Theme;
use super::types::BackdropConfig;

/// Why the backdrop stayed off. None of these are errors for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inert {
	/// `#bg` is missing or is not a `<canvas>`.
	NoCanvas,
	/// The canvas refused a 2D context.
	NoContext,
	/// The user prefers reduced motion.
	ReducedMotion,
}

impl fmt::Display for Inert {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Inert::NoCanvas => f.write_str("no background canvas on the page"),
			Inert::NoContext => f.write_str("2d context unavailable"),
			Inert::ReducedMotion => f.write_str("reduced motion preferred"),
		}
	}
}

pub struct Backdrop<P: Painter> {
	painter: P,
	pub surface: Surface,
	pub field: ParticleField,
	pub pointer: Pointer,
	config: BackdropConfig,
	theme: Theme,
	rng: Pcg32,
}

impl<P: Painter> Backdrop<P> {
	/// Starts the backdrop unless motion is unwanted or no painter can be had.
	///
	/// `acquire` is only called once motion is allowed, and no particle state
	/// exists before it succeeds.
	pub fn launch(
		reduced_motion: bool,
		viewport: Viewport,
		config: BackdropConfig,
		seed: u64,
		acquire: impl FnOnce() -> Option<P>,
	) -> Result<Self, Inert> {
		if reduced_motion {
			return Err(Inert::ReducedMotion);
		}
		let mut painter = acquire().ok_or(Inert::NoContext)?;

		let surface = Surface::measure(viewport, config.max_pixel_ratio);
		painter.resize(&surface);

		let mut rng = Pcg32::seed_from_u64(seed);
		let field = ParticleField::new(&surface, &config, &mut rng);

		Ok(Self {
			painter,
			pointer: Pointer::resting_at(surface.center()),
			surface,
			field,
			config,
			theme: Theme::default(),
			rng,
		})
	}

	/// Re-measures the surface and replaces the population to match it.
	pub fn resize(&mut self, viewport: Viewport) {
		self.surface = Surface::measure(viewport, self.config.max_pixel_ratio);
		self.painter.resize(&self.surface);
		self.field
			.populate(&self.surface, &self.config, &mut self.rng);
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer.moved(x, y);
	}

	pub fn pointer_left(&mut self) {
		self.pointer.left();
	}

	/// Advances and paints one frame. Scheduling the next one is the caller's job.
	pub fn frame(&mut self) {
		render::draw_background(&self.painter, &self.surface, &self.theme);

		let bias = self
			.pointer
			.bias(self.surface.center(), self.config.pointer_pull);
		self.field.update(bias, &self.config);

		render::draw_links(
			&self.painter,
			&self.field.particles,
			&self.config,
			&self.theme,
		);
		render::draw_points(&self.painter, &self.field.particles, &self.theme);
	}

	pub fn painter(&self) -> &P {
		&self.painter
	}
}
