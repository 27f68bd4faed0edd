//! Frame drawing for the backdrop.
//!
//! A frame is painted in passes, back to front:
//! 1. Clear and ambient radial wash
//! 2. Proximity links between nearby particles
//! 3. Particle points
//!
//! All drawing goes through [`Painter`] so the passes can run against a
//! recording painter off the browser.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::Particle;
use super::surface::Surface;
use super::theme::{Theme, WashStyle};
use super::types::BackdropConfig;

/// Drawing operations the backdrop needs from a 2D surface.
pub trait Painter {
	/// Resizes the backing store and installs the pixel-ratio transform.
	fn resize(&mut self, surface: &Surface);
	fn clear(&self, width: f64, height: f64);
	fn fill_wash(&self, wash: &WashStyle, width: f64, height: f64);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	fn fill_circle(&self, x: f64, y: f64, r: f64, color: &str);
}

/// Link opacity for a pair `distance` apart: linear fade from `peak` at zero
/// to nothing at `max_distance` and beyond.
pub fn link_alpha(distance: f64, max_distance: f64, peak: f64) -> f64 {
	if distance >= max_distance {
		return 0.0;
	}
	peak * (1.0 - distance / max_distance)
}

/// Unordered pairs `(i, j)`, `i < j`, closer than `max_distance`, with their distance.
pub fn links(particles: &[Particle], max_distance: f64) -> Vec<(usize, usize, f64)> {
	let mut out = Vec::new();
	for (i, a) in particles.iter().enumerate() {
		for (j, b) in particles.iter().enumerate().skip(i + 1) {
			let d = (a.x - b.x).hypot(a.y - b.y);
			if d < max_distance {
				out.push((i, j, d));
			}
		}
	}
	out
}

pub fn draw_background(painter: &impl Painter, surface: &Surface, theme: &Theme) {
	painter.clear(surface.width, surface.height);
	painter.fill_wash(&theme.wash, surface.width, surface.height);
}

pub fn draw_links(
	painter: &impl Painter,
	particles: &[Particle],
	config: &BackdropConfig,
	theme: &Theme,
) {
	for (i, j, d) in links(particles, config.link_distance) {
		let alpha = link_alpha(d, config.link_distance, config.link_alpha);
		let (a, b) = (&particles[i], &particles[j]);
		painter.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			&theme.link.with_alpha(alpha).to_css(),
			theme.link_width,
		);
	}
}

pub fn draw_points(painter: &impl Painter, particles: &[Particle], theme: &Theme) {
	let fill = theme.point.to_css();
	for p in particles {
		painter.fill_circle(p.x, p.y, p.r, &fill);
	}
}

/// A `<canvas>` element with its 2D context.
pub struct CanvasPainter {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}
}

impl Painter for CanvasPainter {
	fn resize(&mut self, surface: &Surface) {
		let (bw, bh) = surface.backing_size();
		self.canvas.set_width(bw);
		self.canvas.set_height(bh);

		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", surface.width));
		let _ = style.set_property("height", &format!("{}px", surface.height));

		let _ = self
			.ctx
			.set_transform(surface.ratio, 0.0, 0.0, surface.ratio, 0.0, 0.0);
	}

	fn clear(&self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_wash(&self, wash: &WashStyle, width: f64, height: f64) {
		let (fx, fy) = (width * wash.focus_x, height * wash.focus_y);
		let Ok(gradient) =
			self.ctx
				.create_radial_gradient(fx, fy, 0.0, fx, fy, width.max(height) * wash.reach)
		else {
			return;
		};

		for stop in &wash.stops {
			let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
		}

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.ctx.set_stroke_style_str(color);
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}

	fn fill_circle(&self, x: f64, y: f64, r: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, r, 0.0, PI * 2.0);
		self.ctx.fill();
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;

	use super::*;

	/// One recorded drawing call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Call {
		Resize(Surface),
		Clear,
		Wash,
		Line { from: (f64, f64), to: (f64, f64), color: String },
		Circle { x: f64, y: f64, r: f64 },
	}

	/// Painter that records every call for inspection.
	#[derive(Default)]
	pub struct Recorder {
		pub calls: RefCell<Vec<Call>>,
	}

	impl Recorder {
		pub fn lines(&self) -> Vec<Call> {
			self.calls
				.borrow()
				.iter()
				.filter(|c| matches!(c, Call::Line { .. }))
				.cloned()
				.collect()
		}
	}

	impl Painter for Recorder {
		fn resize(&mut self, surface: &Surface) {
			self.calls.borrow_mut().push(Call::Resize(*surface));
		}
		fn clear(&self, _: f64, _: f64) {
			self.calls.borrow_mut().push(Call::Clear);
		}
		fn fill_wash(&self, _: &WashStyle, _: f64, _: f64) {
			self.calls.borrow_mut().push(Call::Wash);
		}
		fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, _: f64) {
			self.calls.borrow_mut().push(Call::Line {
				from,
				to,
				color: color.to_string(),
			});
		}
		fn fill_circle(&self, x: f64, y: f64, r: f64, _: &str) {
			self.calls.borrow_mut().push(Call::Circle { x, y, r });
		}
	}

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			r: 2.0,
		}
	}

	#[test]
	fn test_link_alpha_fades_with_distance() {
		assert_eq!(link_alpha(0.0, 120.0, 0.12), 0.12);
		assert!((link_alpha(60.0, 120.0, 0.12) - 0.06).abs() < 1e-12);
		assert_eq!(link_alpha(120.0, 120.0, 0.12), 0.0);
		assert_eq!(link_alpha(500.0, 120.0, 0.12), 0.0);

		let mut prev = f64::INFINITY;
		for step in 0..=130 {
			let a = link_alpha(step as f64, 120.0, 0.12);
			assert!(a <= prev);
			prev = a;
		}
	}

	#[test]
	fn test_links_are_unordered_and_unique() {
		let ps = vec![at(0.0, 0.0), at(50.0, 0.0), at(100.0, 0.0), at(400.0, 400.0)];
		let pairs = links(&ps, 120.0);
		let idx: Vec<(usize, usize)> = pairs.iter().map(|&(i, j, _)| (i, j)).collect();
		assert_eq!(idx, vec![(0, 1), (0, 2), (1, 2)]);
	}

	#[test]
	fn test_pair_at_threshold_is_not_linked() {
		let ps = vec![at(0.0, 0.0), at(120.0, 0.0)];
		assert!(links(&ps, 120.0).is_empty());
	}

	#[test]
	fn test_draw_links_colors_by_distance() {
		let rec = Recorder::default();
		let ps = vec![at(0.0, 0.0), at(0.0, 60.0)];
		draw_links(&rec, &ps, &BackdropConfig::default(), &Theme::default());

		assert_eq!(
			rec.lines(),
			vec![Call::Line {
				from: (0.0, 0.0),
				to: (0.0, 60.0),
				color: "rgba(77, 252, 255, 0.06)".to_string(),
			}]
		);
	}

	#[test]
	fn test_draw_points_uses_particle_radius() {
		let rec = Recorder::default();
		let ps = vec![at(3.0, 4.0)];
		draw_points(&rec, &ps, &Theme::default());
		assert_eq!(
			*rec.calls.borrow(),
			vec![Call::Circle {
				x: 3.0,
				y: 4.0,
				r: 2.0
			}]
		);
	}
}
