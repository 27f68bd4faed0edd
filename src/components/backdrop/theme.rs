//! Colours for the backdrop.
//!
//! The palette is fixed: the ambient wash, the link colour and the point fill
//! are decorative constants rather than tunables.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits functional `rgba()` notation, the wash relies on low alphas.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// One stop of the ambient radial wash.
#[derive(Clone, Copy, Debug)]
pub struct WashStop {
	/// Offset along the gradient radius, 0.0 to 1.0.
	pub offset: f64,
	pub color: Color,
}

/// Soft radial light painted behind the particles.
#[derive(Clone, Debug)]
pub struct WashStyle {
	/// Focal point as a fraction of surface width.
	pub focus_x: f64,
	/// Focal point as a fraction of surface height.
	pub focus_y: f64,
	/// Outer radius as a fraction of the longer surface side.
	pub reach: f64,
	pub stops: [WashStop; 3],
}

/// Complete visual theme for the backdrop.
#[derive(Clone, Debug)]
pub struct Theme {
	pub wash: WashStyle,
	/// Link colour; alpha is replaced per link by its distance fade.
	pub link: Color,
	pub link_width: f64,
	pub point: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			wash: WashStyle {
				focus_x: 0.7,
				focus_y: 0.2,
				reach: 0.7,
				stops: [
					WashStop {
						offset: 0.0,
						color: Color::rgba(124, 92, 255, 0.06),
					},
					WashStop {
						offset: 0.35,
						color: Color::rgba(77, 252, 255, 0.03),
					},
					WashStop {
						offset: 1.0,
						color: Color::rgba(0, 0, 0, 0.0),
					},
				],
			},
			link: Color::rgba(77, 252, 255, 1.0),
			link_width: 1.0,
			point: Color::rgba(255, 255, 255, 0.35),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_css_keeps_fractional_alpha() {
		assert_eq!(
			Color::rgba(77, 252, 255, 0.03).to_css(),
			"rgba(77, 252, 255, 0.03)"
		);
		assert_eq!(Color::rgba(0, 0, 0, 0.0).to_css(), "rgba(0, 0, 0, 0)");
	}

	#[test]
	fn test_with_alpha_keeps_channels() {
		let c = Theme::default().link.with_alpha(0.06);
		assert_eq!((c.r, c.g, c.b), (77, 252, 255));
		assert_eq!(c.a, 0.06);
	}
}
