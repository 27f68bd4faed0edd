//! Viewport measurement and drawing-surface sizing.
//!
//! Drawing code works in logical (CSS pixel) coordinates. The backing store
//! is `logical × ratio` physical pixels and the context transform scales by
//! the ratio, so points stay crisp on dense displays.

/// Raw viewport readings as reported by the window.
#[derive(Clone, Copy, Debug, Default)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub device_pixel_ratio: f64,
}

/// Logical surface size plus the clamped pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	pub width: f64,
	pub height: f64,
	pub ratio: f64,
}

impl Surface {
	/// Floors the viewport to whole CSS pixels and clamps the ratio to
	/// `[1, max_ratio]`. A zero or NaN ratio reads as 1.
	pub fn measure(viewport: Viewport, max_ratio: f64) -> Self {
		let ratio = if viewport.device_pixel_ratio > 0.0 {
			viewport.device_pixel_ratio
		} else {
			1.0
		};
		Self {
			width: viewport.width.max(0.0).floor(),
			height: viewport.height.max(0.0).floor(),
			ratio: ratio.clamp(1.0, max_ratio.max(1.0)),
		}
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// Backing-store dimensions in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.ratio).floor() as u32,
			(self.height * self.ratio).floor() as u32,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn viewport(width: f64, height: f64, dpr: f64) -> Viewport {
		Viewport {
			width,
			height,
			device_pixel_ratio: dpr,
		}
	}

	#[test]
	fn test_ratio_is_clamped() {
		assert_eq!(Surface::measure(viewport(10.0, 10.0, 3.0), 2.0).ratio, 2.0);
		assert_eq!(Surface::measure(viewport(10.0, 10.0, 0.5), 2.0).ratio, 1.0);
		assert_eq!(Surface::measure(viewport(10.0, 10.0, 1.5), 2.0).ratio, 1.5);
	}

	#[test]
	fn test_missing_ratio_reads_as_one() {
		assert_eq!(Surface::measure(viewport(10.0, 10.0, 0.0), 2.0).ratio, 1.0);
		assert_eq!(Surface::measure(viewport(10.0, 10.0, f64::NAN), 2.0).ratio, 1.0);
	}

	#[test]
	fn test_backing_size_scales_by_ratio() {
		let s = Surface::measure(viewport(1280.7, 720.2, 1.5), 2.0);
		assert_eq!((s.width, s.height), (1280.0, 720.0));
		assert_eq!(s.backing_size(), (1920, 1080));
		assert_eq!(s.center(), (640.0, 360.0));
	}
}
