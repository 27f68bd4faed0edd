//! Pointer tracking and the drift bias it applies to particles.

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
	pub active: bool,
}

impl Pointer {
	/// Inactive pointer resting at `(x, y)`.
	pub fn resting_at((x, y): (f64, f64)) -> Self {
		Self {
			x,
			y,
			active: false,
		}
	}

	pub fn moved(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
		self.active = true;
	}

	/// Position is kept; it is simply ignored while inactive.
	pub fn left(&mut self) {
		self.active = false;
	}

	/// Velocity nudge for this frame: the pointer's offset from `center`
	/// scaled by `pull`, or zero while inactive.
	pub fn bias(&self, center: (f64, f64), pull: f64) -> (f64, f64) {
		if !self.active {
			return (0.0, 0.0);
		}
		((self.x - center.0) * pull, (self.y - center.1) * pull)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_inactive_pointer_has_no_bias() {
		let p = Pointer::resting_at((400.0, 300.0));
		assert_eq!(p.bias((0.0, 0.0), 0.00035), (0.0, 0.0));
	}

	#[test]
	fn test_bias_points_from_center_to_pointer() {
		let mut p = Pointer::resting_at((400.0, 300.0));
		p.moved(600.0, 100.0);
		let (bx, by) = p.bias((400.0, 300.0), 0.001);
		assert!((bx - 0.2).abs() < 1e-12);
		assert!((by + 0.2).abs() < 1e-12);
	}

	#[test]
	fn test_leave_keeps_position() {
		let mut p = Pointer::resting_at((0.0, 0.0));
		p.moved(12.0, 34.0);
		p.left();
		assert!(!p.active);
		assert_eq!((p.x, p.y), (12.0, 34.0));
		assert_eq!(p.bias((0.0, 0.0), 1.0), (0.0, 0.0));
	}
}
