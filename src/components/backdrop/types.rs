//! Tunables for the backdrop, deserialized from the page's config script.

use serde::Deserialize;

/// Backdrop tunables. Every field falls back to its default when omitted,
/// so `{}` and a missing config element behave the same.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackdropConfig {
	/// Surface area (CSS px²) per particle.
	pub density: f64,
	pub min_particles: usize,
	pub max_particles: usize,
	/// Initial velocity components are drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Per-frame multiplicative velocity decay.
	pub damping: f64,
	/// How far past an edge a particle travels before wrapping.
	pub wrap_margin: f64,
	/// Velocity added per pixel of pointer offset from the surface center.
	pub pointer_pull: f64,
	/// Pairs closer than this are linked.
	pub link_distance: f64,
	/// Link opacity at zero distance.
	pub link_alpha: f64,
	/// Upper clamp for the device pixel ratio.
	pub max_pixel_ratio: f64,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			density: 18_000.0,
			min_particles: 35,
			max_particles: 95,
			max_speed: 0.3,
			radius_min: 1.1,
			radius_max: 2.2,
			damping: 0.995,
			wrap_margin: 30.0,
			pointer_pull: 0.00035,
			link_distance: 120.0,
			link_alpha: 0.12,
			max_pixel_ratio: 2.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_object_is_default() {
		let cfg: BackdropConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(cfg, BackdropConfig::default());
	}

	#[test]
	fn test_partial_override() {
		let cfg: BackdropConfig =
			serde_json::from_str(r#"{ "max_particles": 60, "link_distance": 90.5 }"#).unwrap();
		assert_eq!(cfg.max_particles, 60);
		assert_eq!(cfg.link_distance, 90.5);
		assert_eq!(cfg.min_particles, 35);
		assert_eq!(cfg.density, 18_000.0);
	}

	#[test]
	fn test_rejects_wrong_types() {
		assert!(serde_json::from_str::<BackdropConfig>(r#"{ "damping": "lots" }"#).is_err());
	}
}
