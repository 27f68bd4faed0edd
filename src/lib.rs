//! site-fx: page enhancements for a personal portfolio site.
//!
//! This crate compiles to WASM and decorates an existing, server-rendered
//! page: an animated particle backdrop on a canvas, reveal-on-scroll,
//! active nav highlighting, smooth anchor scrolling, a tilting avatar card
//! and a typed-out tagline.

use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod dom;

pub use components::backdrop::{Backdrop, BackdropConfig, Inert, mount_backdrop};

/// Id of the optional `<script type="application/json">` holding backdrop tunables.
pub const CONFIG_ELEMENT_ID: &str = "site-fx-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("site-fx: logging initialized");
}

/// Parses backdrop tunables, falling back to defaults on malformed input.
pub fn parse_config(json: &str) -> BackdropConfig {
	match serde_json::from_str::<BackdropConfig>(json) {
		Ok(config) => {
			debug!("site-fx: loaded config {:?}", config);
			config
		}
		Err(e) => {
			warn!("site-fx: ignoring malformed config: {}", e);
			BackdropConfig::default()
		}
	}
}

/// Load backdrop tunables from the script element with id="site-fx-config".
fn load_config(window: &Window) -> Option<BackdropConfig> {
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	Some(parse_config(&json_text))
}

/// Wires every enhancement onto the current page.
///
/// The reduced-motion preference is read once here. It turns the backdrop off
/// and makes reveal elements show immediately; everything else runs either way.
pub fn enhance_page() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let reduced_motion = dom::prefers_reduced_motion(&window);

	components::page::stamp_year(&document);
	let revealed = components::page::reveal_on_scroll(reduced_motion);
	let sections = components::page::track_active_link(&window);
	let anchors = components::page::smooth_anchor_scroll();
	info!(
		"site-fx: {} reveal targets, {} nav sections, {} smooth anchors",
		revealed, sections, anchors
	);

	let config = load_config(&window).unwrap_or_default();
	if let Err(reason) = mount_backdrop(&window, config, reduced_motion) {
		info!("site-fx: backdrop off: {}", reason);
	}

	if !components::page::tilt_card() {
		debug!("site-fx: no avatar card");
	}
	if !components::page::type_tagline() {
		debug!("site-fx: no tagline");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_config_override() {
		let cfg = parse_config(r#"{ "min_particles": 10, "max_particles": 20 }"#);
		assert_eq!(cfg.min_particles, 10);
		assert_eq!(cfg.max_particles, 20);
	}

	#[test]
	fn test_parse_config_malformed_falls_back() {
		assert_eq!(parse_config("{ not json"), BackdropConfig::default());
		assert_eq!(parse_config(""), BackdropConfig::default());
	}
}
