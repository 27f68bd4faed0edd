//! Lightweight DOM enhancements for the host page.
//!
//! Each one looks up its own elements and quietly does nothing when they are
//! absent, so any subset can be present on a given page.

mod nav;
mod reveal;
mod tilt;
mod typing;

pub use nav::{current_section, fragment_id, smooth_anchor_scroll, track_active_link};
pub use reveal::{REVEALED_CLASS, reveal_on_scroll};
pub use tilt::{pointer_offset, tilt_card, tilt_transform};
pub use typing::{Typewriter, type_tagline};

use web_sys::Document;

/// Writes the current year into `#year`. Returns whether the element exists.
pub fn stamp_year(document: &Document) -> bool {
	let Some(el) = document.get_element_by_id("year") else {
		return false;
	};
	let year = js_sys::Date::new_0().get_full_year();
	el.set_text_content(Some(&year.to_string()));
	true
}
