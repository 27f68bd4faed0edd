//! Active navigation highlight and smooth anchor scrolling.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
	Element, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
	ScrollLogicalPosition, Window,
};

use crate::dom;

/// Fraction of the viewport height, measured from the top, that decides
/// which section counts as current.
const MARKER_RATIO: f64 = 0.35;
const ACTIVE_CLASS: &str = "is-active";

/// Index of the last section whose top is at or above `marker`.
///
/// `tops` are in document order; a later match wins.
pub fn current_section(tops: &[f64], marker: f64) -> Option<usize> {
	tops.iter().rposition(|&top| top <= marker)
}

/// Target id of an in-page link (`#about` → `about`).
pub fn fragment_id(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

struct NavSection {
	link: Element,
	section: HtmlElement,
}

fn sections(document: &web_sys::Document) -> Vec<NavSection> {
	dom::query_all(".nav a")
		.into_iter()
		.filter_map(|link| {
			let href = link.get_attribute("href")?;
			let section = document
				.get_element_by_id(fragment_id(&href)?)?
				.dyn_into::<HtmlElement>()
				.ok()?;
			Some(NavSection { link, section })
		})
		.collect()
}

fn scroll_top(window: &Window) -> f64 {
	match window.scroll_y() {
		Ok(y) if y > 0.0 => y,
		_ => window
			.document()
			.and_then(|d| d.document_element())
			.map(|el| el.scroll_top() as f64)
			.unwrap_or(0.0),
	}
}

fn highlight(sections: &[NavSection]) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let height = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	let marker = scroll_top(&window) + height * MARKER_RATIO;

	let tops: Vec<f64> = sections
		.iter()
		.map(|s| s.section.offset_top() as f64)
		.collect();
	let current = current_section(&tops, marker);

	for (i, s) in sections.iter().enumerate() {
		let _ = s
			.link
			.class_list()
			.toggle_with_force(ACTIVE_CLASS, current == Some(i));
	}
}

/// Keeps `is-active` on the nav link whose section is in view. Returns the
/// number of tracked sections.
pub fn track_active_link(window: &Window) -> usize {
	let Some(document) = window.document() else {
		return 0;
	};
	let sections = Rc::new(sections(&document));
	let count = sections.len();

	let on_scroll = sections.clone();
	dom::listen_passive(window, "scroll", move |_: Event| highlight(&on_scroll));
	let on_resize = sections.clone();
	dom::listen(window, "resize", move |_: Event| highlight(&on_resize));
	highlight(&sections);

	count
}

/// Replaces the jump to `#anchor` targets with a smooth scroll. Returns the
/// number of links wired.
pub fn smooth_anchor_scroll() -> usize {
	let links = dom::query_all(r##".nav a[href^="#"]"##);
	for link in &links {
		let anchor = link.clone();
		dom::listen(link, "click", move |ev: MouseEvent| {
			ev.prevent_default();
			let Some(href) = anchor.get_attribute("href") else {
				return;
			};
			let target = web_sys::window()
				.and_then(|w| w.document())
				.and_then(|d| d.query_selector(&href).ok().flatten());
			if let Some(target) = target {
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				options.set_block(ScrollLogicalPosition::Start);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		});
	}
	links.len()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_current_section_picks_last_passed() {
		let tops = [0.0, 600.0, 1400.0];
		assert_eq!(current_section(&tops, 210.0), Some(0));
		assert_eq!(current_section(&tops, 600.0), Some(1));
		assert_eq!(current_section(&tops, 5000.0), Some(2));
	}

	#[test]
	fn test_current_section_none_above_first() {
		assert_eq!(current_section(&[300.0, 900.0], 100.0), None);
		assert_eq!(current_section(&[], 100.0), None);
	}

	#[test]
	fn test_fragment_id() {
		assert_eq!(fragment_id("#work"), Some("work"));
		assert_eq!(fragment_id("#"), None);
		assert_eq!(fragment_id("/blog"), None);
		assert_eq!(fragment_id("https://example.com/#x"), None);
	}
}
