//! Scroll-triggered reveal of `[data-reveal]` elements.

use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Class the stylesheet transitions in.
pub const REVEALED_CLASS: &str = "reveal--in";
const THRESHOLD: f64 = 0.12;
const ROOT_MARGIN: &str = "40px 0px -10% 0px";

fn reveal(el: &Element) {
	let _ = el.class_list().add_1(REVEALED_CLASS);
}

/// Reveals each element the first time it scrolls into view, or all of them
/// at once when `reduced_motion` is set. Returns the number of elements.
pub fn reveal_on_scroll(reduced_motion: bool) -> usize {
	let elements = dom::query_all("[data-reveal]");
	if reduced_motion {
		elements.iter().for_each(reveal);
		return elements.len();
	}

	let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		|entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				reveal(&target);
				observer.unobserve(&target);
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	options.set_root_margin(ROOT_MARGIN);

	let Ok(observer) =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
	else {
		// No observer support: show everything rather than leave it hidden.
		elements.iter().for_each(reveal);
		return elements.len();
	};
	on_intersect.forget();

	for el in &elements {
		observer.observe(el);
	}
	elements.len()
}
