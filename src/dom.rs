//! Small helpers over `web_sys` for wiring page-lifetime listeners.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, EventTarget, HtmlElement, Window};

/// Attaches `handler` to `target` for the rest of the page's life.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
	E: FromWasmAbi + 'static,
{
	let closure = Closure::<dyn FnMut(E)>::new(handler);
	let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
	closure.forget();
}

/// Like [`listen`], but tells the browser the handler never cancels the event.
pub fn listen_passive<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
	E: FromWasmAbi + 'static,
{
	let closure = Closure::<dyn FnMut(E)>::new(handler);
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
		event,
		closure.as_ref().unchecked_ref(),
		&options,
	);
	closure.forget();
}

/// Whether the user asked the system for reduced motion.
pub fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.map(|mql| mql.matches())
		.unwrap_or(false)
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return Vec::new();
	};
	let Ok(list) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// First element matching `selector` that is an `HtmlElement`.
pub fn query_html(selector: &str) -> Option<HtmlElement> {
	let document = web_sys::window()?.document()?;
	document.query_selector(selector).ok()??.dyn_into().ok()
}
