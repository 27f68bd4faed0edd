//! Character-by-character typing of the hero tagline.

use std::time::Duration;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom;

const START_DELAY: Duration = Duration::from_millis(800);
const CHAR_DELAY: Duration = Duration::from_millis(28);

/// Reveals a fixed text one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
	text: String,
	/// Byte offset of the end of the visible prefix.
	shown: usize,
}

impl Typewriter {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			shown: 0,
		}
	}

	/// Shows one more character and returns it, or `None` once complete.
	pub fn advance(&mut self) -> Option<char> {
		let next = self.text[self.shown..].chars().next()?;
		self.shown += next.len_utf8();
		Some(next)
	}

	pub fn visible(&self) -> &str {
		&self.text[..self.shown]
	}

	pub fn is_done(&self) -> bool {
		self.shown == self.text.len()
	}
}

fn set_timeout(f: impl FnOnce() + 'static, delay: Duration) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(f);
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		cb.unchecked_ref(),
		delay.as_millis() as i32,
	);
}

fn type_next(tagline: HtmlElement, mut writer: Typewriter) {
	if writer.advance().is_none() {
		return;
	}
	tagline.set_text_content(Some(writer.visible()));
	if !writer.is_done() {
		set_timeout(move || type_next(tagline, writer), CHAR_DELAY);
	}
}

/// Clears `.hero-tagline` and types its original text back in. Returns
/// whether the tagline was found.
pub fn type_tagline() -> bool {
	let Some(tagline) = dom::query_html(".hero-tagline") else {
		return false;
	};
	let writer = Typewriter::new(tagline.text_content().unwrap_or_default());
	debug!("site-fx: typing {} chars", writer.text.chars().count());

	tagline.set_text_content(Some(""));
	let _ = tagline.style().set_property("visibility", "visible");
	set_timeout(move || type_next(tagline, writer), START_DELAY);
	true
}
