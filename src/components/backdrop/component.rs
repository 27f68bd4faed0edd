//! Browser wiring for the particle backdrop.
//!
//! Finds the `#bg` canvas, hooks window resize and pointer events into the
//! shared [`Backdrop`], and drives it with `requestAnimationFrame`. The loop
//! closure reschedules itself each frame and lives until the page goes away.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use super::render::CanvasPainter;
use super::state::{Backdrop, Inert};
use super::surface::Viewport;
use super::types::BackdropConfig;
use crate::dom;

/// Id of the canvas the backdrop paints into.
pub const CANVAS_ID: &str = "bg";

fn viewport(window: &Window) -> Viewport {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport {
		width: read(window.inner_width()),
		height: read(window.inner_height()),
		device_pixel_ratio: window.device_pixel_ratio(),
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Starts the backdrop on `#bg`, or reports why it stayed off.
///
/// `reduced_motion` is sampled once by the caller; the backdrop never looks
/// at it again.
pub fn mount_backdrop(
	window: &Window,
	config: BackdropConfig,
	reduced_motion: bool,
) -> Result<(), Inert> {
	let canvas: HtmlCanvasElement = window
		.document()
		.and_then(|d| d.get_element_by_id(CANVAS_ID))
		.and_then(|el| el.dyn_into().ok())
		.ok_or(Inert::NoCanvas)?;

	let backdrop = Backdrop::launch(reduced_motion, viewport(window), config, seed(), || {
		context_2d(&canvas).map(|ctx| CanvasPainter::new(canvas.clone(), ctx))
	})?;
	info!(
		"site-fx: backdrop running with {} particles on {}x{}",
		backdrop.field.len(),
		backdrop.surface.width,
		backdrop.surface.height
	);
	let backdrop = Rc::new(RefCell::new(backdrop));

	let backdrop_resize = backdrop.clone();
	dom::listen(window, "resize", move |_: Event| {
		let Some(win) = web_sys::window() else {
			return;
		};
		backdrop_resize.borrow_mut().resize(viewport(&win));
	});

	let backdrop_move = backdrop.clone();
	dom::listen_passive(window, "mousemove", move |ev: MouseEvent| {
		backdrop_move
			.borrow_mut()
			.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
	});

	let backdrop_leave = backdrop.clone();
	dom::listen(window, "mouseleave", move |_: Event| {
		backdrop_leave.borrow_mut().pointer_left();
	});

	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		backdrop.borrow_mut().frame();
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}

	Ok(())
}
