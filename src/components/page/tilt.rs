//! Pointer-driven 3D tilt on the avatar card.

use web_sys::{HtmlElement, MouseEvent};

use crate::dom;

/// Maximum rotation, in degrees, at the card's edges (offset ±0.5).
const MAX_TILT_DEG: f64 = 8.0;
const PERSPECTIVE_PX: u32 = 600;

/// Pointer offset from the card's center as fractions of its size, each in
/// `[-0.5, 0.5]` while the pointer is over the card.
pub fn pointer_offset(client: (f64, f64), left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
	if width <= 0.0 || height <= 0.0 {
		return (0.0, 0.0);
	}
	(
		(client.0 - left) / width - 0.5,
		(client.1 - top) / height - 0.5,
	)
}

/// CSS transform for a card tilted toward `(x, y)`.
pub fn tilt_transform(x: f64, y: f64) -> String {
	format!(
		"perspective({PERSPECTIVE_PX}px) rotateY({}deg) rotateX({}deg)",
		x * MAX_TILT_DEG + 0.0,
		// `+ 0.0` turns -0 into 0
		-y * MAX_TILT_DEG + 0.0
	)
}

/// Wires the tilt onto `.avatar-card`. Returns whether the card was found.
pub fn tilt_card() -> bool {
	let Some(card) = dom::query_html(".avatar-card") else {
		return false;
	};

	let on_move = card.clone();
	dom::listen(&card, "mousemove", move |ev: MouseEvent| {
		let rect = on_move.get_bounding_client_rect();
		let (x, y) = pointer_offset(
			(ev.client_x() as f64, ev.client_y() as f64),
			rect.left(),
			rect.top(),
			rect.width(),
			rect.height(),
		);
		set_transform(&on_move, &tilt_transform(x, y));
	});

	let on_leave = card.clone();
	dom::listen(&card, "mouseleave", move |_: MouseEvent| {
		set_transform(&on_leave, &tilt_transform(0.0, 0.0));
	});

	true
}

fn set_transform(card: &HtmlElement, transform: &str) {
	let _ = card.style().set_property("transform", transform);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_offset_from_center() {
		assert_eq!(pointer_offset((150.0, 100.0), 100.0, 50.0, 100.0, 100.0), (0.0, 0.0));
		assert_eq!(pointer_offset((100.0, 50.0), 100.0, 50.0, 100.0, 100.0), (-0.5, -0.5));
		assert_eq!(pointer_offset((200.0, 150.0), 100.0, 50.0, 100.0, 100.0), (0.5, 0.5));
	}

	#[test]
	fn test_zero_sized_card_has_no_offset() {
		assert_eq!(pointer_offset((10.0, 10.0), 0.0, 0.0, 0.0, 0.0), (0.0, 0.0));
	}

	#[test]
	fn test_transform_inverts_vertical_axis() {
		assert_eq!(
			tilt_transform(0.5, 0.25),
			"perspective(600px) rotateY(4deg) rotateX(-2deg)"
		);
	}

	#[test]
	fn test_rest_transform() {
		assert_eq!(
			tilt_transform(0.0, 0.0),
			"perspective(600px) rotateY(0deg) rotateX(0deg)"
		);
	}
}
