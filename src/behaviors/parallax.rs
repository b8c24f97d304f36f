//! Mouse parallax on the hero glow.
//!
//! The glow element drifts a few pixels opposite the cursor's offset from
//! the viewport center. Offset math is pure; the handler only formats the
//! transform.

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use super::document;

/// Maximum drift from center, in pixels, at the viewport edge.
const DRIFT_RANGE: f64 = 20.0;

/// Drift for a pointer coordinate within a viewport extent: zero at center,
/// ±`DRIFT_RANGE`/2 at the edges.
pub fn drift(client: f64, extent: f64) -> f64 {
	(client / extent - 0.5) * DRIFT_RANGE
}

/// Transform string for the glow. The element is centered with
/// `translateX(-50%)` by the stylesheet, so the horizontal drift is layered
/// on top of that.
pub fn glow_transform(x: f64, y: f64) -> String {
	format!("translateX(calc(-50% + {x}px)) translateY({y}px)")
}

/// Attach the parallax handler to `.hero-glow`.
pub fn wire() -> Option<()> {
	let document = document()?;
	let glow: HtmlElement = document
		.query_selector(".hero-glow")
		.ok()??
		.dyn_into()
		.ok()?;

	let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let (Some(w), Some(h)) = (
			window.inner_width().ok().and_then(|v| v.as_f64()),
			window.inner_height().ok().and_then(|v| v.as_f64()),
		) else {
			return;
		};
		let x = drift(ev.client_x() as f64, w);
		let y = drift(ev.client_y() as f64, h);
		let _ = glow.style().set_property("transform", &glow_transform(x, y));
	});
	document
		.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
		.ok()?;
	on_move.forget();
	Some(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drift_is_zero_at_center_and_symmetric_at_edges() {
		assert_eq!(drift(500.0, 1000.0), 0.0);
		assert_eq!(drift(0.0, 1000.0), -10.0);
		assert_eq!(drift(1000.0, 1000.0), 10.0);
	}

	#[test]
	fn transform_keeps_horizontal_centering() {
		assert_eq!(
			glow_transform(-10.0, 2.5),
			"translateX(calc(-50% + -10px)) translateY(2.5px)"
		);
	}
}
