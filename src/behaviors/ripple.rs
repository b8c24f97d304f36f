//! Click ripple feedback on skill badges.
//!
//! On click, a small circle is appended at the pointer position and expanded
//! by a one-shot CSS animation; the element removes itself when the animation
//! ends. The keyframes are injected into `<head>` once at wire time.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::{document, elements};

/// Ripple diameter in pixels; the spawn point is offset by half of this so
/// the circle centers on the pointer.
const RIPPLE_SIZE: f64 = 60.0;

const RIPPLE_KEYFRAMES: &str = "
@keyframes rippleAnim {
  to { transform: scale(3.5); opacity: 0; }
}
";

/// Attach ripple handlers to every `.skill-badge`.
pub fn wire() -> Option<()> {
	let document = document()?;
	let badges = document.query_selector_all(".skill-badge").ok()?;
	if badges.length() == 0 {
		return None;
	}
	inject_keyframes(&document)?;

	for badge in elements(&badges) {
		let badge: HtmlElement = badge.dyn_into().ok()?;
		let doc = document.clone();
		let badge_cb = badge.clone();
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			if spawn_ripple(&doc, &badge_cb, &ev).is_none() {
				log::warn!("portfolio-fx: failed to spawn ripple");
			}
		});
		badge
			.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
			.ok()?;
		on_click.forget();
	}
	Some(())
}

fn inject_keyframes(document: &Document) -> Option<()> {
	let style = document.create_element("style").ok()?;
	style.set_text_content(Some(RIPPLE_KEYFRAMES));
	document.head()?.append_child(&style).ok()?;
	Some(())
}

fn spawn_ripple(document: &Document, badge: &HtmlElement, ev: &MouseEvent) -> Option<()> {
	let half = RIPPLE_SIZE / 2.0;
	let (left, top) = (ev.offset_x() as f64 - half, ev.offset_y() as f64 - half);

	let ripple: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
	ripple.style().set_css_text(&format!(
		"position: absolute; \
		 border-radius: 50%; \
		 background: rgba(99, 179, 237, 0.35); \
		 transform: scale(0); \
		 animation: rippleAnim 0.55s linear; \
		 pointer-events: none; \
		 width: {RIPPLE_SIZE}px; height: {RIPPLE_SIZE}px; \
		 left: {left}px; top: {top}px;"
	));

	// The badge must clip and anchor the absolutely positioned ripple.
	let badge_style = badge.style();
	let _ = badge_style.set_property("position", "relative");
	let _ = badge_style.set_property("overflow", "hidden");
	badge.append_child(&ripple).ok()?;

	let ripple_done: Element = ripple.clone().into();
	let on_done = Closure::<dyn FnMut()>::new(move || {
		ripple_done.remove();
	});
	ripple
		.add_event_listener_with_callback("animationend", on_done.as_ref().unchecked_ref())
		.ok()?;
	on_done.forget();
	Some(())
}
