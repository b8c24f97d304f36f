//! Self-contained page behaviors attached to the static portfolio markup.
//!
//! Each submodule wires one effect onto elements the page provides (navbar,
//! stat counters, skill badges, ...). Wiring functions return `None` when the
//! elements they need are absent, and the caller skips that effect; a page
//! without a typewriter target simply gets no typewriter. Nothing here owns
//! markup or styling beyond the classes the effects toggle.

pub mod cards;
pub mod counters;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod typewriter;

use log::{debug, info};
use web_sys::{Document, Element, NodeList};

use crate::config::FxConfig;

/// Attach every page behavior. Effects whose target elements are missing are
/// skipped and logged.
pub fn wire_all(config: &FxConfig) {
	let mut wired = 0usize;
	let mut skipped = 0usize;

	let behaviors: [(&str, Option<()>); 10] = [
		("typewriter", typewriter::wire(&config.phrases)),
		("stat counters", counters::wire()),
		("scroll reveal", reveal::wire()),
		("navbar shadow", nav::wire_navbar_shadow()),
		("active nav links", nav::wire_active_links()),
		("smooth scroll", nav::wire_smooth_scroll()),
		("hamburger menu", nav::wire_hamburger()),
		("badge ripples", ripple::wire()),
		("hero parallax", parallax::wire()),
		("timeline cards", cards::wire()),
	];
	for (name, outcome) in behaviors {
		match outcome {
			Some(()) => wired += 1,
			None => {
				debug!("portfolio-fx: {name} not wired (elements missing)");
				skipped += 1;
			}
		}
	}

	info!("portfolio-fx: wired {wired} behaviors ({skipped} skipped)");
}

/// Current page document, if the environment provides one.
pub(crate) fn document() -> Option<Document> {
	web_sys::window()?.document()
}

/// Current viewport width in CSS pixels.
pub(crate) fn viewport_width() -> Option<f64> {
	web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Iterate the elements of a `NodeList`, skipping non-element nodes.
pub(crate) fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
	use wasm_bindgen::JsCast;
	(0..list.length()).filter_map(|i| list.item(i)?.dyn_into::<Element>().ok())
}
