//! Navigation behaviors: navbar shadow, active-link highlight, smooth-scroll
//! anchors, and the mobile hamburger toggle.

use wasm_bindgen::prelude::*;
use web_sys::{
	Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, MouseEvent, NodeList, ScrollBehavior, ScrollIntoViewOptions,
	ScrollLogicalPosition,
};

use super::{document, elements};

/// Scroll offset past which the navbar picks up its `scrolled` treatment.
const NAVBAR_SCROLL_OFFSET: f64 = 40.0;

/// Root margin that marks a section active while it occupies the middle band
/// of the viewport.
const ACTIVE_SECTION_MARGIN: &str = "-40% 0px -55% 0px";

/// Toggle `scrolled` on `#navbar` as the window scrolls past the offset.
pub fn wire_navbar_shadow() -> Option<()> {
	let document = document()?;
	let navbar = document.get_element_by_id("navbar")?;
	let window = web_sys::window()?;

	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let scrolled = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0)
			> NAVBAR_SCROLL_OFFSET;
		let _ = navbar.class_list().toggle_with_force("scrolled", scrolled);
	});
	window
		.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
		.ok()?;
	on_scroll.forget();
	Some(())
}

/// Highlight the `.nav-links` anchor matching the section currently in the
/// middle band of the viewport.
pub fn wire_active_links() -> Option<()> {
	let document = document()?;
	let sections = document.query_selector_all("section[id]").ok()?;
	let anchors = document.query_selector_all(".nav-links a").ok()?;
	if sections.length() == 0 || anchors.length() == 0 {
		return None;
	}
	let anchors: Vec<Element> = elements(&anchors).collect();

	let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
		for entry in entries.iter() {
			let entry: IntersectionObserverEntry = entry.unchecked_into();
			if !entry.is_intersecting() {
				continue;
			}
			let Some(id) = entry.target().get_attribute("id") else {
				continue;
			};
			let href = format!("#{id}");
			for anchor in &anchors {
				let active = anchor.get_attribute("href").as_deref() == Some(href.as_str());
				let _ = anchor.class_list().toggle_with_force("active", active);
			}
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_root_margin(ACTIVE_SECTION_MARGIN);
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	for section in elements(&sections) {
		observer.observe(&section);
	}
	callback.forget();
	Some(())
}

/// Intercept same-page anchor clicks and smooth-scroll to their targets.
pub fn wire_smooth_scroll() -> Option<()> {
	let document = document()?;
	let anchors = document.query_selector_all("a[href^='#']").ok()?;
	if anchors.length() == 0 {
		return None;
	}

	for anchor in elements(&anchors) {
		let doc = document.clone();
		let anchor_cb = anchor.clone();
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let Some(href) = anchor_cb.get_attribute("href") else {
				return;
			};
			// A bare "#" is not a valid selector; leave it to the browser.
			if href.len() < 2 {
				return;
			}
			if let Ok(Some(target)) = doc.query_selector(&href) {
				ev.prevent_default();
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				options.set_block(ScrollLogicalPosition::Start);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		});
		anchor
			.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
			.ok()?;
		on_click.forget();
	}
	Some(())
}

/// Toggle the mobile menu and animate the hamburger's three bars into a
/// cross while the menu is open.
pub fn wire_hamburger() -> Option<()> {
	let document = document()?;
	let hamburger = document.get_element_by_id("hamburger")?;
	let menu = document.get_element_by_id("mobileMenu")?;
	let spans = hamburger.query_selector_all("span").ok()?;

	let on_click = Closure::<dyn FnMut()>::new(move || {
		let _ = menu.class_list().toggle("open");
		set_hamburger_bars(&spans, menu.class_list().contains("open"));
	});
	hamburger
		.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
		.ok()?;
	on_click.forget();
	Some(())
}

fn set_hamburger_bars(spans: &NodeList, open: bool) {
	let transforms = if open {
		[
			"rotate(45deg) translate(5px, 5px)",
			"",
			"rotate(-45deg) translate(5px, -5px)",
		]
	} else {
		["", "", ""]
	};
	for (i, span) in elements(spans).enumerate().take(3) {
		let Ok(span) = span.dyn_into::<HtmlElement>() else {
			continue;
		};
		let style = span.style();
		let _ = style.set_property("transform", transforms[i]);
		let _ = style.set_property("opacity", if open && i == 1 { "0" } else { "" });
	}
}
