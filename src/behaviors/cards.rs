//! Timeline card expand/collapse on small viewports.
//!
//! On viewports at or below the mobile breakpoint, each `.job-card` shows
//! only the first of its `.job-project` items until tapped; tapping toggles
//! the card's `expanded` class. Wider viewports always show everything.
//! Visibility is re-applied on window resize so cards settle correctly when
//! crossing the breakpoint.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::{document, elements, viewport_width};

/// Widest viewport, in CSS pixels, that gets the collapsed treatment.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Whether a viewport width gets the mobile collapsed treatment.
pub fn is_mobile(viewport: f64) -> bool {
	viewport <= MOBILE_BREAKPOINT
}

/// Whether a project item at `index` should be hidden.
pub fn hide_project(index: usize, mobile: bool, expanded: bool) -> bool {
	mobile && index > 0 && !expanded
}

/// Attach expand toggles to every `.job-card` that has a project list.
pub fn wire() -> Option<()> {
	let document = document()?;
	let cards = document.query_selector_all(".job-card").ok()?;
	if cards.length() == 0 {
		return None;
	}
	let window = web_sys::window()?;

	for card in elements(&cards) {
		let Ok(Some(projects)) = card.query_selector(".job-projects") else {
			continue;
		};
		apply_visibility(&card, &projects);

		let (card_click, projects_click) = (card.clone(), projects.clone());
		let on_click = Closure::<dyn FnMut()>::new(move || {
			if is_mobile(viewport_width().unwrap_or(f64::INFINITY)) {
				let _ = card_click.class_list().toggle("expanded");
				apply_visibility(&card_click, &projects_click);
			}
		});
		card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
			.ok()?;
		on_click.forget();

		let (card_resize, projects_resize) = (card.clone(), projects.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			apply_visibility(&card_resize, &projects_resize);
		});
		window
			.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
			.ok()?;
		on_resize.forget();
	}
	Some(())
}

fn apply_visibility(card: &Element, projects: &Element) {
	let Ok(items) = projects.query_selector_all(".job-project") else {
		return;
	};
	let mobile = is_mobile(viewport_width().unwrap_or(f64::INFINITY));
	let expanded = card.class_list().contains("expanded");

	for (i, item) in elements(&items).enumerate() {
		let Ok(item) = item.dyn_into::<HtmlElement>() else {
			continue;
		};
		if hide_project(i, mobile, expanded) {
			let _ = item.style().set_property("display", "none");
		} else {
			let _ = item.style().remove_property("display");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn breakpoint_is_inclusive() {
		assert!(is_mobile(320.0));
		assert!(is_mobile(768.0));
		assert!(!is_mobile(768.1));
		assert!(!is_mobile(1920.0));
	}

	#[test]
	fn desktop_shows_everything() {
		for i in 0..4 {
			assert!(!hide_project(i, false, false));
			assert!(!hide_project(i, false, true));
		}
	}

	#[test]
	fn mobile_hides_all_but_first_until_expanded() {
		assert!(!hide_project(0, true, false));
		assert!(hide_project(1, true, false));
		assert!(hide_project(3, true, false));
		assert!(!hide_project(1, true, true));
	}
}
