//! Scroll-reveal animation hook.
//!
//! Adds the `revealed` class to `.reveal` elements the first time they enter
//! the viewport; the page stylesheet owns the actual transition. Each element
//! is unobserved after revealing, so the effect fires once.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{document, elements};

/// Fraction of the element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.12;

/// Observe all `.reveal` elements.
pub fn wire() -> Option<()> {
	let document = document()?;
	let targets = document.query_selector_all(".reveal").ok()?;
	if targets.length() == 0 {
		return None;
	}

	let observer: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
	let observer_cb = observer.clone();
	let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
		for entry in entries.iter() {
			let entry: IntersectionObserverEntry = entry.unchecked_into();
			if !entry.is_intersecting() {
				continue;
			}
			let target = entry.target();
			let _ = target.class_list().add_1("revealed");
			if let Some(ref obs) = *observer_cb.borrow() {
				obs.unobserve(&target);
			}
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
	let obs =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	for el in elements(&targets) {
		obs.observe(&el);
	}
	*observer.borrow_mut() = Some(obs);
	callback.forget();
	Some(())
}
