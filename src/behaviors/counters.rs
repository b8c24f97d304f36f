//! Animated stat counters.
//!
//! Each `.stat-number` element holds its final value as text (`"12+"`,
//! `"99.95%"`, ...). When the element first scrolls into view it is zeroed
//! and counted up to the parsed target over a fixed number of interval
//! ticks, keeping any non-numeric suffix.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit};

use super::{document, elements};

/// Interval between counter ticks.
const TICK_MS: i32 = 35;
/// Number of ticks to reach the target value.
const TICKS: f64 = 40.0;
/// Element is considered visible once half of it is on screen.
const VISIBILITY_THRESHOLD: f64 = 0.5;

/// A stat parsed from its display text: numeric target, trailing suffix, and
/// whether the target was written with a fractional part.
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
	pub value: f64,
	pub suffix: String,
	pub fractional: bool,
}

/// Split a stat label into its numeric prefix and suffix.
/// Returns `None` when the label does not start with a number.
pub fn parse_stat(raw: &str) -> Option<Stat> {
	let raw = raw.trim();
	let digits = raw
		.find(|c: char| !c.is_ascii_digit() && c != '.')
		.unwrap_or(raw.len());
	let (number, suffix) = raw.split_at(digits);
	let value: f64 = number.parse().ok()?;
	Some(Stat {
		value,
		suffix: suffix.to_string(),
		fractional: number.contains('.'),
	})
}

/// Count-up state for one stat element.
pub struct Counter {
	stat: Stat,
	current: f64,
	step: f64,
}

impl Counter {
	pub fn new(stat: Stat) -> Self {
		let step = stat.value / TICKS;
		Self {
			stat,
			current: 0.0,
			step,
		}
	}

	/// Advance one tick; returns `true` once the target is reached.
	pub fn tick(&mut self) -> bool {
		self.current = (self.current + self.step).min(self.stat.value);
		self.current >= self.stat.value
	}

	/// Current display text, formatted like the original label.
	pub fn display(&self) -> String {
		if self.stat.fractional {
			format!("{:.2}{}", self.current, self.stat.suffix)
		} else {
			format!("{}{}", self.current.floor() as i64, self.stat.suffix)
		}
	}
}

/// Observe all `.stat-number` elements and animate each once visible.
pub fn wire() -> Option<()> {
	let document = document()?;
	let stats = document.query_selector_all(".stat-number").ok()?;
	if stats.length() == 0 {
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
			if let Some(ref obs) = *observer_cb.borrow() {
				obs.unobserve(&target);
			}
			if start_count_up(&target).is_none() {
				log::warn!("portfolio-fx: stat counter has no numeric label");
			}
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
	let obs =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	for el in elements(&stats) {
		obs.observe(&el);
	}
	*observer.borrow_mut() = Some(obs);
	callback.forget();
	Some(())
}

/// Zero the element's text and count it up to its parsed target on an
/// interval, clearing the interval when done.
fn start_count_up(el: &Element) -> Option<()> {
	let el: HtmlElement = el.clone().dyn_into().ok()?;
	let stat = parse_stat(&el.text_content().unwrap_or_default())?;
	el.set_text_content(Some(&format!("0{}", stat.suffix)));

	let mut counter = Counter::new(stat);
	let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
	let handle_cb = handle.clone();
	let el_cb = el.clone();
	let tick = Closure::<dyn FnMut()>::new(move || {
		let done = counter.tick();
		el_cb.set_text_content(Some(&counter.display()));
		if done {
			if let (Some(win), Some(h)) = (web_sys::window(), *handle_cb.borrow()) {
				win.clear_interval_with_handle(h);
			}
		}
	});

	let window = web_sys::window()?;
	let h = window
		.set_interval_with_callback_and_timeout_and_arguments_0(
			tick.as_ref().unchecked_ref(),
			TICK_MS,
		)
		.ok()?;
	*handle.borrow_mut() = Some(h);
	tick.forget();
	Some(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_integer_stats_with_suffix() {
		assert_eq!(
			parse_stat("12+"),
			Some(Stat {
				value: 12.0,
				suffix: "+".into(),
				fractional: false,
			})
		);
		assert_eq!(
			parse_stat(" 40 "),
			Some(Stat {
				value: 40.0,
				suffix: "".into(),
				fractional: false,
			})
		);
	}

	#[test]
	fn parses_fractional_stats() {
		let stat = parse_stat("99.95%").unwrap();
		assert_eq!(stat.value, 99.95);
		assert_eq!(stat.suffix, "%");
		assert!(stat.fractional);
	}

	#[test]
	fn rejects_non_numeric_labels() {
		assert_eq!(parse_stat("N/A"), None);
		assert_eq!(parse_stat(""), None);
	}

	#[test]
	fn counts_up_and_clamps_at_target() {
		let mut counter = Counter::new(parse_stat("12+").unwrap());
		let mut ticks = 0;
		while !counter.tick() {
			ticks += 1;
			assert!(ticks <= TICKS as usize, "counter never finished");
		}
		assert_eq!(counter.display(), "12+");
	}

	#[test]
	fn fractional_targets_format_with_two_decimals() {
		let mut counter = Counter::new(parse_stat("99.95%").unwrap());
		while !counter.tick() {}
		assert_eq!(counter.display(), "99.95%");
	}

	#[test]
	fn integer_display_floors_intermediate_values() {
		let mut counter = Counter::new(parse_stat("10").unwrap());
		counter.tick(); // 0.25
		assert_eq!(counter.display(), "0");
		counter.tick(); // 0.5
		counter.tick(); // 0.75
		counter.tick(); // 1.0
		assert_eq!(counter.display(), "1");
	}
}
