//! Typewriter effect for the hero tagline.
//!
//! Cycles through a list of phrases, typing each one character by character,
//! holding, deleting, and moving on. The state machine is pure; the DOM
//! driver reschedules itself with `setTimeout` using the delay each tick
//! reports.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::document;

/// Delay before the first character is typed.
const START_DELAY_MS: i32 = 1200;
/// Delay between typed characters.
const TYPE_MS: u32 = 55;
/// Delay between deleted characters.
const DELETE_MS: u32 = 28;
/// Hold time on a fully typed phrase before deletion starts.
const HOLD_MS: u32 = 2200;
/// Pause on an empty line before the next phrase starts typing.
const REST_MS: u32 = 400;

/// Output of one typewriter tick: the text to display and how long to wait
/// before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
	pub text: String,
	pub delay_ms: u32,
}

/// Typewriter state machine. Each [`tick`](Self::tick) types or deletes one
/// character; phrase indices wrap, so the cycle never terminates.
pub struct Typewriter {
	phrases: Vec<String>,
	phrase_idx: usize,
	/// Visible prefix length in characters (not bytes).
	char_idx: usize,
	deleting: bool,
}

impl Typewriter {
	/// Create a typewriter over a non-empty phrase list.
	pub fn new(phrases: Vec<String>) -> Option<Self> {
		if phrases.is_empty() {
			return None;
		}
		Some(Self {
			phrases,
			phrase_idx: 0,
			char_idx: 0,
			deleting: false,
		})
	}

	/// Advance one character and report the new text and next delay.
	pub fn tick(&mut self) -> Step {
		let phrase = &self.phrases[self.phrase_idx];
		let len = phrase.chars().count();

		let delay_ms = if self.deleting {
			self.char_idx = self.char_idx.saturating_sub(1);
			if self.char_idx == 0 {
				self.deleting = false;
				self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
				REST_MS
			} else {
				DELETE_MS
			}
		} else {
			self.char_idx = (self.char_idx + 1).min(len);
			if self.char_idx == len {
				self.deleting = true;
				HOLD_MS
			} else {
				TYPE_MS
			}
		};

		Step {
			text: phrase.chars().take(self.char_idx).collect(),
			delay_ms,
		}
	}
}

/// Attach the typewriter to `#typewriter`, inserting its text node before the
/// `.cursor` child if one exists.
pub fn wire(phrases: &[String]) -> Option<()> {
	let mut machine = Typewriter::new(phrases.to_vec())?;
	let document = document()?;
	let el = document.get_element_by_id("typewriter")?;

	let cursor: Option<web_sys::Node> = el.query_selector(".cursor").ok().flatten().map(Into::into);
	let text_node = document.create_text_node("");
	el.insert_before(&text_node, cursor.as_ref()).ok()?;

	let window = web_sys::window()?;
	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let tick_inner = tick.clone();
	*tick.borrow_mut() = Some(Closure::new(move || {
		let step = machine.tick();
		text_node.set_data(&step.text);
		if let Some(win) = web_sys::window() {
			if let Some(ref cb) = *tick_inner.borrow() {
				let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					step.delay_ms as i32,
				);
			}
		}
	}));
	if let Some(ref cb) = *tick.borrow() {
		window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				START_DELAY_MS,
			)
			.ok()?;
	}
	Some(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn machine(phrases: &[&str]) -> Typewriter {
		Typewriter::new(phrases.iter().map(|s| s.to_string()).collect()).unwrap()
	}

	#[test]
	fn empty_phrase_list_is_rejected() {
		assert!(Typewriter::new(Vec::new()).is_none());
	}

	#[test]
	fn types_holds_deletes_and_advances() {
		let mut tw = machine(&["ab", "c"]);

		assert_eq!(tw.tick(), Step { text: "a".into(), delay_ms: TYPE_MS });
		assert_eq!(tw.tick(), Step { text: "ab".into(), delay_ms: HOLD_MS });
		assert_eq!(tw.tick(), Step { text: "a".into(), delay_ms: DELETE_MS });
		assert_eq!(tw.tick(), Step { text: "".into(), delay_ms: REST_MS });

		// Second phrase, then wrap back to the first.
		assert_eq!(tw.tick(), Step { text: "c".into(), delay_ms: HOLD_MS });
		assert_eq!(tw.tick(), Step { text: "".into(), delay_ms: REST_MS });
		assert_eq!(tw.tick(), Step { text: "a".into(), delay_ms: TYPE_MS });
	}

	#[test]
	fn every_tick_reports_a_positive_timeout_delay() {
		// The DOM driver reschedules itself with each step's delay; a zero
		// or overflowing delay would break the setTimeout handoff.
		let mut tw = machine(&["hi", "yo"]);
		for _ in 0..32 {
			let step = tw.tick();
			assert!(step.delay_ms > 0);
			assert!(i32::try_from(step.delay_ms).is_ok());
		}
	}

	#[test]
	fn counts_characters_not_bytes() {
		let mut tw = machine(&["a·🏆"]);
		assert_eq!(tw.tick().text, "a");
		assert_eq!(tw.tick().text, "a·");
		let full = tw.tick();
		assert_eq!(full.text, "a·🏆");
		assert_eq!(full.delay_ms, HOLD_MS);
	}
}
