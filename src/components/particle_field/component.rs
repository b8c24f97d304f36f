//! Leptos component wrapping the particle-field canvas.
//!
//! The component creates a full-viewport canvas and wires up a window resize
//! listener plus the animation loop. The loop is a self-rescheduling
//! `requestAnimationFrame` closure that steps and renders the field each
//! frame; it runs for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::render;
use super::style::FieldStyle;

/// Renders the ambient particle background on a fixed, full-viewport canvas.
///
/// The canvas sizes itself to the window and resizes with it; each resize
/// regenerates the particle set at the new dimensions. Pass a `seed` for a
/// reproducible field; by default the seed is taken from the clock.
#[component]
pub fn ParticleCanvas(
	#[prop(default = FieldStyle::default())] style: FieldStyle,
	#[prop(default = None)] seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (field_init, animate_init, resize_cb_init) =
		(field.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let seed = seed.unwrap_or_else(|| js_sys::Date::now().to_bits());
		*field_init.borrow_mut() = Some(ParticleField::new(style.clone(), w, h, seed));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
				f.populate();
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner) = (field_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				render::render_frame(f, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="bg-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}
