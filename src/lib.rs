//! portfolio-fx: client-side animation and interaction layer for a static
//! portfolio page.
//!
//! This crate provides the page's WASM behavior layer: an ambient particle
//! background on a full-viewport canvas, plus a set of independent DOM
//! effects (typewriter tagline, stat counters, scroll reveals, nav
//! highlighting, button ripples, mouse parallax, and mobile card toggles)
//! attached to the page's static markup at load time.

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod behaviors;
pub mod components;
pub mod config;

pub use components::particle_field::{FieldStyle, ParticleCanvas, ParticleField};
pub use config::FxConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Load configuration overrides from a script element with id="fx-config".
/// Expected format: JSON with any subset of [`FxConfig`]'s fields.
fn load_config() -> Option<FxConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("fx-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FxConfig>(&json_text) {
		Ok(config) => {
			info!(
				"portfolio-fx: loaded config ({} phrases, {} particles)",
				config.phrases.len(),
				config.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse fx-config: {e}");
			None
		}
	}
}

/// Main application component.
/// Renders the particle background and attaches the page behaviors.
#[component]
pub fn App() -> impl IntoView {
	let config = load_config().unwrap_or_default();
	let style = FieldStyle {
		count: config.particle_count,
		..FieldStyle::default()
	};
	let seed = config.seed;

	// The rest of the page is static markup; behaviors attach to it once
	// the component tree has mounted.
	Effect::new(move |_| {
		behaviors::wire_all(&config);
	});

	view! { <ParticleCanvas style=style seed=seed /> }
}
