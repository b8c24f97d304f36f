//! Ambient particle-field background.
//!
//! Renders a full-viewport canvas with:
//! - A fixed-size set of drifting points that reflect off the viewport edges
//! - Connecting lines between nearby points, fading out with distance
//! - Regeneration of the whole set whenever the window is resized
//!
//! The simulation ([`ParticleField`]) is plain state that can be stepped in
//! tests; the [`ParticleCanvas`] component owns the canvas element, the resize
//! listener, and the `requestAnimationFrame` loop.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::{FieldStyle, ParticleCanvas};
//!
//! view! { <ParticleCanvas style=FieldStyle::default() /> }
//! ```

mod component;
mod field;
mod render;
mod rng;
pub mod style;

pub use component::ParticleCanvas;
pub use field::{Particle, ParticleField};
pub use rng::Rng;
pub use style::{Color, FieldStyle};
