//! Leptos components rendered by the behavior layer.

pub mod particle_field;
