//! Page-supplied configuration for the behavior layer.
//!
//! The host page can embed overrides as JSON in a
//! `<script id="fx-config" type="application/json">` tag. Every field has a
//! built-in default matching the portfolio's shipped content, so the tag is
//! optional.

use serde::Deserialize;

/// Tunable knobs for the behavior layer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FxConfig {
	/// Phrases the hero typewriter cycles through.
	pub phrases: Vec<String>,
	/// Number of background particles.
	pub particle_count: usize,
	/// Fixed seed for the particle field; random when absent.
	pub seed: Option<u64>,
}

impl Default for FxConfig {
	fn default() -> Self {
		Self {
			phrases: [
				"Building distributed AI systems at scale",
				"RAG pipelines · Vector search · LLM platforms",
				"Agent orchestration with CrewAI & Google ADK",
				"High-throughput microservices on Azure & GCP",
				"Hackett Innovation Award 2025 winner 🏆",
			]
			.map(String::from)
			.to_vec(),
			particle_count: 80,
			seed: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_has_phrases_and_eighty_particles() {
		let config = FxConfig::default();
		assert_eq!(config.phrases.len(), 5);
		assert_eq!(config.particle_count, 80);
		assert_eq!(config.seed, None);
	}

	#[test]
	fn partial_json_keeps_defaults_for_the_rest() {
		let config: FxConfig =
			serde_json::from_str(r#"{"particle_count": 40, "seed": 7}"#).unwrap();
		assert_eq!(config.particle_count, 40);
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.phrases, FxConfig::default().phrases);
	}
}
