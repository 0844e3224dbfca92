use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub extraction: Extraction,
	#[serde(default)]
	pub ranking: Ranking,
	pub providers: Providers,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Extraction {
	/// Number of consecutive pages joined into one passage.
	#[serde(default = "default_window")]
	pub window: u32,
}

#[derive(Debug, Deserialize)]
pub struct Ranking {
	#[serde(default = "default_similarity_weight")]
	pub similarity_weight: f32,
	#[serde(default = "default_keyword_weight")]
	pub keyword_weight: f32,
	#[serde(default = "default_intent_weight")]
	pub intent_weight: f32,
	/// Passages one document may contribute to the global pool.
	#[serde(default = "default_per_document_top")]
	pub per_document_top: u32,
	#[serde(default = "default_top_k")]
	pub top_k: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub annotator: AnnotatorProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct AnnotatorProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

impl Default for Extraction {
	fn default() -> Self {
		Self { window: default_window() }
	}
}

impl Default for Ranking {
	fn default() -> Self {
		Self {
			similarity_weight: default_similarity_weight(),
			keyword_weight: default_keyword_weight(),
			intent_weight: default_intent_weight(),
			per_document_top: default_per_document_top(),
			top_k: default_top_k(),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_window() -> u32 {
	2
}

fn default_similarity_weight() -> f32 {
	0.8
}

fn default_keyword_weight() -> f32 {
	0.1
}

fn default_intent_weight() -> f32 {
	0.1
}

fn default_per_document_top() -> u32 {
	2
}

fn default_top_k() -> u32 {
	5
}
