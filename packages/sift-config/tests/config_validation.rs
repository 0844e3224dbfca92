use toml::Value;

use sift_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_with<F>(mutate: F) -> Config
where
	F: FnOnce(&mut toml::Table),
{
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	mutate(root);

	let rendered = toml::to_string(&value).expect("Failed to render sample config.");

	toml::from_str(&rendered).expect("Failed to deserialize sample config.")
}

fn set_ranking(root: &mut toml::Table, key: &str, value: Value) {
	root.get_mut("ranking")
		.and_then(Value::as_table_mut)
		.expect("Sample config must include [ranking].")
		.insert(key.to_string(), value);
}

fn expect_validation_error(cfg: &Config, needle: &str) {
	match sift_config::validate(cfg) {
		Err(Error::Validation { message }) => {
			assert!(message.contains(needle), "Unexpected message: {message}")
		},
		other => panic!("Expected validation error for {needle}, got {other:?}"),
	}
}

#[test]
fn accepts_sample_config() {
	let cfg = sample_with(|_| {});

	sift_config::validate(&cfg).expect("Sample config must validate.");
}

#[test]
fn rejects_zero_window() {
	let cfg = sample_with(|root| {
		root.get_mut("extraction")
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [extraction].")
			.insert("window".to_string(), Value::Integer(0));
	});

	expect_validation_error(&cfg, "extraction.window");
}

#[test]
fn rejects_zero_top_k() {
	let cfg = sample_with(|root| set_ranking(root, "top_k", Value::Integer(0)));

	expect_validation_error(&cfg, "ranking.top_k");
}

#[test]
fn rejects_zero_per_document_top() {
	let cfg = sample_with(|root| set_ranking(root, "per_document_top", Value::Integer(0)));

	expect_validation_error(&cfg, "ranking.per_document_top");
}

#[test]
fn rejects_negative_weight() {
	let cfg = sample_with(|root| set_ranking(root, "keyword_weight", Value::Float(-0.1)));

	expect_validation_error(&cfg, "ranking.keyword_weight");
}

#[test]
fn rejects_non_finite_weight() {
	let cfg = sample_with(|root| set_ranking(root, "similarity_weight", Value::Float(f64::NAN)));

	expect_validation_error(&cfg, "ranking.similarity_weight");
}

#[test]
fn rejects_zero_embedding_dimensions() {
	let cfg = sample_with(|root| {
		root.get_mut("providers")
			.and_then(Value::as_table_mut)
			.and_then(|providers| providers.get_mut("embedding"))
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [providers.embedding].")
			.insert("dimensions".to_string(), Value::Integer(0));
	});

	expect_validation_error(&cfg, "providers.embedding.dimensions");
}

#[test]
fn defaults_fill_missing_ranking_section() {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	root.remove("ranking");
	root.remove("extraction");

	let rendered = toml::to_string(&value).expect("Failed to render sample config.");
	let cfg: Config = toml::from_str(&rendered).expect("Failed to deserialize sample config.");

	assert_eq!(cfg.extraction.window, 2);
	assert_eq!(cfg.ranking.per_document_top, 2);
	assert_eq!(cfg.ranking.top_k, 5);
	assert!((cfg.ranking.similarity_weight - 0.8).abs() < f32::EPSILON);
	sift_config::validate(&cfg).expect("Defaults must validate.");
}
