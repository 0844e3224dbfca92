mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	AnnotatorProviderConfig, Config, EmbeddingProviderConfig, Extraction, Providers, Ranking,
	Service,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.extraction.window == 0 {
		return Err(Error::Validation {
			message: "extraction.window must be greater than zero.".to_string(),
		});
	}
	if cfg.ranking.per_document_top == 0 {
		return Err(Error::Validation {
			message: "ranking.per_document_top must be greater than zero.".to_string(),
		});
	}
	if cfg.ranking.top_k == 0 {
		return Err(Error::Validation {
			message: "ranking.top_k must be greater than zero.".to_string(),
		});
	}

	for (name, weight) in [
		("similarity_weight", cfg.ranking.similarity_weight),
		("keyword_weight", cfg.ranking.keyword_weight),
		("intent_weight", cfg.ranking.intent_weight),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation {
				message: format!("ranking.{name} must be a finite number."),
			});
		}
		if weight < 0.0 {
			return Err(Error::Validation {
				message: format!("ranking.{name} must be zero or greater."),
			});
		}
	}

	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.annotator.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.annotator.timeout_ms must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();

	for api_base in
		[&mut cfg.providers.embedding.api_base, &mut cfg.providers.annotator.api_base]
	{
		while api_base.ends_with('/') {
			api_base.pop();
		}
	}
}
