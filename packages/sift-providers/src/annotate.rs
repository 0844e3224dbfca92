use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};

/// One annotated token: a coarse part-of-speech tag (e.g. `VERB`) and a
/// fine-grained morphological tag (e.g. `VB`, `VBP`).
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct PosToken {
	pub text: String,
	pub pos: String,
	pub tag: String,
}

pub async fn annotate(
	cfg: &sift_config::AnnotatorProviderConfig,
	texts: &[String],
) -> Result<Vec<Vec<PosToken>>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"input": texts,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;
	let annotations = parse_annotate_response(json)?;

	if annotations.len() != texts.len() {
		return Err(Error::InvalidResponse {
			message: format!(
				"Annotation response returned {} items for {} inputs.",
				annotations.len(),
				texts.len()
			),
		});
	}

	Ok(annotations)
}

fn parse_annotate_response(json: Value) -> Result<Vec<Vec<PosToken>>> {
	let data = json.get("data").and_then(|v| v.as_array()).ok_or_else(|| {
		Error::InvalidResponse {
			message: "Annotation response is missing data array.".to_string(),
		}
	})?;

	let mut indexed: Vec<(usize, Vec<PosToken>)> = Vec::with_capacity(data.len());

	for (fallback_index, item) in data.iter().enumerate() {
		let index = item
			.get("index")
			.and_then(|v| v.as_u64())
			.map(|v| v as usize)
			.unwrap_or(fallback_index);
		let tokens = item.get("tokens").and_then(|v| v.as_array()).ok_or_else(|| {
			Error::InvalidResponse {
				message: "Annotation item missing tokens array.".to_string(),
			}
		})?;
		let mut parsed = Vec::with_capacity(tokens.len());

		for token in tokens {
			parsed.push(serde_json::from_value::<PosToken>(token.clone())?);
		}

		indexed.push((index, parsed));
	}

	indexed.sort_by_key(|(index, _)| *index);

	Ok(indexed.into_iter().map(|(_, tokens)| tokens).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_annotations_in_index_order() {
		let json = serde_json::json!({
			"data": [
				{
					"index": 1,
					"tokens": [ { "text": "run", "pos": "VERB", "tag": "VB" } ]
				},
				{
					"index": 0,
					"tokens": [ { "text": "report", "pos": "NOUN", "tag": "NN" } ]
				}
			]
		});
		let parsed = parse_annotate_response(json).expect("parse failed");

		assert_eq!(parsed.len(), 2);
		assert_eq!(parsed[0][0].pos, "NOUN");
		assert_eq!(parsed[1][0].tag, "VB");
	}

	#[test]
	fn rejects_missing_tokens_array() {
		let json = serde_json::json!({ "data": [ { "index": 0 } ] });

		assert!(parse_annotate_response(json).is_err());
	}
}
