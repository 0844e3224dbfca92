//! Deterministic stub providers for pipeline tests. No network, no
//! model weights; embeddings are vocabulary-term counts and the
//! annotator tags from a fixed verb table.

use sift_config::{AnnotatorProviderConfig, Config, EmbeddingProviderConfig};
use sift_providers::PosToken;
use sift_rank::{AnnotationProvider, BoxFuture, EmbeddingProvider};

/// Embeds a text as the count of each vocabulary term it contains.
/// Texts sharing vocabulary terms get similar vectors; texts with no
/// vocabulary overlap are orthogonal; texts matching nothing embed to
/// the zero vector, like a real model faced with degenerate input.
pub struct VocabularyEmbedding {
	vocabulary: Vec<String>,
}

impl VocabularyEmbedding {
	pub fn new<I, S>(vocabulary: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			vocabulary: vocabulary.into_iter().map(|term| term.into().to_lowercase()).collect(),
		}
	}

	pub fn vector(&self, text: &str) -> Vec<f32> {
		let lowered = text.to_lowercase();

		self.vocabulary
			.iter()
			.map(|term| lowered.matches(term.as_str()).count() as f32)
			.collect()
	}
}

impl EmbeddingProvider for VocabularyEmbedding {
	fn embed<'a>(
		&'a self,
		_cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, sift_providers::Result<Vec<Vec<f32>>>> {
		let vectors = texts.iter().map(|text| self.vector(text)).collect();

		Box::pin(async move { Ok(vectors) })
	}
}

/// Tags whitespace-split tokens from a fixed table: known verbs become
/// `VERB`/`VB`, everything else `NOUN`/`NN`.
pub struct TableAnnotator {
	verbs: Vec<String>,
}

impl TableAnnotator {
	pub fn new<I, S>(verbs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { verbs: verbs.into_iter().map(|verb| verb.into().to_lowercase()).collect() }
	}

	pub fn tokens(&self, text: &str) -> Vec<PosToken> {
		text.split_whitespace()
			.map(|word| {
				let lowered = word.to_lowercase();

				if self.verbs.contains(&lowered) {
					PosToken { text: lowered, pos: "VERB".to_string(), tag: "VB".to_string() }
				} else {
					PosToken { text: lowered, pos: "NOUN".to_string(), tag: "NN".to_string() }
				}
			})
			.collect()
	}
}

impl AnnotationProvider for TableAnnotator {
	fn annotate<'a>(
		&'a self,
		_cfg: &'a AnnotatorProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, sift_providers::Result<Vec<Vec<PosToken>>>> {
		let annotations = texts.iter().map(|text| self.tokens(text)).collect();

		Box::pin(async move { Ok(annotations) })
	}
}

/// A config with default pipeline knobs and unused placeholder provider
/// endpoints, for tests that drive the service through stub providers.
pub fn stub_config() -> Config {
	let raw = r#"
		[service]
		log_level = "info"

		[providers.embedding]
		provider_id = "stub"
		api_base = "http://localhost:0"
		api_key = "unused"
		path = "/v1/embeddings"
		model = "stub"
		dimensions = 8
		timeout_ms = 1000

		[providers.annotator]
		provider_id = "stub"
		api_base = "http://localhost:0"
		api_key = "unused"
		path = "/v1/annotate"
		model = "stub"
		timeout_ms = 1000
	"#;

	toml::from_str(raw).expect("Stub config must parse.")
}
