pub mod assemble;
pub mod select;
pub mod signals;

use std::{future::Future, pin::Pin, sync::Arc};

use sift_config::{AnnotatorProviderConfig, Config, EmbeddingProviderConfig};
use sift_domain::{Document, ScoredPassage};
use sift_extract::ExtractionConfig;
use sift_providers::PosToken;

pub use assemble::{Metadata, RankedOutput, Section, Subsection};

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Provider error: {message}")]
	Provider { message: String },
}

impl From<sift_providers::Error> for Error {
	fn from(err: sift_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, sift_providers::Result<Vec<Vec<f32>>>>;
}

pub trait AnnotationProvider
where
	Self: Send + Sync,
{
	fn annotate<'a>(
		&'a self,
		cfg: &'a AnnotatorProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, sift_providers::Result<Vec<Vec<PosToken>>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub annotator: Arc<dyn AnnotationProvider>,
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, sift_providers::Result<Vec<Vec<f32>>>> {
		Box::pin(sift_providers::embedding::embed(cfg, texts))
	}
}

impl AnnotationProvider for DefaultProviders {
	fn annotate<'a>(
		&'a self,
		cfg: &'a AnnotatorProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, sift_providers::Result<Vec<Vec<PosToken>>>> {
		Box::pin(sift_providers::annotate::annotate(cfg, texts))
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { embedding: Arc::new(DefaultProviders), annotator: Arc::new(DefaultProviders) }
	}
}

pub struct RankService {
	pub cfg: Config,
	pub providers: Providers,
}

impl RankService {
	pub fn new(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}

	/// The single query string every signal scores against.
	pub fn prompt(persona: &str, job: &str) -> String {
		format!("Persona: {persona}. Job to be done: {job}")
	}

	/// Runs the whole pipeline over the given documents. Returns
	/// `Ok(None)` when no document yields any passage; a provider
	/// failure is fatal for the run since every score depends on it.
	pub async fn rank(
		&self,
		persona: &str,
		job: &str,
		documents: &[Document],
	) -> Result<Option<RankedOutput>> {
		let prompt = Self::prompt(persona, job);
		let prompt_vec = self
			.providers
			.embedding
			.embed(&self.cfg.providers.embedding, std::slice::from_ref(&prompt))
			.await?
			.pop()
			.ok_or_else(|| Error::Provider {
				message: "Embedding provider returned no vector for the prompt.".to_string(),
			})?;
		let extraction = ExtractionConfig { window: self.cfg.extraction.window };
		let passages: Vec<_> = documents
			.iter()
			.flat_map(|document| sift_extract::extract_passages(document, &extraction))
			.collect();

		if passages.is_empty() {
			tracing::warn!("No passages extracted from any document; nothing to rank.");

			return Ok(None);
		}

		tracing::debug!(passages = passages.len(), "Scoring extracted passages.");

		let texts: Vec<String> = passages.iter().map(|passage| passage.text.clone()).collect();
		let vectors =
			self.providers.embedding.embed(&self.cfg.providers.embedding, &texts).await?;
		let annotations =
			self.providers.annotator.annotate(&self.cfg.providers.annotator, &texts).await?;

		if vectors.len() != texts.len() || annotations.len() != texts.len() {
			return Err(Error::Provider {
				message: format!(
					"Providers returned {} vectors and {} annotations for {} passages.",
					vectors.len(),
					annotations.len(),
					texts.len()
				),
			});
		}

		let ranking = &self.cfg.ranking;
		let scored: Vec<ScoredPassage> = passages
			.into_iter()
			.zip(vectors)
			.zip(annotations)
			.map(|((passage, vector), tokens)| {
				let similarity = signals::cosine_similarity(&vector, &prompt_vec);
				let keyword = signals::keyword_score(&passage.text, &prompt);
				let intent = signals::intent_score(&tokens);
				let score = signals::hybrid_score(ranking, similarity, keyword, intent);

				ScoredPassage { passage, score }
			})
			.collect();
		let selected = select::select(
			scored,
			ranking.per_document_top as usize,
			ranking.top_k as usize,
		);
		let input_documents = documents.iter().map(|document| document.name.clone()).collect();

		Ok(Some(assemble::assemble(
			&selected,
			input_documents,
			persona,
			job,
			time::OffsetDateTime::now_utc(),
		)))
	}
}
