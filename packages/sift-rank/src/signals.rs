use sift_config::Ranking;
use sift_providers::PosToken;

const KEYWORD_MATCH_WEIGHT: f32 = 0.03;
const KEYWORD_CAP: f32 = 0.15;
const INTENT_VERB_WEIGHT: f32 = 0.02;
const INTENT_CAP: f32 = 0.1;

/// Prompt tokens skipped by the keyword signal. Tokens of length <= 2
/// are filtered before this table is consulted, so it only lists longer
/// function words.
const STOP_WORDS: &[&str] = &[
	"about", "above", "after", "again", "all", "and", "any", "are", "because", "been", "before",
	"being", "below", "between", "both", "but", "can", "could", "did", "does", "doing", "down",
	"during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "her",
	"here", "hers", "him", "his", "how", "into", "its", "itself", "just", "more", "most", "not",
	"now", "off", "once", "only", "other", "our", "ours", "out", "over", "own", "same", "she",
	"should", "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
	"these", "they", "this", "those", "through", "too", "under", "until", "very", "was", "were",
	"what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
	"you", "your", "yours",
];

/// Counts prompt tokens (stop words and tokens of length <= 2 dropped,
/// repeats counted per occurrence) contained in the lowercased text.
/// Containment is substring match, not whole-word match; "report" in
/// the prompt matches "reported" in the text. That over-counting is the
/// original heuristic and is kept.
pub fn keyword_score(text: &str, prompt: &str) -> f32 {
	let text = text.to_lowercase();
	let matched = prompt
		.to_lowercase()
		.split_whitespace()
		.filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
		.filter(|word| text.contains(*word))
		.count();

	(matched as f32 * KEYWORD_MATCH_WEIGHT).min(KEYWORD_CAP)
}

/// Counts action-oriented verb forms: coarse tag `VERB` with fine tag
/// `VB` (base form) or `VBP` (non-3rd-person present). Past tense and
/// gerunds do not count.
pub fn intent_score(tokens: &[PosToken]) -> f32 {
	let verbs = tokens
		.iter()
		.filter(|token| token.pos == "VERB" && matches!(token.tag.as_str(), "VB" | "VBP"))
		.count();

	(verbs as f32 * INTENT_VERB_WEIGHT).min(INTENT_CAP)
}

/// Cosine similarity with zero-magnitude and length-mismatch inputs
/// mapped to 0.0 rather than an error.
pub fn cosine_similarity(lhs: &[f32], rhs: &[f32]) -> f32 {
	if lhs.is_empty() || lhs.len() != rhs.len() {
		return 0.0;
	}

	let mut dot = 0.0_f32;
	let mut lhs_norm = 0.0_f32;
	let mut rhs_norm = 0.0_f32;

	for (l, r) in lhs.iter().zip(rhs.iter()) {
		dot += l * r;
		lhs_norm += l * l;
		rhs_norm += r * r;
	}

	if lhs_norm <= f32::EPSILON || rhs_norm <= f32::EPSILON {
		return 0.0;
	}

	(dot / (lhs_norm.sqrt() * rhs_norm.sqrt())).clamp(-1.0, 1.0)
}

/// Weighted combination of the three signals. Semantic similarity
/// dominates; the capped keyword and intent terms are small corrective
/// signals. The result is used for relative ordering only.
pub fn hybrid_score(cfg: &Ranking, similarity: f32, keyword: f32, intent: f32) -> f32 {
	cfg.similarity_weight * similarity + cfg.keyword_weight * keyword + cfg.intent_weight * intent
}
