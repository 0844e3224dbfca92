use time::OffsetDateTime;

use sift_domain::{ScoredPassage, section_title};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RankedOutput {
	pub metadata: Metadata,
	pub extracted_sections: Vec<Section>,
	pub subsection_analysis: Vec<Subsection>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
	pub input_documents: Vec<String>,
	pub persona: String,
	pub job_to_be_done: String,
	#[serde(with = "time::serde::rfc3339")]
	pub processing_timestamp: OffsetDateTime,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Section {
	pub document: String,
	pub section_title: String,
	pub importance_rank: u32,
	pub page_number: u32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Subsection {
	pub document: String,
	pub refined_text: String,
	pub page_number: u32,
}

/// Builds the two parallel ranked views from the selector's output.
/// Rank is positional: entry `i` carries `importance_rank == i + 1`, so
/// reordering the input always reorders the ranks with it.
pub fn assemble(
	selected: &[ScoredPassage],
	input_documents: Vec<String>,
	persona: &str,
	job: &str,
	processed_at: OffsetDateTime,
) -> RankedOutput {
	let mut extracted_sections = Vec::with_capacity(selected.len());
	let mut subsection_analysis = Vec::with_capacity(selected.len());

	for (idx, scored) in selected.iter().enumerate() {
		extracted_sections.push(Section {
			document: scored.passage.document.clone(),
			section_title: section_title(&scored.passage.text),
			importance_rank: idx as u32 + 1,
			page_number: scored.passage.page,
		});
		subsection_analysis.push(Subsection {
			document: scored.passage.document.clone(),
			refined_text: scored.passage.text.clone(),
			page_number: scored.passage.page,
		});
	}

	RankedOutput {
		metadata: Metadata {
			input_documents,
			persona: persona.to_string(),
			job_to_be_done: job.to_string(),
			processing_timestamp: processed_at,
		},
		extracted_sections,
		subsection_analysis,
	}
}
