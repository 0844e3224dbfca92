use sift_domain::{Document, Passage, normalize};

#[derive(Clone, Copy, Debug)]
pub struct ExtractionConfig {
	/// Consecutive pages joined into one passage. Must be at least 1.
	pub window: u32,
}

/// Turns a document's pages into overlapping multi-page passages.
///
/// Window `i` (1-based) joins the raw text of pages `i..i + window` with
/// a single space; the joined text is normalized and windows that end up
/// empty are dropped. Output order is ascending starting-page order. A
/// document with fewer pages than the window yields no passages.
pub fn extract_passages(document: &Document, cfg: &ExtractionConfig) -> Vec<Passage> {
	let window = cfg.window.max(1) as usize;
	let pages = &document.pages;

	if pages.len() < window {
		return Vec::new();
	}

	let mut passages = Vec::with_capacity(pages.len() - window + 1);

	for (start, slice) in pages.windows(window).enumerate() {
		let joined =
			slice.iter().map(|page| page.text.as_str()).collect::<Vec<_>>().join(" ");
		let text = normalize(&joined);

		if text.is_empty() {
			continue;
		}

		passages.push(Passage {
			document: document.name.clone(),
			page: start as u32 + 1,
			text,
		});
	}

	passages
}
