use std::{
	fs,
	path::{Path, PathBuf},
};

use sift_domain::{Document, Page};

/// Loads every `.txt` file under `dir`, sorted by file name so runs are
/// deterministic. A file that cannot be read becomes a document with
/// zero pages; it contributes no passages but still appears in the
/// result metadata.
pub fn scan_documents(dir: &Path) -> Vec<Document> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(err) => {
			tracing::warn!(error = %err, path = %dir.display(), "Failed to read documents directory.");

			return Vec::new();
		},
	};
	let mut paths: Vec<PathBuf> = entries
		.filter_map(|entry| entry.ok())
		.map(|entry| entry.path())
		.filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
		.collect();

	paths.sort();

	paths.iter().map(|path| load_document(path)).collect()
}

fn load_document(path: &Path) -> Document {
	let name =
		path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
	let raw = match fs::read_to_string(path) {
		Ok(raw) => raw,
		Err(err) => {
			tracing::warn!(error = %err, document = %name, "Failed to read document; it will contribute no passages.");

			return Document { name, pages: Vec::new() };
		},
	};

	Document { name, pages: split_pages(&raw) }
}

// Form feed is the page-break convention of pdftotext output. pdftotext
// terminates every page with one, so the final page leaves an empty
// trailing chunk that must not become a phantom page.
fn split_pages(raw: &str) -> Vec<Page> {
	let mut pages: Vec<Page> = raw
		.split('\u{000C}')
		.enumerate()
		.map(|(idx, text)| Page { number: idx as u32 + 1, text: text.to_string() })
		.collect();

	if pages.len() > 1 && pages.last().is_some_and(|page| page.text.is_empty()) {
		pages.pop();
	}

	pages
}
