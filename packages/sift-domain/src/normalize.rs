use unicode_normalization::UnicodeNormalization;

const TITLE_MAX_CHARS: usize = 60;

/// Canonicalizes raw extracted text: NFKC normalization, control
/// characters replaced by spaces, whitespace runs collapsed to one
/// space, leading/trailing whitespace trimmed.
///
/// Total and idempotent. NFKC covers the glyph repair: compatibility
/// decomposition expands the typographic ligatures (U+FB00..U+FB04),
/// and canonical composition folds decomposed accented Latin letters
/// into their composed forms.
pub fn normalize(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut pending_space = false;

	for ch in raw.nfkc() {
		// Cc covers C0, DEL and C1; each occurrence becomes a space.
		if ch.is_control() || ch.is_whitespace() {
			pending_space = true;

			continue;
		}
		if pending_space && !out.is_empty() {
			out.push(' ');
		}

		pending_space = false;

		out.push(ch);
	}

	out
}

/// Derives a display title from normalized passage text: at most 60
/// characters, with a trailing ellipsis marker when truncated.
pub fn section_title(text: &str) -> String {
	let snippet = normalize(text);

	if snippet.chars().count() <= TITLE_MAX_CHARS {
		return snippet;
	}

	let truncated: String = snippet.chars().take(TITLE_MAX_CHARS).collect();

	format!("{}...", truncated.trim_end())
}
