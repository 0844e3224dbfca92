use sift_domain::{normalize, section_title};

#[test]
fn collapses_whitespace_and_controls() {
	assert_eq!(normalize("a\x00b\tc\n\nd   e"), "a b c d e");
}

#[test]
fn strips_c1_controls() {
	assert_eq!(normalize("a\u{0085}b\u{009F}c"), "a b c");
}

#[test]
fn expands_ligatures() {
	assert_eq!(normalize("e\u{FB03}cient o\u{FB00}er"), "efficient offer");
	assert_eq!(normalize("\u{FB01}ne \u{FB02}at ba\u{FB04}e"), "fine flat baffle");
}

#[test]
fn composes_decomposed_diacritics() {
	// 'e' followed by a combining acute accent composes to a single char.
	assert_eq!(normalize("caf\u{0065}\u{0301}"), "caf\u{00E9}");
}

#[test]
fn trims_leading_and_trailing_whitespace() {
	assert_eq!(normalize("  hello world \r\n"), "hello world");
}

#[test]
fn empty_input_yields_empty_output() {
	assert_eq!(normalize(""), "");
	assert_eq!(normalize(" \t\n\x1F"), "");
}

#[test]
fn normalization_is_idempotent() {
	let samples = [
		"",
		"plain text",
		"  spaced\t\tout  ",
		"e\u{FB03}cient \u{2022} bullet",
		"caf\u{0065}\u{0301} au lait\x07",
		"\u{00A0}non-breaking\u{00A0}space",
	];

	for sample in samples {
		let once = normalize(sample);
		let twice = normalize(&once);

		assert_eq!(once, twice, "normalize must be idempotent for {sample:?}");
	}
}

#[test]
fn output_has_no_controls_or_space_runs() {
	let out = normalize("a\x00\x01  b\u{0085}\u{0085}c\t \t d");

	assert!(!out.chars().any(char::is_control));
	assert!(!out.contains("  "));
}

#[test]
fn short_titles_pass_through() {
	assert_eq!(section_title("Introduction"), "Introduction");
}

#[test]
fn long_titles_truncate_with_ellipsis() {
	let text = "x".repeat(80);
	let title = section_title(&text);

	assert_eq!(title, format!("{}...", "x".repeat(60)));
}

#[test]
fn truncated_titles_drop_trailing_space_before_ellipsis() {
	let text = format!("{} {}", "y".repeat(59), "z".repeat(20));
	let title = section_title(&text);

	assert_eq!(title, format!("{}...", "y".repeat(59)));
}
