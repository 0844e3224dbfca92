use std::{cmp::Ordering, collections::HashMap};

use sift_domain::ScoredPassage;

/// Descending float order that is total: NaN sorts after every real
/// score, ties are left to the surrounding stable sort.
pub fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

/// Two-stage selection: each document keeps at most `per_document_top`
/// of its passages by score, then the pooled survivors are cut to the
/// global `top_k`. Both sorts are stable and descending, so equal
/// scores preserve extraction order and the result is deterministic.
/// The per-document cap keeps one passage-rich document from crowding
/// out every other document.
pub fn select(
	passages: Vec<ScoredPassage>,
	per_document_top: usize,
	top_k: usize,
) -> Vec<ScoredPassage> {
	let mut groups: Vec<Vec<ScoredPassage>> = Vec::new();
	let mut group_by_document: HashMap<String, usize> = HashMap::new();

	// First-seen document order, so grouping stays deterministic.
	for scored in passages {
		match group_by_document.get(&scored.passage.document) {
			Some(&idx) => groups[idx].push(scored),
			None => {
				group_by_document.insert(scored.passage.document.clone(), groups.len());
				groups.push(vec![scored]);
			},
		}
	}

	let mut pool = Vec::new();

	for mut group in groups {
		group.sort_by(|a, b| cmp_f32_desc(a.score, b.score));
		group.truncate(per_document_top);
		pool.extend(group);
	}

	pool.sort_by(|a, b| cmp_f32_desc(a.score, b.score));
	pool.truncate(top_k);

	pool
}

#[cfg(test)]
mod tests {
	use sift_domain::Passage;

	use super::*;

	fn scored(document: &str, page: u32, score: f32) -> ScoredPassage {
		ScoredPassage {
			passage: Passage {
				document: document.to_string(),
				page,
				text: format!("{document} page {page}"),
			},
			score,
		}
	}

	#[test]
	fn per_document_cap_keeps_best_two() {
		let passages = vec![
			scored("a.txt", 1, 0.1),
			scored("a.txt", 2, 0.9),
			scored("a.txt", 3, 0.5),
			scored("a.txt", 4, 0.7),
			scored("a.txt", 5, 0.3),
		];
		let selected = select(passages, 2, 10);

		assert_eq!(selected.len(), 2);
		assert_eq!(selected[0].passage.page, 2);
		assert_eq!(selected[1].passage.page, 4);
	}

	#[test]
	fn global_top_k_is_bounded_and_sorted() {
		let passages = vec![
			scored("a.txt", 1, 0.9),
			scored("a.txt", 2, 0.8),
			scored("b.txt", 1, 0.85),
			scored("b.txt", 2, 0.2),
			scored("c.txt", 1, 0.7),
			scored("c.txt", 2, 0.6),
		];
		let selected = select(passages, 2, 5);

		assert_eq!(selected.len(), 5);

		for pair in selected.windows(2) {
			assert!(pair[0].score >= pair[1].score);
		}
	}

	#[test]
	fn cap_preserves_cross_document_diversity() {
		// One document full of strong passages must not crowd out the rest.
		let passages = vec![
			scored("strong.txt", 1, 0.99),
			scored("strong.txt", 2, 0.98),
			scored("strong.txt", 3, 0.97),
			scored("strong.txt", 4, 0.96),
			scored("weak.txt", 1, 0.5),
		];
		let selected = select(passages, 2, 3);
		let documents: Vec<_> =
			selected.iter().map(|s| s.passage.document.as_str()).collect();

		assert_eq!(documents, vec!["strong.txt", "strong.txt", "weak.txt"]);
	}

	#[test]
	fn fewer_passages_than_top_k_returns_all() {
		let passages = vec![scored("a.txt", 1, 0.4), scored("b.txt", 1, 0.6)];
		let selected = select(passages, 2, 5);

		assert_eq!(selected.len(), 2);
		assert_eq!(selected[0].passage.document, "b.txt");
	}

	#[test]
	fn equal_scores_preserve_extraction_order() {
		let passages = vec![
			scored("a.txt", 1, 0.5),
			scored("a.txt", 2, 0.5),
			scored("b.txt", 1, 0.5),
		];
		let selected = select(passages, 2, 3);

		assert_eq!(selected[0].passage.page, 1);
		assert_eq!(selected[0].passage.document, "a.txt");
		assert_eq!(selected[1].passage.page, 2);
		assert_eq!(selected[2].passage.document, "b.txt");
	}

	#[test]
	fn nan_scores_sort_after_real_scores() {
		let passages = vec![scored("a.txt", 1, f32::NAN), scored("b.txt", 1, 0.1)];
		let selected = select(passages, 2, 5);

		assert_eq!(selected[0].passage.document, "b.txt");
		assert!(selected[1].score.is_nan());
	}

	#[test]
	fn empty_input_selects_nothing() {
		assert!(select(Vec::new(), 2, 5).is_empty());
	}
}
