/// A single page of raw extracted text. Page numbers are 1-based.
#[derive(Clone, Debug)]
pub struct Page {
	pub number: u32,
	pub text: String,
}

/// An input document: a name and its pages in reading order.
#[derive(Clone, Debug)]
pub struct Document {
	pub name: String,
	pub pages: Vec<Page>,
}

/// A sliding-window unit of normalized text, the atomic ranking target.
/// `page` is the first page of the window.
#[derive(Clone, Debug, PartialEq)]
pub struct Passage {
	pub document: String,
	pub page: u32,
	pub text: String,
}

/// A passage with its relevance score. Produced by a pure scoring pass,
/// never mutated afterwards.
#[derive(Clone, Debug)]
pub struct ScoredPassage {
	pub passage: Passage,
	pub score: f32,
}
