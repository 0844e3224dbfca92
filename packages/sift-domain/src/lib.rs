pub mod normalize;
pub mod passage;

pub use normalize::{normalize, section_title};
pub use passage::{Document, Page, Passage, ScoredPassage};
