//! redline - paragraph- and word-level document redlining engine
//!
//! Given two revisions of a structured document (paragraphs, headings,
//! tables, header/footer regions), produces a third document marking
//! insertions, deletions, and moves at paragraph and word granularity,
//! plus aggregate change statistics.
//!
//! The engine itself (this crate) never parses a file format: callers
//! implement [`model::DocumentView`]/[`model::SectionView`] over whatever
//! input they have. The `adapters` module ships one reference
//! implementation for plain text.

pub mod adapters;
pub mod align;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod moves;
pub mod orchestrator;
pub mod render;
pub mod similarity;
pub mod token;
pub mod worddiff;

pub use config::EngineConfig;
pub use error::RedlineError;
pub use model::{
    AlignmentKind, AlignmentRecord, AnnotatedParagraph, Cell, DocumentView, Paragraph, Segment,
    SegmentKind, SectionView, Statistics, Table,
};
pub use orchestrator::{compare, ComparisonOutput};
