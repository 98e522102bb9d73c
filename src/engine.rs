//! Corpus analysis engine.
//!
//! This module holds the pipeline stages that turn the raw annotated text
//! into the queryable structures exposed by `crate::api::Analysis`.
//!
//! ## How the parts work together
//!
//! Analysis of a document is a strictly forward pipeline:
//!
//! ```text
//! raw text ── DocumentParser::parse ──> Corpus + ParseStats   (parser.rs)
//!                    │
//!                    ▼
//!           ChapterIndex::build                               (index.rs)
//!             chapter → verse → sentence indices
//!                    │
//!      ┌─────────────┴─────────────┐
//!      ▼                           ▼
//! extract_characters          detect_cues
//!   (matcher.rs)               (detector.rs)
//!   one pass over Corpus       one pass over Corpus
//! ```
//!
//! The two matching passes are independent of each other and both compare
//! Greek strings exclusively through `crate::greek::normalize`. No stage
//! mutates another stage's output: the parser builds the corpus once, and
//! every derived structure refers to sentences by index.
//!
//! ## Responsibilities by module
//!
//! - `parser.rs`: line classification, sentence assembly, chapter/verse
//!   metadata extraction, malformed-line recovery.
//! - `index.rs`: the chapter → verse lookup structure and the verse-range
//!   text query.
//! - `matcher.rs`: the registry-driven character/entity pass.
//! - `detector.rs`: the five-category discourse-cue pass.

pub(crate) mod detector;
pub(crate) mod index;
pub(crate) mod matcher;
pub(crate) mod parser;
