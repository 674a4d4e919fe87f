//! Core scanning engine.
//!
//! ## Module Structure
//!
//! - `data`: shared data types (kinds, spans, verdicts, tagged comments)
//! - `classify`: comment-vs-code heuristics
//! - `extract`: per-kind span extraction and cleanup
//! - `page`: document snapshot built from HTML
//! - `fetch`: resource fetching and origin labels
//! - `scan`: page-wide aggregation with concurrent fetches

pub mod classify;
pub mod data;
pub mod extract;
pub mod fetch;
pub mod page;
pub mod scan;

pub use data::{CommentKind, TaggedComment, Verdict};
pub use fetch::{FetchError, HttpFetcher, ResourceFetcher};
pub use page::PageSnapshot;
pub use scan::{ScanOptions, scan_page};
