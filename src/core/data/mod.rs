//! Core data types shared by extraction, classification and reporting.
//!
//! ## Module Structure
//!
//! - `comment`: CommentKind and the final TaggedComment with its wire encoding
//! - `span`: RawSpan and CleanedComment (pre-classification stages)
//! - `verdict`: Verdict and KeepReason (classification outcome)

pub mod comment;
pub mod span;
pub mod verdict;

pub use comment::{CommentKind, DecodeError, TaggedComment, UNKNOWN_ORIGIN};
pub use span::{CleanedComment, RawSpan};
pub use verdict::{KeepReason, Verdict};
