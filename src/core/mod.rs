//! Core domain models.
//!
//! Comments, the marker that identifies the bot's own comment, and the
//! repository/PR addressing types. No I/O happens here.

pub mod comment;
pub mod target;

pub use comment::{COMMENT_MARKER, Comment, find_marked, render_body};
pub use target::{PrNumber, Repository};
