//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a server:
//! - errors: Transport error classification and formatting for logs
//! - flow: Per-flow generation tracking (in-flight guard, stale responses)
//! - forms: Question and Zotero form validation
//! - path: Parsing paths dropped (pasted) onto the drop zone

pub mod errors;
pub mod flow;
pub mod forms;
pub mod path;
