//! Guess history: the per-round log and its display format.

mod formatter;
mod record;

pub use formatter::format_entry;
pub use record::{GuessHistory, HistoryEntry};
