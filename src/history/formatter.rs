//! Display formatting for history entries.

use crate::core::Feedback;

/// Format one history line: `"#{attempt}: {guess} → {emoji} {label}"`.
///
/// ```
/// use guess_engine::core::Feedback;
/// use guess_engine::history::format_entry;
///
/// assert_eq!(format_entry(3, 42, Feedback::Correct), "#3: 42 → 🎉 Correct!");
/// ```
#[must_use]
pub fn format_entry(attempt: u32, guess: i64, feedback: Feedback) -> String {
    format!("#{attempt}: {guess} → {} {}", feedback.emoji(), feedback.label())
}
