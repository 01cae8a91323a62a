//! Dialogs port — blocking operator interaction.
//!
//! Edits prompt field by field, deletions ask for confirmation, and failures
//! are reported with a blocking alert. The browser adapter maps these onto
//! `window.prompt`, `window.confirm` and `window.alert`.

/// Blocking prompts shown to the operator.
pub trait Dialogs {
    /// Ask for a value pre-filled with `default`. `None` means cancelled.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message and wait for the operator to dismiss it.
    fn alert(&self, message: &str);
}

