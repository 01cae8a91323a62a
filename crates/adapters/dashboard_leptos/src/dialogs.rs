//! `window.prompt` / `window.confirm` / `window.alert` as the [`Dialogs`] port.

use listhub_app::ports::Dialogs;

/// Native browser dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDialogs;

impl Dialogs for WebDialogs {
    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window()
            && let Err(err) = window.alert_with_message(message)
        {
            tracing::error!(?err, text = message, "alert could not be shown");
        }
    }
}
