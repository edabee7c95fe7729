//! System clipboard access for the copy-link action.

use std::sync::Mutex;

/// Keeps clipboard ownership alive for the process lifetime. On X11 the
/// clipboard owner must stay alive to answer paste requests from other apps.
static SYSTEM_CLIPBOARD: Mutex<Option<arboard::Clipboard>> = Mutex::new(None);

/// Copies `text` to the system clipboard.
///
/// # Errors
/// Returns an error when the clipboard cannot be opened or written, for
/// example in a headless session.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut guard = SYSTEM_CLIPBOARD
        .lock()
        .map_err(|err| format!("Failed to open clipboard: {err}"))?;

    if guard.is_none() {
        let clipboard = arboard::Clipboard::new()
            .map_err(|err| format!("Failed to open clipboard: {err}"))?;
        *guard = Some(clipboard);
    }
    if let Some(clipboard) = guard.as_mut() {
        clipboard
            .set_text(text)
            .map_err(|err| format!("Failed to copy to clipboard: {err}"))?;
    }

    Ok(())
}
