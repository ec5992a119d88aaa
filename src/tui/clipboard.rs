//! Clipboard helper for copying record summaries
//!
//! Uses `arboard` for cross-platform support. The clipboard is created
//! fresh each time to avoid holding resources between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
/// Common failure cases: no display server (headless Linux), permission
/// denied. Callers surface failures as a toast, never as a crash.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
