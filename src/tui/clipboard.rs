//! System clipboard access for copying swatch values.

use anyhow::{Context, Result};

/// Copies swatch values to the system clipboard and remembers the last one
/// for the status bar.
#[derive(Debug, Clone, Default)]
pub struct SwatchClipboard {
    last: Option<String>,
}

impl SwatchClipboard {
    /// Create a new empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Writes `value` to the system clipboard.
    ///
    /// Returns the status message to show.
    pub fn copy(&mut self, value: &str) -> Result<String> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(value.to_string()))
            .context("Failed to copy to clipboard")?;
        tracing::debug!(value, "copied to clipboard");
        self.last = Some(value.to_string());
        Ok(format!("Copied {value}"))
    }

    /// Last value copied in this session.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
