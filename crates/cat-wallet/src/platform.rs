//! Desktop implementations of the clipboard and link ports

use cat_wallet_core::{ClipboardPort, LinkPort, PortError};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), PortError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PortError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| PortError::Clipboard(e.to_string()))
    }
}

/// Opens links in the system browser, which gives each its own tab.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkPort for SystemBrowser {
    fn open_link(&self, url: &str) -> Result<(), PortError> {
        tracing::debug!(%url, "open link");
        open::that(url).map_err(|e| PortError::Transport(format!("could not open {url}: {e}")))
    }
}
