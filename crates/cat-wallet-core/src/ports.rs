use thiserror::Error;

use crate::domain::{CollectionSummary, FeeSummary, TokenBalancePage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("{message}")]
    Service { code: i64, message: String },
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

/// The wallet backend the views read from.
pub trait WalletServicePort: Send + Sync {
    fn fee_summary(&self) -> Result<FeeSummary, PortError>;
    fn address_cat721_collection_summary(
        &self,
        address: &str,
        collection_id: &str,
    ) -> Result<CollectionSummary, PortError>;
    fn cat20_list(
        &self,
        address: &str,
        page: u32,
        page_size: u32,
    ) -> Result<TokenBalancePage, PortError>;
}

pub trait NotifierPort {
    fn toast_success(&self, message: &str);
    fn toast_error(&self, message: &str);
}

pub trait ClipboardPort {
    fn copy_text(&self, text: &str) -> Result<(), PortError>;
}

pub trait LinkPort {
    fn open_link(&self, url: &str) -> Result<(), PortError>;
}
