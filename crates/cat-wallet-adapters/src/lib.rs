pub mod config;
pub mod http_wallet;
pub mod memory_wallet;

pub use config::WalletServiceConfig;
pub use http_wallet::HttpWalletService;
pub use memory_wallet::{CallCounts, InMemoryWalletService};
