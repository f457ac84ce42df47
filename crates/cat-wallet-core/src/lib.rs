pub mod asset_list;
pub mod collection;
pub mod domain;
pub mod fee_rate;
pub mod fetch;
pub mod format;
pub mod ports;
pub mod routes;

pub use asset_list::{AssetFetch, AssetList, AssetListCommand, AssetListPhase};
pub use collection::{CollectionFetch, CollectionScreen, CollectionView, RowAction, SectionRow};
pub use domain::{
    Account, ChainType, CollectionInfo, CollectionSummary, FeeOption, FeeSummary, Keyring,
    PageRequest, SupportedAssets, TokenBalance, TokenBalancePage, WalletContext,
    DEFAULT_PAGE_SIZE, FALLBACK_FEE_RATE,
};
pub use fee_rate::{
    derive_effective_fee_rate, FeeRateEvent, FeeRateSelector, FeeSelectorPhase, FeeTier,
    FeeTierKind, FeeTile,
};
pub use fetch::{CommitOutcome, FetchGuard, FetchTicket};
pub use ports::{ClipboardPort, LinkPort, NotifierPort, PortError, WalletServicePort};
pub use routes::{NavStack, Route};
