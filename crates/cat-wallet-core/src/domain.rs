use serde::{Deserialize, Serialize};

/// Fee rate used whenever no usable value is available.
pub const FALLBACK_FEE_RATE: f64 = 5.0;

/// Default page request used by the asset list on first mount.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeOption {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<f64>,
}

impl FeeOption {
    pub fn preset(title: impl Into<String>, fee_rate: f64) -> Self {
        Self {
            title: title.into(),
            desc: None,
            fee_rate: Some(fee_rate),
        }
    }

    pub fn custom() -> Self {
        Self {
            title: "Custom".to_owned(),
            desc: None,
            fee_rate: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSummary {
    pub list: Vec<FeeOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    pub collection_id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    pub max: String,
    pub premine: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    #[serde(default)]
    pub collection_info: Option<CollectionInfo>,
    #[serde(default)]
    pub local_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub token_id: String,
    pub name: String,
    pub symbol: String,
    /// Integer amount in base units.
    pub amount: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalancePage {
    #[serde(rename = "list")]
    pub items: Vec<TokenBalance>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Offset of the first item of this page, as used by cursor-based APIs.
    pub fn cursor(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChainType {
    BitcoinMainnet,
    BitcoinTestnet,
    BitcoinSignet,
    #[default]
    FractalMainnet,
    FractalTestnet,
}

impl ChainType {
    pub const ALL: [ChainType; 5] = [
        ChainType::BitcoinMainnet,
        ChainType::BitcoinTestnet,
        ChainType::BitcoinSignet,
        ChainType::FractalMainnet,
        ChainType::FractalTestnet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChainType::BitcoinMainnet => "Bitcoin Mainnet",
            ChainType::BitcoinTestnet => "Bitcoin Testnet",
            ChainType::BitcoinSignet => "Bitcoin Signet",
            ChainType::FractalMainnet => "Fractal Bitcoin Mainnet",
            ChainType::FractalTestnet => "Fractal Bitcoin Testnet",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ChainType::BitcoinMainnet => "bitcoin-mainnet",
            ChainType::BitcoinTestnet => "bitcoin-testnet",
            ChainType::BitcoinSignet => "bitcoin-signet",
            ChainType::FractalMainnet => "fractal-mainnet",
            ChainType::FractalTestnet => "fractal-testnet",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

/// Which token standards are queried and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedAssets {
    pub cat20: bool,
    pub cat721: bool,
}

impl Default for SupportedAssets {
    fn default() -> Self {
        Self {
            cat20: true,
            cat721: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    pub alias: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyring {
    pub key: String,
    pub alias: String,
}

/// Everything a screen needs to know about the active wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletContext {
    pub account: Account,
    pub keyring: Keyring,
    pub chain: ChainType,
    pub supported_assets: SupportedAssets,
}

impl WalletContext {
    pub fn address(&self) -> &str {
        &self.account.address
    }
}
