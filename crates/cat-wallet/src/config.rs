//! Start-up configuration for the shell

use std::env;

use eyre::{bail, eyre, WrapErr};

use cat_wallet_core::{
    Account, ChainType, PageRequest, SupportedAssets, WalletContext, DEFAULT_PAGE_SIZE,
};

pub const ADDRESS_ENV: &str = "CAT_WALLET_ADDRESS";
pub const CHAIN_ENV: &str = "CAT_WALLET_CHAIN";
pub const ASSETS_ENV: &str = "CAT_WALLET_ASSETS";
pub const PAGE_SIZE_ENV: &str = "CAT_WALLET_PAGE_SIZE";

const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub address: String,
    pub chain: ChainType,
    pub supported_assets: SupportedAssets,
    pub page_size: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            address: "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr".to_owned(),
            chain: ChainType::default(),
            supported_assets: SupportedAssets::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unlike the service config, malformed values here are errors: the shell
    /// refuses to start rather than show the wrong wallet.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut cfg = Self::default();

        if let Some(address) = lookup(ADDRESS_ENV) {
            let address = address.trim();
            if address.is_empty() {
                bail!("{ADDRESS_ENV} is set but empty");
            }
            cfg.address = address.to_owned();
        }

        if let Some(chain) = lookup(CHAIN_ENV) {
            cfg.chain = ChainType::from_slug(&chain).ok_or_else(|| {
                let known: Vec<&str> = ChainType::ALL.iter().map(ChainType::slug).collect();
                eyre!("unknown chain {chain:?}, expected one of {}", known.join(", "))
            })?;
        }

        if let Some(assets) = lookup(ASSETS_ENV) {
            cfg.supported_assets = parse_assets(&assets)?;
        }

        if let Some(size) = lookup(PAGE_SIZE_ENV) {
            let size: u32 = size
                .trim()
                .parse()
                .wrap_err_with(|| format!("{PAGE_SIZE_ENV} must be a number, got {size:?}"))?;
            if !(1..=MAX_PAGE_SIZE).contains(&size) {
                bail!("{PAGE_SIZE_ENV} must be between 1 and {MAX_PAGE_SIZE}, got {size}");
            }
            cfg.page_size = size;
        }

        Ok(cfg)
    }

    pub fn wallet_context(&self) -> WalletContext {
        WalletContext {
            account: Account {
                address: self.address.clone(),
                alias: "Account 1".to_owned(),
            },
            chain: self.chain,
            supported_assets: self.supported_assets,
            ..WalletContext::default()
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(1, self.page_size)
    }
}

/// Comma separated asset kinds, e.g. `cat20,cat721`. An empty list disables both.
fn parse_assets(value: &str) -> eyre::Result<SupportedAssets> {
    let mut assets = SupportedAssets {
        cat20: false,
        cat721: false,
    };
    for kind in value.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        match kind.to_ascii_lowercase().as_str() {
            "cat20" => assets.cat20 = true,
            "cat721" => assets.cat721 = true,
            other => bail!("unknown asset kind {other:?} in {ASSETS_ENV}"),
        }
    }
    Ok(assets)
}
