use std::collections::HashMap;
use std::sync::Mutex;

use cat_wallet_core::{
    CollectionInfo, CollectionSummary, FeeOption, FeeSummary, PageRequest, PortError,
    TokenBalance, TokenBalancePage, WalletServicePort,
};

/// Acquire mutex lock, recovering from poisoned state if necessary.
macro_rules! lock_or_recover {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("memory wallet mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub fee_summary: usize,
    pub collection_summary: usize,
    pub cat20_list: usize,
}

#[derive(Debug, Default)]
struct MemoryState {
    fee_summary: FeeSummary,
    collections: HashMap<String, CollectionInfo>,
    /// (collection id, address) -> owned local ids
    owned_items: HashMap<(String, String), Vec<String>>,
    balances: HashMap<String, Vec<TokenBalance>>,
    failure: Option<PortError>,
    calls: CallCounts,
}

/// Fixture-backed wallet service.
#[derive(Debug, Default)]
pub struct InMemoryWalletService {
    state: Mutex<MemoryState>,
}

impl InMemoryWalletService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fee_summary(self, summary: FeeSummary) -> Self {
        lock_or_recover!(self.state).fee_summary = summary;
        self
    }

    pub fn with_collection(
        self,
        info: CollectionInfo,
        owner: &str,
        local_ids: Vec<String>,
    ) -> Self {
        {
            let mut state = lock_or_recover!(self.state);
            state
                .owned_items
                .insert((info.collection_id.clone(), owner.to_owned()), local_ids);
            state.collections.insert(info.collection_id.clone(), info);
        }
        self
    }

    pub fn with_balances(self, address: &str, balances: Vec<TokenBalance>) -> Self {
        lock_or_recover!(self.state)
            .balances
            .insert(address.to_owned(), balances);
        self
    }

    /// Make every following call fail with `error` until [`Self::clear_failure`].
    pub fn fail_with(&self, error: PortError) {
        lock_or_recover!(self.state).failure = Some(error);
    }

    pub fn clear_failure(&self) {
        lock_or_recover!(self.state).failure = None;
    }

    pub fn calls(&self) -> CallCounts {
        lock_or_recover!(self.state).calls
    }

    /// A small data set for running the shell without a backend.
    pub fn fixtures(address: &str) -> Self {
        let collection = CollectionInfo {
            collection_id: "f8b2c51d3e0a9c7e46b1d9a0e3f5c2b7a8d6e4f1c0b9a7e5d3c1b2a4f6e8d0c9_0"
                .to_owned(),
            name: "Fractal Felines".to_owned(),
            symbol: "FFEL".to_owned(),
            description: "Hand drawn cats minted with the CAT721 protocol.".to_owned(),
            max: "3333".to_owned(),
            premine: "333".to_owned(),
        };
        let balances = (1..=12)
            .map(|i| TokenBalance {
                token_id: format!("{i:0>64}_0"),
                name: format!("cat token {i}"),
                symbol: format!("CAT{i}"),
                amount: (i * 125_000).to_string(),
                decimals: 2,
            })
            .collect();

        Self::new()
            .with_fee_summary(FeeSummary {
                list: vec![
                    FeeOption {
                        title: "Slow".to_owned(),
                        desc: Some("About 1 hour".to_owned()),
                        fee_rate: Some(2.0),
                    },
                    FeeOption {
                        title: "Avg".to_owned(),
                        desc: Some("About 30 minutes".to_owned()),
                        fee_rate: Some(5.0),
                    },
                    FeeOption {
                        title: "Fast".to_owned(),
                        desc: Some("About 10 minutes".to_owned()),
                        fee_rate: Some(12.0),
                    },
                ],
            })
            .with_collection(
                collection,
                address,
                vec!["0".to_owned(), "17".to_owned(), "256".to_owned()],
            )
            .with_balances(address, balances)
    }
}

impl WalletServicePort for InMemoryWalletService {
    fn fee_summary(&self) -> Result<FeeSummary, PortError> {
        let mut state = lock_or_recover!(self.state);
        state.calls.fee_summary += 1;
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }
        Ok(state.fee_summary.clone())
    }

    fn address_cat721_collection_summary(
        &self,
        address: &str,
        collection_id: &str,
    ) -> Result<CollectionSummary, PortError> {
        let mut state = lock_or_recover!(self.state);
        state.calls.collection_summary += 1;
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }
        let Some(info) = state.collections.get(collection_id).cloned() else {
            return Ok(CollectionSummary::default());
        };
        let local_ids = state
            .owned_items
            .get(&(collection_id.to_owned(), address.to_owned()))
            .cloned()
            .unwrap_or_default();
        Ok(CollectionSummary {
            collection_info: Some(info),
            local_ids,
        })
    }

    fn cat20_list(
        &self,
        address: &str,
        page: u32,
        page_size: u32,
    ) -> Result<TokenBalancePage, PortError> {
        let mut state = lock_or_recover!(self.state);
        state.calls.cat20_list += 1;
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }
        let request = PageRequest::new(page, page_size);
        let all = state.balances.get(address).map(Vec::as_slice).unwrap_or(&[]);
        let start = usize::try_from(request.cursor()).unwrap_or(usize::MAX);
        let items = all
            .iter()
            .skip(start)
            .take(request.page_size as usize)
            .cloned()
            .collect();
        Ok(TokenBalancePage {
            items,
            total: all.len() as u64,
        })
    }
}
