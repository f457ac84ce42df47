//! Paginated CAT20 balance list.
//!
//! The list refetches whenever its inputs (page, account, chain, enabled
//! asset kinds) change. Each fetch carries a ticket; only the newest one is
//! allowed to replace the held page.

use tracing::{debug, warn};

use crate::domain::{ChainType, PageRequest, SupportedAssets, TokenBalance, TokenBalancePage, WalletContext};
use crate::fetch::{CommitOutcome, FetchGuard, FetchTicket};
use crate::ports::PortError;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetListPhase {
    /// Nothing committed yet, total unknown.
    Loading,
    Empty,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFetch {
    pub ticket: FetchTicket,
    pub address: String,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetListCommand {
    Fetch(AssetFetch),
    /// CAT20 is disabled; the list is empty and the service is not called.
    ShowEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListInputs {
    address: String,
    chain: ChainType,
    supported_assets: SupportedAssets,
}

impl ListInputs {
    fn from_context(ctx: &WalletContext) -> Self {
        Self {
            address: ctx.address().to_owned(),
            chain: ctx.chain,
            supported_assets: ctx.supported_assets,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetList {
    inputs: ListInputs,
    pagination: PageRequest,
    tokens: Vec<TokenBalance>,
    total: Option<u64>,
    fetch: FetchGuard,
}

impl AssetList {
    pub fn new(ctx: &WalletContext, pagination: PageRequest) -> Self {
        Self {
            inputs: ListInputs::from_context(ctx),
            pagination,
            tokens: Vec::new(),
            total: None,
            fetch: FetchGuard::default(),
        }
    }

    pub fn phase(&self) -> AssetListPhase {
        match self.total {
            None => AssetListPhase::Loading,
            Some(0) => AssetListPhase::Empty,
            Some(_) => AssetListPhase::Ready,
        }
    }

    pub fn tokens(&self) -> &[TokenBalance] {
        &self.tokens
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn pagination(&self) -> PageRequest {
        self.pagination
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total.unwrap_or(0), self.pagination.page_size)
    }

    /// Load the current page. Called on mount and by every input change.
    pub fn refresh(&mut self) -> AssetListCommand {
        if !self.inputs.supported_assets.cat20 {
            debug!("cat20 disabled, skipping balance fetch");
            self.fetch.invalidate();
            self.tokens.clear();
            self.total = Some(0);
            return AssetListCommand::ShowEmpty;
        }
        let ticket = self.fetch.begin();
        debug!(
            address = %self.inputs.address,
            page = self.pagination.page,
            page_size = self.pagination.page_size,
            generation = ticket.generation(),
            "fetch cat20 balances"
        );
        AssetListCommand::Fetch(AssetFetch {
            ticket,
            address: self.inputs.address.clone(),
            page: self.pagination,
        })
    }

    pub fn set_pagination(&mut self, pagination: PageRequest) -> Option<AssetListCommand> {
        if pagination == self.pagination {
            return None;
        }
        self.pagination = pagination;
        Some(self.refresh())
    }

    /// Jump to a page, clamped to the known page range.
    pub fn go_to_page(&mut self, page: u32) -> Option<AssetListCommand> {
        let page = page.clamp(1, self.page_count());
        self.set_pagination(PageRequest::new(page, self.pagination.page_size))
    }

    /// Pick up account, chain or asset setting changes.
    pub fn update_context(&mut self, ctx: &WalletContext) -> Option<AssetListCommand> {
        let inputs = ListInputs::from_context(ctx);
        if inputs == self.inputs {
            return None;
        }
        self.inputs = inputs;
        Some(self.refresh())
    }

    pub fn commit(
        &mut self,
        ticket: FetchTicket,
        result: Result<TokenBalancePage, PortError>,
    ) -> CommitOutcome {
        if !self.fetch.is_current(ticket) {
            if let Err(e) = &result {
                warn!(error = %e, generation = ticket.generation(), "ignoring failure of superseded balance fetch");
            } else {
                warn!(generation = ticket.generation(), "dropping stale balance page");
            }
            return CommitOutcome::Stale;
        }
        match result {
            Ok(page) => {
                debug!(items = page.items.len(), total = page.total, "balance page committed");
                self.tokens = page.items;
                self.total = Some(page.total);
                CommitOutcome::Applied
            }
            Err(e) => {
                warn!(error = %e, "balance fetch failed");
                CommitOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn token_route(&self, index: usize) -> Option<Route> {
        self.tokens.get(index).map(|balance| Route::Cat20Token {
            token_id: balance.token_id.clone(),
            balance: Some(balance.clone()),
        })
    }
}

pub fn page_count(total: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page numbers to show as buttons, centred on `current` when there are many.
pub fn visible_pages(current: u32, count: u32, max_buttons: u32) -> Vec<u32> {
    let count = count.max(1);
    let max_buttons = max_buttons.max(1);
    if count <= max_buttons {
        return (1..=count).collect();
    }
    let current = current.clamp(1, count);
    let half = max_buttons / 2;
    let start = current.saturating_sub(half).max(1).min(count - max_buttons + 1);
    (start..start + max_buttons).collect()
}
