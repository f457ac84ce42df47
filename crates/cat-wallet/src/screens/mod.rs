//! One module per route. Each page owns its core view state and any pending
//! fetch inbox, and reports navigation through [`ScreenAction`].

use std::sync::Arc;

use eframe::egui;

use cat_wallet_core::{
    ClipboardPort, LinkPort, NotifierPort, PageRequest, Route, WalletContext, WalletServicePort,
};

pub mod asset_list;
pub mod cat20_token;
pub mod cat721_item;
pub mod collection;
pub mod fee_rate_bar;

#[cfg(test)]
mod test_support;

use asset_list::AssetListPage;
use cat20_token::Cat20TokenPage;
use cat721_item::Cat721ItemPage;
use collection::CollectionPage;
use fee_rate_bar::FeeRatePage;

/// What a page asks the shell to do after rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    None,
    Navigate(Route),
    Back,
}

/// Collaborators handed to every page for one frame.
pub struct ScreenEnv<'a> {
    pub ctx: &'a egui::Context,
    pub wallet: &'a WalletContext,
    pub service: &'a Arc<dyn WalletServicePort>,
    pub clipboard: &'a dyn ClipboardPort,
    pub links: &'a dyn LinkPort,
    pub notifier: &'a dyn NotifierPort,
}

pub enum Screen {
    AssetList(AssetListPage),
    FeeRate(FeeRatePage),
    Collection(CollectionPage),
    Cat721Item(Cat721ItemPage),
    Cat20Token(Cat20TokenPage),
}

impl Screen {
    /// Mount the page for `route`, starting its fetches.
    pub fn open(route: &Route, env: &ScreenEnv<'_>, pagination: PageRequest) -> Self {
        match route {
            Route::AssetList => Screen::AssetList(AssetListPage::open(env, pagination)),
            Route::FeeRate => Screen::FeeRate(FeeRatePage::open(env)),
            Route::Collection { collection_id } => {
                Screen::Collection(CollectionPage::open(collection_id, env))
            }
            Route::Cat721Item {
                collection_info,
                local_id,
            } => Screen::Cat721Item(Cat721ItemPage::new(collection_info.clone(), local_id.clone())),
            Route::Cat20Token { token_id, balance } => Screen::Cat20Token(Cat20TokenPage::new(
                token_id.clone(),
                balance.clone(),
            )),
        }
    }

    /// Fold finished background work into page state.
    pub fn poll(&mut self, env: &ScreenEnv<'_>) {
        match self {
            Screen::AssetList(page) => page.poll(env),
            Screen::FeeRate(page) => page.poll(env),
            Screen::Collection(page) => page.poll(env),
            Screen::Cat721Item(_) | Screen::Cat20Token(_) => {}
        }
    }

    /// The active wallet changed (account, chain or asset kinds).
    pub fn wallet_changed(&mut self, env: &ScreenEnv<'_>) {
        match self {
            Screen::AssetList(page) => page.wallet_changed(env),
            Screen::Collection(page) => page.wallet_changed(env),
            Screen::FeeRate(_) | Screen::Cat721Item(_) | Screen::Cat20Token(_) => {}
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, env: &ScreenEnv<'_>) -> ScreenAction {
        match self {
            Screen::AssetList(page) => page.show(ui, env),
            Screen::FeeRate(page) => page.show(ui, env),
            Screen::Collection(page) => page.show(ui, env),
            Screen::Cat721Item(page) => page.show(ui, env),
            Screen::Cat20Token(page) => page.show(ui, env),
        }
    }
}
