use std::sync::Arc;
use std::thread::JoinHandle;

use eframe::egui;

use cat_wallet_core::asset_list::visible_pages;
use cat_wallet_core::format::format_token_amount;
use cat_wallet_core::{
    AssetList, AssetListCommand, AssetListPhase, CommitOutcome, FetchTicket, PageRequest,
    PortError, TokenBalancePage, WalletContext,
};

use super::{ScreenAction, ScreenEnv};
use crate::tasks::Inbox;
use crate::ui;

const CARD_WIDTH: f32 = 180.0;
const MAX_PAGE_BUTTONS: u32 = 7;

type PageResult = (FetchTicket, Result<TokenBalancePage, PortError>);

pub struct AssetListPage {
    list: AssetList,
    inbox: Inbox<PageResult>,
}

impl AssetListPage {
    pub fn open(env: &ScreenEnv<'_>, pagination: PageRequest) -> Self {
        let mut page = Self::new(env.wallet, pagination);
        let command = page.list.refresh();
        page.run(command, env);
        page
    }

    fn new(wallet: &WalletContext, pagination: PageRequest) -> Self {
        Self {
            list: AssetList::new(wallet, pagination),
            inbox: Inbox::default(),
        }
    }

    fn run(&self, command: AssetListCommand, env: &ScreenEnv<'_>) -> Option<JoinHandle<()>> {
        match command {
            AssetListCommand::Fetch(request) => {
                let service = Arc::clone(env.service);
                Some(self.inbox.spawn(env.ctx, move || {
                    let result = service.cat20_list(
                        &request.address,
                        request.page.page,
                        request.page.page_size,
                    );
                    (request.ticket, result)
                }))
            }
            AssetListCommand::ShowEmpty => None,
        }
    }

    pub fn wallet_changed(&mut self, env: &ScreenEnv<'_>) {
        if let Some(command) = self.list.update_context(env.wallet) {
            self.run(command, env);
        }
    }

    pub fn poll(&mut self, env: &ScreenEnv<'_>) {
        for (ticket, result) in self.inbox.drain() {
            if let CommitOutcome::Failed(message) = self.list.commit(ticket, result) {
                env.notifier.toast_error(&message);
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, env: &ScreenEnv<'_>) -> ScreenAction {
        let mut action = ScreenAction::None;

        ui::styled_heading(ui, "Tokens");
        ui.add_space(8.0);

        match self.list.phase() {
            AssetListPhase::Loading => {
                ui::loading_spinner(ui);
                return action;
            }
            AssetListPhase::Empty => {
                ui.label(egui::RichText::new("No tokens").weak());
                return action;
            }
            AssetListPhase::Ready => {}
        }

        ui.horizontal_wrapped(|ui| {
            for (index, balance) in self.list.tokens().iter().enumerate() {
                let response = ui::tile(ui, false, CARD_WIDTH, |ui| {
                    ui.label(egui::RichText::new(&balance.name).strong());
                    ui.label(egui::RichText::new(&balance.symbol).weak().small());
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format_token_amount(&balance.amount, balance.decimals))
                            .monospace(),
                    );
                });
                if response.clicked() {
                    if let Some(route) = self.list.token_route(index) {
                        action = ScreenAction::Navigate(route);
                    }
                }
            }
        });

        ui.add_space(12.0);
        if let Some(page) = self.pagination(ui) {
            if let Some(command) = self.list.go_to_page(page) {
                self.run(command, env);
            }
        }

        action
    }

    /// Previous / numbered / next buttons. Returns the page the user picked.
    fn pagination(&self, ui: &mut egui::Ui) -> Option<u32> {
        let current = self.list.pagination().page;
        let count = self.list.page_count();
        if count <= 1 {
            return None;
        }

        let mut picked = None;
        ui.horizontal(|ui| {
            if ui.add_enabled(current > 1, egui::Button::new("‹")).clicked() {
                picked = Some(current - 1);
            }
            for page in visible_pages(current, count, MAX_PAGE_BUTTONS) {
                if ui.selectable_label(page == current, page.to_string()).clicked() {
                    picked = Some(page);
                }
            }
            if ui.add_enabled(current < count, egui::Button::new("›")).clicked() {
                picked = Some(current + 1);
            }
            if let Some(total) = self.list.total() {
                ui.label(egui::RichText::new(format!("{total} tokens")).weak());
            }
        });
        picked
    }
}
