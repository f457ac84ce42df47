use std::sync::Arc;
use std::thread::JoinHandle;

use eframe::egui;

use cat_wallet_core::collection::description;
use cat_wallet_core::{
    CollectionScreen, CollectionSummary, CollectionView, CommitOutcome, FetchTicket, PortError,
    WalletContext,
};

use super::{ScreenAction, ScreenEnv};
use crate::tasks::Inbox;
use crate::ui;

const ITEM_TILE_WIDTH: f32 = 96.0;

type SummaryResult = (FetchTicket, Result<CollectionSummary, PortError>);

pub struct CollectionPage {
    state: CollectionScreen,
    inbox: Inbox<SummaryResult>,
}

impl CollectionPage {
    pub fn open(collection_id: &str, env: &ScreenEnv<'_>) -> Self {
        let mut page = Self::new(collection_id, env.wallet);
        page.fetch(env);
        page
    }

    fn new(collection_id: &str, wallet: &WalletContext) -> Self {
        Self {
            state: CollectionScreen::new(collection_id, wallet),
            inbox: Inbox::default(),
        }
    }

    fn fetch(&mut self, env: &ScreenEnv<'_>) -> JoinHandle<()> {
        let request = self.state.start();
        let service = Arc::clone(env.service);
        self.inbox.spawn(env.ctx, move || {
            let result = service
                .address_cat721_collection_summary(&request.address, &request.collection_id);
            (request.ticket, result)
        })
    }

    /// The summary is owner-scoped, so a different account means a fresh visit.
    pub fn wallet_changed(&mut self, env: &ScreenEnv<'_>) {
        self.reload(env);
    }

    fn reload(&mut self, env: &ScreenEnv<'_>) -> JoinHandle<()> {
        self.state.remount(env.wallet);
        self.fetch(env)
    }

    pub fn poll(&mut self, env: &ScreenEnv<'_>) {
        for (ticket, result) in self.inbox.drain() {
            if let CommitOutcome::Failed(message) = self.state.commit(ticket, result) {
                env.notifier.toast_error(&message);
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, env: &ScreenEnv<'_>) -> ScreenAction {
        let mut action = ScreenAction::None;

        match self.state.view() {
            CollectionView::Loading => ui::loading_spinner(ui),
            CollectionView::NotFound => {
                ui::error_message(ui, "Collection not found");
                ui.add_space(10.0);
                if ui::secondary_button(ui, "← Back").clicked() {
                    action = ScreenAction::Back;
                }
            }
            CollectionView::Ready { info, local_ids } => {
                ui::styled_heading(ui, &info.name);
                ui.add_space(8.0);

                for row in self.state.rows() {
                    if ui::section_row(ui, &row) {
                        row.activate(env.clipboard, env.links, env.notifier);
                    }
                }

                if let Some(text) = description(info) {
                    ui.add_space(6.0);
                    ui.separator();
                    ui.label(text);
                }

                ui::section_header(ui, &format!("Owned ({})", local_ids.len()));
                if local_ids.is_empty() {
                    ui.label(
                        egui::RichText::new("This account holds no items of this collection.")
                            .weak(),
                    );
                }
                ui.horizontal_wrapped(|ui| {
                    for local_id in local_ids {
                        let response = ui::tile(ui, false, ITEM_TILE_WIDTH, |ui| {
                            ui.label(egui::RichText::new(&info.symbol).weak().small());
                            ui.label(egui::RichText::new(format!("#{local_id}")).strong());
                        });
                        if response.clicked() {
                            if let Some(route) = self.state.item_route(local_id) {
                                action = ScreenAction::Navigate(route);
                            }
                        }
                    }
                });
            }
        }

        action
    }
}
