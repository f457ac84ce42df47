use eframe::egui;

use cat_wallet_core::format::format_token_amount;
use cat_wallet_core::{ChainType, SectionRow, TokenBalance};

use super::{ScreenAction, ScreenEnv};
use crate::ui;

pub struct Cat20TokenPage {
    token_id: String,
    balance: Option<TokenBalance>,
}

impl Cat20TokenPage {
    pub fn new(token_id: String, balance: Option<TokenBalance>) -> Self {
        Self { token_id, balance }
    }

    fn rows(&self, chain: ChainType) -> Vec<SectionRow> {
        let mut rows = vec![SectionRow::new("Token Id", self.token_id.clone()).with_copy_icon()];
        if let Some(balance) = &self.balance {
            rows.push(SectionRow::new("Symbol", balance.symbol.clone()));
            rows.push(SectionRow::new(
                "Balance",
                format_token_amount(&balance.amount, balance.decimals),
            ));
        }
        rows.push(
            SectionRow::new("Genesis", self.token_id.clone())
                .with_link(ui::explorer_outpoint_url(chain, &self.token_id)),
        );
        rows
    }

    pub fn show(&mut self, ui: &mut egui::Ui, env: &ScreenEnv<'_>) -> ScreenAction {
        let title = self
            .balance
            .as_ref()
            .map_or("Token", |balance| balance.name.as_str());
        ui::styled_heading(ui, title);
        ui.add_space(8.0);
        for row in self.rows(env.wallet.chain) {
            if ui::section_row(ui, &row) {
                row.activate(env.clipboard, env.links, env.notifier);
            }
        }
        if self.balance.is_none() {
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Balance not loaded").weak());
        }
        ScreenAction::None
    }
}
