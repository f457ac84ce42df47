use eframe::egui;

use cat_wallet_core::{CollectionInfo, Route, SectionRow};

use super::{ScreenAction, ScreenEnv};
use crate::ui;

/// A single owned CAT721 item. Everything shown comes from the route payload.
pub struct Cat721ItemPage {
    collection_info: CollectionInfo,
    local_id: String,
}

impl Cat721ItemPage {
    pub fn new(collection_info: CollectionInfo, local_id: String) -> Self {
        Self {
            collection_info,
            local_id,
        }
    }

    fn rows(&self) -> Vec<SectionRow> {
        vec![
            SectionRow::new("Collection", self.collection_info.name.clone()),
            SectionRow::new("Local Id", self.local_id.clone()),
            SectionRow::new("Collection Id", self.collection_info.collection_id.clone())
                .with_copy_icon(),
        ]
    }

    pub fn show(&mut self, ui: &mut egui::Ui, env: &ScreenEnv<'_>) -> ScreenAction {
        ui::styled_heading(
            ui,
            &format!("{} #{}", self.collection_info.symbol, self.local_id),
        );
        ui.add_space(8.0);
        for row in self.rows() {
            if ui::section_row(ui, &row) {
                row.activate(env.clipboard, env.links, env.notifier);
            }
        }
        ui.add_space(12.0);
        if ui::secondary_button(ui, "View collection").clicked() {
            return ScreenAction::Navigate(Route::Collection {
                collection_id: self.collection_info.collection_id.clone(),
            });
        }
        ScreenAction::None
    }
}
