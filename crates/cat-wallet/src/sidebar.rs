//! Sidebar component for wallet context (account, chain, asset kinds) and navigation

use eframe::egui;

use cat_wallet_core::{ChainType, Route, WalletContext};

/// Sidebar action returned after rendering
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    /// Account, chain or supported assets were edited.
    WalletChanged,
    /// Jump to a top-level screen, dropping history.
    SwitchTo(Route),
    Navigate(Route),
}

#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    pub collapsed: bool,
    address_draft: String,
    collection_draft: String,
}

impl SidebarState {
    pub fn new(wallet: &WalletContext) -> Self {
        Self {
            address_draft: wallet.address().to_owned(),
            ..Self::default()
        }
    }
}

/// Render the sidebar panel
pub fn render(
    ctx: &egui::Context,
    sidebar: &mut SidebarState,
    wallet: &mut WalletContext,
    current: &Route,
) -> SidebarAction {
    let mut action = SidebarAction::None;

    egui::SidePanel::left("wallet_context_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(60.0)
        .show_animated(ctx, !sidebar.collapsed, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);

                // Header with collapse button
                ui.horizontal(|ui| {
                    ui.heading(egui::RichText::new("Wallet").size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("◀").on_hover_text("Collapse sidebar").clicked() {
                            sidebar.collapsed = true;
                        }
                    });
                });
                ui.separator();
                ui.add_space(5.0);

                ui.label(egui::RichText::new(&wallet.account.alias).strong());
                let addr_response = ui.add(
                    egui::TextEdit::singleline(&mut sidebar.address_draft)
                        .hint_text("bc1p...")
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
                // Apply on blur
                if addr_response.lost_focus() {
                    let draft = sidebar.address_draft.trim();
                    if draft.is_empty() {
                        sidebar.address_draft = wallet.account.address.clone();
                    } else if draft != wallet.account.address {
                        wallet.account.address = draft.to_owned();
                        action = SidebarAction::WalletChanged;
                    }
                }
                ui.add_space(8.0);

                // Chain selection
                ui.horizontal(|ui| {
                    ui.label("Chain:");
                    let before = wallet.chain;
                    egui::ComboBox::from_id_salt("sidebar_chain")
                        .selected_text(wallet.chain.label())
                        .width(170.0)
                        .show_ui(ui, |ui| {
                            for chain in ChainType::ALL {
                                ui.selectable_value(&mut wallet.chain, chain, chain.label());
                            }
                        });
                    if wallet.chain != before {
                        action = SidebarAction::WalletChanged;
                    }
                });
                ui.add_space(8.0);

                // Supported asset kinds
                ui.horizontal(|ui| {
                    let cat20 = ui.checkbox(&mut wallet.supported_assets.cat20, "CAT20");
                    let cat721 = ui.checkbox(&mut wallet.supported_assets.cat721, "CAT721");
                    if cat20.changed() || cat721.changed() {
                        action = SidebarAction::WalletChanged;
                    }
                });

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                for root in [Route::AssetList, Route::FeeRate] {
                    let selected = *current == root;
                    if ui.selectable_label(selected, root.title()).clicked() && !selected {
                        action = SidebarAction::SwitchTo(root);
                    }
                }

                if wallet.supported_assets.cat721 {
                    ui.add_space(10.0);
                    ui.label("Collection:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut sidebar.collection_draft)
                                .hint_text("collection id")
                                .desired_width(160.0)
                                .font(egui::TextStyle::Monospace),
                        );
                        let id = sidebar.collection_draft.trim();
                        if ui.add_enabled(!id.is_empty(), egui::Button::new("Open")).clicked() {
                            action = SidebarAction::Navigate(Route::Collection {
                                collection_id: id.to_owned(),
                            });
                        }
                    });
                }

                ui.add_space(20.0);
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "v{} ({}) built {}",
                        env!("CARGO_PKG_VERSION"),
                        env!("GIT_HASH"),
                        env!("BUILD_TIME"),
                    ))
                    .weak()
                    .small(),
                );
            });
        });

    // Show expand button when collapsed
    if sidebar.collapsed {
        egui::SidePanel::left("collapsed_sidebar")
            .resizable(false)
            .exact_width(30.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                if ui.button("▶").on_hover_text("Expand sidebar").clicked() {
                    sidebar.collapsed = false;
                }
            });
    }

    action
}
