//! UI helper components

use eframe::egui;

use cat_wallet_core::{ChainType, SectionRow};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(232, 160, 40);

/// Block explorer root for a chain
pub fn explorer_base_url(chain: ChainType) -> &'static str {
    match chain {
        ChainType::BitcoinMainnet => "https://mempool.space",
        ChainType::BitcoinTestnet => "https://mempool.space/testnet",
        ChainType::BitcoinSignet => "https://mempool.space/signet",
        ChainType::FractalMainnet => "https://mempool.fractalbitcoin.io",
        ChainType::FractalTestnet => "https://mempool-testnet.fractalbitcoin.io",
    }
}

/// Explorer page for the transaction behind a CAT token id (`{txid}_{vout}`)
pub fn explorer_outpoint_url(chain: ChainType, token_id: &str) -> String {
    let txid = token_id.split_once('_').map_or(token_id, |(txid, _)| txid);
    format!("{}/tx/{}", explorer_base_url(chain), txid)
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Loading spinner
pub fn loading_spinner(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Loading...");
    });
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(220, 80, 80)));
    });
}

/// Labelled value row. Returns true when the value (or its copy icon) was clicked.
pub fn section_row(ui: &mut egui::Ui, row: &SectionRow) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", row.title)).strong());

        let text = egui::RichText::new(row.display_text()).monospace();
        let hover = if row.link.is_some() {
            "Open in block explorer"
        } else {
            "Copy to clipboard"
        };
        let response = if row.link.is_some() {
            ui.link(text)
        } else {
            ui.add(egui::Button::new(text).frame(false))
        };
        clicked |= response.on_hover_text(hover).clicked();

        if row.show_copy_icon
            && ui
                .small_button("📋")
                .on_hover_text("Copy to clipboard")
                .clicked()
        {
            clicked = true;
        }
    });
    clicked
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}

/// Clickable tile; the selected one gets an accent border.
pub fn tile(
    ui: &mut egui::Ui,
    selected: bool,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    let stroke = if selected {
        egui::Stroke::new(2.0, ACCENT)
    } else {
        egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
    };
    let fill = if selected {
        ui.visuals().faint_bg_color.linear_multiply(1.3)
    } else {
        ui.visuals().faint_bg_color
    };
    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(width);
            add_contents(ui);
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
