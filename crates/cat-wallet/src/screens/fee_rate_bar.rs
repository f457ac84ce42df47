//! Fee rate selector widget and the page that hosts it.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use eframe::egui;

use cat_wallet_core::{FeeRateEvent, FeeRateSelector, FeeSummary, NotifierPort, PortError};

use super::{ScreenAction, ScreenEnv};
use crate::tasks::Inbox;
use crate::ui;

const TILE_WIDTH: f32 = 120.0;

/// Tiles for the service's fee tiers plus a custom entry. `on_change` fires
/// with the effective rate each time it changes, including once on mount.
pub struct FeeRateBar {
    selector: FeeRateSelector,
    inbox: Inbox<Result<FeeSummary, PortError>>,
    on_change: Box<dyn FnMut(f64)>,
}

impl FeeRateBar {
    pub fn new(on_change: impl FnMut(f64) + 'static) -> Self {
        Self {
            selector: FeeRateSelector::new(),
            inbox: Inbox::default(),
            on_change: Box::new(on_change),
        }
    }

    pub fn mount(&mut self, env: &ScreenEnv<'_>) {
        let service = Arc::clone(env.service);
        self.inbox.spawn(env.ctx, move || service.fee_summary());
        let initial = self.selector.poll_change();
        self.report(initial);
    }

    pub fn poll(&mut self, notifier: &dyn NotifierPort) {
        for result in self.inbox.drain() {
            let event = match result {
                Ok(summary) => FeeRateEvent::OptionsLoaded(summary),
                Err(e) => {
                    tracing::warn!(error = %e, "fee summary fetch failed");
                    notifier.toast_error(&e.to_string());
                    FeeRateEvent::OptionsFailed(e.to_string())
                }
            };
            self.dispatch(event);
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut events = Vec::new();

        ui.horizontal_wrapped(|ui| {
            for tile in self.selector.tiles() {
                let response = ui::tile(ui, tile.selected, TILE_WIDTH, |ui| {
                    ui.label(egui::RichText::new(&tile.option.title).strong());
                    if let Some(rate) = tile.rate_label() {
                        ui.label(egui::RichText::new(rate).monospace());
                    }
                    if let Some(desc) = &tile.option.desc {
                        ui.label(egui::RichText::new(desc).weak().small());
                    }
                });
                if response.clicked() {
                    events.push(FeeRateEvent::Select(tile.kind));
                }
            }
        });

        if let Some(input) = self.selector.custom_input() {
            ui.add_space(8.0);
            let mut text = input.to_owned();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text("sat/vB")
                    .desired_width(150.0)
                    .font(egui::TextStyle::Monospace),
            );
            if response.changed() {
                events.push(FeeRateEvent::CustomInput(text));
            }
            if response.lost_focus() {
                events.push(FeeRateEvent::CustomBlur);
            }
        }

        for event in events {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: FeeRateEvent) {
        let change = self.selector.apply(event);
        self.report(change);
    }

    fn report(&mut self, change: Option<f64>) {
        if let Some(rate) = change {
            (self.on_change)(rate);
        }
    }
}

pub struct FeeRatePage {
    bar: FeeRateBar,
    selected: Rc<Cell<Option<f64>>>,
}

impl FeeRatePage {
    pub fn open(env: &ScreenEnv<'_>) -> Self {
        let selected = Rc::new(Cell::new(None));
        let sink = Rc::clone(&selected);
        let mut bar = FeeRateBar::new(move |rate| sink.set(Some(rate)));
        bar.mount(env);
        Self { bar, selected }
    }

    pub fn poll(&mut self, env: &ScreenEnv<'_>) {
        self.bar.poll(env.notifier);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _env: &ScreenEnv<'_>) -> ScreenAction {
        ui::styled_heading(ui, "Fee Rate");
        ui.label("Pick a confirmation speed or enter your own rate.");
        ui.add_space(12.0);

        self.bar.show(ui);

        if let Some(rate) = self.selected.get() {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Effective fee rate:").strong());
                ui.label(egui::RichText::new(format!("{rate} sat/vB")).monospace());
            });
        }
        ScreenAction::None
    }
}
