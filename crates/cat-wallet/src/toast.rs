//! Transient notifications shown in the bottom-right corner.

use std::cell::RefCell;
use std::time::Duration;

use eframe::egui;
use web_time::Instant;

use cat_wallet_core::NotifierPort;

const SUCCESS_TTL: Duration = Duration::from_secs(2);
const ERROR_TTL: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn ttl(self) -> Duration {
        match self {
            ToastKind::Success => SUCCESS_TTL,
            ToastKind::Error => ERROR_TTL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn expires_at(&self) -> Instant {
        self.shown_at + self.kind.ttl()
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    entries: RefCell<Vec<Toast>>,
}

impl Toasts {
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let mut entries = self.entries.borrow_mut();
        entries.push(Toast {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
        let overflow = entries.len().saturating_sub(MAX_VISIBLE);
        entries.drain(..overflow);
    }

    pub fn prune(&self, now: Instant) {
        self.entries.borrow_mut().retain(|t| t.expires_at() > now);
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.entries.borrow().clone()
    }

    pub fn show(&self, ctx: &egui::Context) {
        let now = Instant::now();
        self.prune(now);
        let toasts = self.snapshot();
        let Some(next_expiry) = toasts.iter().map(Toast::expires_at).min() else {
            return;
        };

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                for toast in &toasts {
                    let (icon, color) = match toast.kind {
                        ToastKind::Success => ("✅", egui::Color32::from_rgb(80, 200, 120)),
                        ToastKind::Error => ("❌", egui::Color32::from_rgb(220, 80, 80)),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(icon);
                            ui.label(egui::RichText::new(&toast.message).color(color));
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        ctx.request_repaint_after(next_expiry.saturating_duration_since(now));
    }
}

impl NotifierPort for Toasts {
    fn toast_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn toast_error(&self, message: &str) {
        tracing::warn!(%message, "error toast");
        self.push(ToastKind::Error, message);
    }
}
