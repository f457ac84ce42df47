use std::cell::RefCell;
use std::sync::Arc;

use eframe::egui;

use cat_wallet_core::{
    Account, ClipboardPort, LinkPort, NotifierPort, PortError, WalletContext, WalletServicePort,
};

use super::ScreenEnv;

/// Accepts every clipboard and link request and records error toasts.
#[derive(Default)]
pub struct Recorder {
    pub errors: RefCell<Vec<String>>,
}

impl ClipboardPort for Recorder {
    fn copy_text(&self, _text: &str) -> Result<(), PortError> {
        Ok(())
    }
}

impl LinkPort for Recorder {
    fn open_link(&self, _url: &str) -> Result<(), PortError> {
        Ok(())
    }
}

impl NotifierPort for Recorder {
    fn toast_success(&self, _message: &str) {}

    fn toast_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}

pub fn wallet(address: &str) -> WalletContext {
    WalletContext {
        account: Account {
            address: address.to_owned(),
            alias: String::new(),
        },
        ..WalletContext::default()
    }
}

pub fn screen_env<'a>(
    ctx: &'a egui::Context,
    wallet: &'a WalletContext,
    service: &'a Arc<dyn WalletServicePort>,
    recorder: &'a Recorder,
) -> ScreenEnv<'a> {
    ScreenEnv {
        ctx,
        wallet,
        service,
        clipboard: recorder,
        links: recorder,
        notifier: recorder,
    }
}
