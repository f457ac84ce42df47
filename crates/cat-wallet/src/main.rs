//! CAT wallet: desktop views over CAT20 balances and CAT721 collections

use std::sync::Arc;

use eframe::egui;
use eyre::WrapErr;

use cat_wallet_adapters::{HttpWalletService, InMemoryWalletService, WalletServiceConfig};
use cat_wallet_core::WalletServicePort;

mod app;
mod config;
mod platform;
mod screens;
mod sidebar;
mod tasks;
mod toast;
mod ui;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let shell = config::ShellConfig::from_env().wrap_err("invalid shell configuration")?;
    let service_cfg = WalletServiceConfig::from_env();

    let service: Arc<dyn WalletServicePort> = if service_cfg.use_fixtures {
        tracing::info!("serving fixture data");
        Arc::new(InMemoryWalletService::fixtures(&shell.address))
    } else {
        tracing::info!(url = %service_cfg.service_base_url, "using wallet service");
        Arc::new(
            HttpWalletService::with_config(&service_cfg)
                .map_err(|e| eyre::eyre!(e))
                .wrap_err("invalid wallet service configuration")?,
        )
    };

    tracing::info!(chain = shell.chain.slug(), "Starting CAT wallet");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CAT Wallet")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CAT Wallet",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app::App::new(shell, service)))),
    )
    .map_err(|e| eyre::eyre!("ui terminated with an error: {e}"))
}
