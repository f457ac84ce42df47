//! Main application state and update loop

use std::sync::Arc;

use eframe::egui;

use cat_wallet_core::{NavStack, PageRequest, Route, WalletContext, WalletServicePort};

use crate::config::ShellConfig;
use crate::platform::{SystemBrowser, SystemClipboard};
use crate::screens::{Screen, ScreenAction, ScreenEnv};
use crate::sidebar::{self, SidebarAction, SidebarState};
use crate::toast::Toasts;
use crate::ui;

/// The main application state
pub struct App {
    wallet: WalletContext,
    pagination: PageRequest,
    service: Arc<dyn WalletServicePort>,
    nav: NavStack,
    /// Page for `nav.current()`; mounted lazily on the first frame
    screen: Option<Screen>,
    sidebar: SidebarState,
    toasts: Toasts,
    clipboard: SystemClipboard,
    browser: SystemBrowser,
}

impl App {
    pub fn new(shell: ShellConfig, service: Arc<dyn WalletServicePort>) -> Self {
        let wallet = shell.wallet_context();
        Self {
            sidebar: SidebarState::new(&wallet),
            pagination: shell.page_request(),
            wallet,
            service,
            nav: NavStack::new(Route::AssetList),
            screen: None,
            toasts: Toasts::default(),
            clipboard: SystemClipboard,
            browser: SystemBrowser,
        }
    }

    fn env<'a>(&'a self, ctx: &'a egui::Context) -> ScreenEnv<'a> {
        ScreenEnv {
            ctx,
            wallet: &self.wallet,
            service: &self.service,
            clipboard: &self.clipboard,
            links: &self.browser,
            notifier: &self.toasts,
        }
    }

    /// Mount the page for the current route, replacing whatever was shown.
    fn remount(&mut self, ctx: &egui::Context) {
        let screen = Screen::open(self.nav.current(), &self.env(ctx), self.pagination);
        self.screen = Some(screen);
    }

    fn navigate(&mut self, ctx: &egui::Context, route: Route) {
        self.nav.navigate(route);
        self.remount(ctx);
    }

    fn go_back(&mut self, ctx: &egui::Context) {
        if self.nav.back() {
            self.remount(ctx);
        }
    }

    fn handle_sidebar(&mut self, ctx: &egui::Context, action: SidebarAction) {
        match action {
            SidebarAction::None => {}
            SidebarAction::WalletChanged => {
                tracing::info!(
                    address = %self.wallet.address(),
                    chain = self.wallet.chain.slug(),
                    cat20 = self.wallet.supported_assets.cat20,
                    cat721 = self.wallet.supported_assets.cat721,
                    "wallet context changed"
                );
                if let Some(mut screen) = self.screen.take() {
                    screen.wallet_changed(&self.env(ctx));
                    self.screen = Some(screen);
                }
            }
            SidebarAction::SwitchTo(root) => {
                self.nav.reset(root);
                self.remount(ctx);
            }
            SidebarAction::Navigate(route) => self.navigate(ctx, route),
        }
    }

    fn handle_screen(&mut self, ctx: &egui::Context, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(route) => self.navigate(ctx, route),
            ScreenAction::Back => self.go_back(ctx),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        if self.screen.is_none() {
            self.remount(ctx);
        }

        // Fold in finished fetches before drawing
        if let Some(mut screen) = self.screen.take() {
            screen.poll(&self.env(ctx));
            self.screen = Some(screen);
        }

        let sidebar_action =
            sidebar::render(ctx, &mut self.sidebar, &mut self.wallet, self.nav.current());
        self.handle_sidebar(ctx, sidebar_action);

        let mut back_clicked = false;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if self.nav.can_go_back() && ui.button("←").on_hover_text("Back").clicked() {
                    back_clicked = true;
                }
                ui::styled_heading(ui, self.nav.current().title());
            });
            ui.add_space(4.0);
        });
        if back_clicked {
            self.go_back(ctx);
        }

        let mut screen_action = ScreenAction::None;
        if let Some(mut screen) = self.screen.take() {
            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(10.0);
                    screen_action = screen.show(ui, &self.env(ctx));
                    ui.add_space(20.0);
                });
            });
            self.screen = Some(screen);
        }
        self.handle_screen(ctx, screen_action);

        self.toasts.show(ctx);
    }
}
