// Application shell: providers, history and the eframe frame loop
use crate::config::Config;
use crate::menu::active_entry;
use crate::navigation::{self, History, NavigationAction};
use crate::routes::{self, Page};
use crate::state::{AuthState, CartState, Notifications};
use crate::style::{self, Theme};
use crate::view::contact::ContactForm;
use eframe::egui;
use std::cell::RefCell;
use std::time::Duration;

/// Deferred mutation recorded by a view and applied after the frame.
pub type ContextAction = Box<dyn FnOnce(&mut Shell)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Auth,
    Cart,
    Notifications,
}

/// Process-wide state handed to every view, outermost provider first.
pub struct AppContext {
    pub auth: AuthState,
    pub cart: CartState,
    pub notifications: Notifications,
    init_order: Vec<Provider>,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let mut init_order = Vec::with_capacity(3);

        let auth = AuthState::new(config.profile.clone());
        init_order.push(Provider::Auth);
        tracing::debug!(signed_in = auth.is_signed_in(), "auth provider ready");

        let cart = CartState::new();
        init_order.push(Provider::Cart);
        tracing::debug!("cart provider ready");

        let notifications = Notifications::new(style::MAX_TOASTS);
        init_order.push(Provider::Notifications);
        tracing::debug!("notification provider ready");

        Self {
            auth,
            cart,
            notifications,
            init_order,
        }
    }

    /// Providers in the order they were initialized.
    pub fn providers(&self) -> &[Provider] {
        &self.init_order
    }

    /// Put every provider back into its startup state.
    pub fn reset(&mut self) {
        self.auth.reset();
        self.cart.clear();
        self.notifications.clear();
    }
}

pub struct Shell {
    pub config: Config,
    pub context: AppContext,
    pub history: History,
    pub theme: Theme,
    pub contact_form: ContactForm,
    applied_theme: Option<Theme>,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        let config = config.sanitized();
        let context = AppContext::new(&config);
        let history = History::new(config.ui.start_route.clone());
        let theme = if config.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        tracing::info!(route = history.current_route(), "shell started");

        Self {
            config,
            context,
            history,
            theme,
            contact_form: ContactForm::default(),
            applied_theme: None,
        }
    }

    pub fn current_page(&self) -> Page {
        Page::from_route(self.history.current_route())
    }

    /// Menu label of the current route, or the page title for routes outside the menus.
    pub fn window_title(&self) -> String {
        let route = self.history.current_route();
        let label = active_entry(routes::HEADER_MENU, route)
            .or_else(|| active_entry(routes::DASHBOARD_MENU, route))
            .map(|entry| entry.label)
            .unwrap_or_else(|| self.current_page().title());
        format!("Bookstall - {label}")
    }

    pub fn navigate(&mut self, route: &str) {
        self.apply(NavigationAction::NavigateTo(route.to_string()));
    }

    /// Back control: step back when there is history, otherwise use the fallback.
    pub fn go_back(&mut self) {
        let action = navigation::go_back(self.history.depth(), &self.config.navigation);
        self.apply(action);
    }

    pub fn apply(&mut self, action: NavigationAction) {
        tracing::debug!(?action, from = self.history.current_route(), "navigate");
        let route = self.history.apply(action);
        tracing::info!(route, "showing");
    }

    /// Return to the startup state (used by tests and the settings page).
    pub fn reset(&mut self) {
        self.context.reset();
        self.contact_form = ContactForm::default();
        self.history = History::new(self.config.ui.start_route.clone());
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (back, forward) = ctx.input(|i| {
            (
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if back {
            self.go_back();
        }
        if forward {
            self.history.step_forward();
        }
    }
}

impl eframe::App for Shell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(self.theme.visuals());
            self.applied_theme = Some(self.theme);
        }

        let route_before = self.history.current_route().to_string();
        self.handle_input(ctx);
        self.context
            .notifications
            .prune(Duration::from_secs(self.config.ui.toast_timeout_secs));

        // Deferred actions
        let next_navigation = RefCell::new(None::<NavigationAction>);
        let context_action = RefCell::new(None::<ContextAction>);
        let page = self.current_page();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui, &next_navigation, &context_action);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.render_footer(ui, &next_navigation);
        });

        if page.in_dashboard() {
            egui::SidePanel::left("dashboard_sidebar")
                .resizable(true)
                .default_width(self.config.panel.sidebar_width)
                .width_range(style::SIDEBAR_MIN..=style::SIDEBAR_MAX)
                .show(ctx, |ui| {
                    self.render_sidebar(ui, &next_navigation, &context_action);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui, page, &next_navigation, &context_action);
        });

        self.render_toasts(ctx);

        // Apply deferred actions
        if let Some(action) = context_action.into_inner() {
            action(self);
        }
        if let Some(action) = next_navigation.into_inner() {
            self.apply(action);
        }

        if self.history.current_route() != route_before {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
        }
        if !self.context.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;
    use crate::state::{CartLine, UserProfile};

    fn shell_at(start: &str) -> Shell {
        logging::init_test_setup();
        let mut config = Config::default();
        config.ui.start_route = start.to_string();
        config.navigation.fallback_route = routes::CATALOG.to_string();
        config.profile = Some(UserProfile {
            display_name: Some("Ada".into()),
            ..UserProfile::default()
        });
        Shell::new(config)
    }

    #[test]
    fn test_providers_initialize_outer_to_inner() {
        let context = AppContext::new(&Config::default());
        assert_eq!(
            context.providers(),
            &[Provider::Auth, Provider::Cart, Provider::Notifications]
        );
    }

    #[test]
    fn test_deep_link_back_uses_fallback() {
        let mut shell = shell_at(routes::ORDERS);
        shell.go_back();
        assert_eq!(shell.history.current_route(), routes::CATALOG);
        assert_eq!(shell.current_page(), Page::Catalog);
    }

    #[test]
    fn test_back_after_navigation_steps_back() {
        let mut shell = shell_at(routes::HOME);
        shell.navigate(routes::CONTACT);
        shell.go_back();
        assert_eq!(shell.history.current_route(), routes::HOME);
    }

    #[test]
    fn test_reset_restores_startup_state() {
        let mut shell = shell_at(routes::HOME);
        shell.navigate(routes::CART);
        shell.context.cart.add(CartLine::new("Emma", "Jane Austen", 300));
        shell.context.notifications.info("added");
        shell.context.auth.sign_out();

        shell.reset();
        assert_eq!(shell.history.current_route(), routes::HOME);
        assert_eq!(shell.history.depth(), 1);
        assert!(shell.context.cart.is_empty());
        assert!(shell.context.notifications.is_empty());
        assert_eq!(shell.context.auth.display_name(), "Ada");
    }

    #[test]
    fn test_window_title_follows_route() {
        let mut shell = shell_at(routes::HOME);
        shell.navigate("/no/such/page");
        assert_eq!(shell.window_title(), "Bookstall - Page not found");
    }

    #[test]
    fn test_window_title_uses_menu_label() {
        let mut shell = shell_at(routes::HOME);
        assert_eq!(shell.window_title(), "Bookstall - Home");

        shell.navigate(routes::LISTINGS);
        assert_eq!(shell.window_title(), "Bookstall - My listings");

        shell.navigate(routes::CART);
        assert_eq!(shell.window_title(), "Bookstall - Your cart");
    }

    #[test]
    fn test_invalid_config_is_sanitized() {
        let mut config = Config::default();
        config.ui.start_route.clear();
        let shell = Shell::new(config);
        assert_eq!(shell.history.current_route(), "/");
    }
}
