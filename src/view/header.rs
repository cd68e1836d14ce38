// Top bar: back control, brand, main menu, cart and theme
use crate::menu::compose_menu;
use crate::routes;
use crate::shell::{ContextAction, Shell};
use crate::style;
use crate::view::back_button::back_button;
use crate::view::{request, NextNavigation};
use eframe::egui;
use std::cell::RefCell;

impl Shell {
    pub(crate) fn render_header(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &NextNavigation,
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            back_button(
                ui,
                self.history.depth(),
                &self.config.navigation,
                next_navigation,
            );

            if ui
                .add(
                    egui::Label::new(egui::RichText::new("📚 Bookstall").heading().strong())
                        .sense(egui::Sense::click()),
                )
                .clicked()
            {
                request(next_navigation, routes::HOME);
            }
            ui.separator();

            let default_color = ui.visuals().text_color();
            for item in compose_menu(routes::HEADER_MENU, self.history.current_route()) {
                let text = style::menu_label(
                    item.entry.icon.glyph(),
                    item.entry.label,
                    item.is_active,
                    default_color,
                );
                if ui.selectable_label(item.is_active, text).clicked() {
                    request(next_navigation, item.entry.route);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme_icon = match self.theme {
                    style::Theme::Dark => "☀",
                    style::Theme::Light => "🌙",
                };
                if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                    *context_action.borrow_mut() = Some(Box::new(|shell: &mut Shell| {
                        shell.theme = shell.theme.toggle();
                    }));
                }

                let count = self.context.cart.item_count();
                if ui.button(format!("🛒 {count}")).on_hover_text("Cart").clicked() {
                    request(next_navigation, routes::CART);
                }

                let account = if self.context.auth.is_signed_in() {
                    format!("👤 {}", self.context.auth.display_name())
                } else {
                    "👤 Account".to_string()
                };
                if ui.button(account).clicked() {
                    request(next_navigation, routes::DASHBOARD);
                }
            });
        });
        ui.add_space(4.0);
    }
}
