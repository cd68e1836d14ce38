// Dashboard sidebar: profile card and dashboard menu
use crate::menu::compose_menu;
use crate::routes;
use crate::shell::{ContextAction, Shell};
use crate::state::AvatarSource;
use crate::style;
use crate::view::{request, NextNavigation};
use eframe::egui;
use std::cell::RefCell;

impl Shell {
    pub(crate) fn render_sidebar(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &NextNavigation,
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            self.render_avatar(ui);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(self.context.auth.display_name()).strong());
            ui.label(egui::RichText::new(self.context.auth.email()).weak());
        });
        ui.separator();

        let default_color = ui.visuals().text_color();
        egui::ScrollArea::vertical()
            .id_salt("sidebar_scroll")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for item in compose_menu(routes::DASHBOARD_MENU, self.history.current_route()) {
                    let text = style::menu_label(
                        item.entry.icon.glyph(),
                        item.entry.label,
                        item.is_active,
                        default_color,
                    );
                    let response = ui.add_sized(
                        [ui.available_width(), style::ROW_HEIGHT],
                        egui::Button::selectable(item.is_active, text),
                    );
                    if response.clicked() && !item.is_active {
                        request(next_navigation, item.entry.route);
                    }
                }
            });

        ui.separator();
        if self.context.auth.is_signed_in() && ui.button("⎋ Sign out").clicked() {
            *context_action.borrow_mut() = Some(Box::new(|shell: &mut Shell| {
                shell.context.auth.sign_out();
                shell.context.notifications.info("You have been signed out");
                shell.navigate(routes::HOME);
            }));
        }
    }

    fn render_avatar(&self, ui: &mut egui::Ui) {
        let size = egui::vec2(style::AVATAR_SIZE, style::AVATAR_SIZE);
        match self.context.auth.avatar() {
            AvatarSource::Uri(uri) => {
                ui.add(egui::Image::new(uri.to_owned()).fit_to_exact_size(size));
            }
            AvatarSource::Default => {
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                let label = self
                    .context
                    .auth
                    .initial()
                    .map(String::from)
                    .unwrap_or_else(|| "👤".to_string());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), size.x / 2.0, egui::Color32::from_gray(90));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::proportional(size.x * 0.45),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}
