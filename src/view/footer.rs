// Site footer: link columns, contact line and copyright
use crate::menu::compose_menu;
use crate::routes::FOOTER_SECTIONS;
use crate::shell::Shell;
use crate::style;
use crate::view::{request, NextNavigation};
use chrono::Datelike;
use eframe::egui;

pub fn copyright_line(year: i32) -> String {
    format!("© {year} Bookstall. Pre-loved books, new homes.")
}

impl Shell {
    pub(crate) fn render_footer(&self, ui: &mut egui::Ui, next_navigation: &NextNavigation) {
        ui.add_space(6.0);
        let default_color = ui.visuals().weak_text_color();
        ui.columns(FOOTER_SECTIONS.len() + 1, |columns| {
            for (ui, section) in columns.iter_mut().zip(FOOTER_SECTIONS) {
                ui.label(egui::RichText::new(section.title).strong());
                for item in compose_menu(section.entries, self.history.current_route()) {
                    let text = style::menu_label(
                        item.entry.icon.glyph(),
                        item.entry.label,
                        item.is_active,
                        default_color,
                    );
                    if style::truncated_label_with_sense(ui, text, egui::Sense::click()).clicked() {
                        request(next_navigation, item.entry.route);
                    }
                }
            }

            if let Some(ui) = columns.last_mut() {
                let contact = &self.config.contact;
                ui.label(egui::RichText::new("Get in touch").strong());
                ui.hyperlink_to(
                    format!("✉ {}", contact.email),
                    format!("mailto:{}", contact.email),
                );
                ui.label(format!("☎ {}", contact.phone));
            }
        });
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(copyright_line(chrono::Local::now().year()))
                    .small()
                    .weak(),
            );
        });
        ui.add_space(4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Bookstall. Pre-loved books, new homes."
        );
    }
}
