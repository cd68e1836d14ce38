// Notification toasts in the bottom-right corner
use crate::shell::Shell;
use crate::state::ToastLevel;
use crate::style;
use eframe::egui;

impl Shell {
    pub(crate) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.context.notifications.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -72.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in self.context.notifications.active().enumerate() {
                    let color = match toast.level {
                        ToastLevel::Info => ui.visuals().text_color(),
                        ToastLevel::Success => style::SUCCESS,
                        ToastLevel::Error => ui.visuals().error_fg_color,
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        let response = ui
                            .add(
                                egui::Label::new(egui::RichText::new(&toast.text).color(color))
                                    .sense(egui::Sense::click()),
                            )
                            .on_hover_text("Click to dismiss");
                        if response.clicked() {
                            dismissed = Some(index);
                        }
                    });
                    ui.add_space(4.0);
                }
            });

        if let Some(index) = dismissed {
            self.context.notifications.dismiss(index);
        }
    }
}
