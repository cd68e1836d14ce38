use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// --- Sizing ---
pub const AVATAR_SIZE: f32 = 64.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const CONTENT_MAX_WIDTH: f32 = 720.0;

// --- Panel constraints ---
pub const SIDEBAR_MIN: f32 = 160.0;
pub const SIDEBAR_MAX: f32 = 360.0;
pub const SIDEBAR_DEFAULT: f32 = 220.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;
pub const MAX_TOASTS: usize = 4;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(110, 200, 120);

// --- Helper functions ---

/// Label for a menu entry, accented when it is the current route.
pub fn menu_label(glyph: &str, label: &str, is_active: bool, default: egui::Color32) -> egui::RichText {
    let text = egui::RichText::new(format!("{glyph}  {label}"));
    if is_active {
        text.color(ACCENT).strong()
    } else {
        text.color(default)
    }
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
