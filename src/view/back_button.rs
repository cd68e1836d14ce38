// Contextual back control
use crate::navigation::{go_back, FallbackConfig};
use crate::view::NextNavigation;
use eframe::egui;

/// Hover text for the back button: where a click will actually land.
pub fn back_hint(history_depth: usize, fallback: &FallbackConfig) -> String {
    if history_depth > 1 {
        "Back to the previous page".to_string()
    } else {
        format!("Go to {}", fallback.fallback_route)
    }
}

pub fn back_button(
    ui: &mut egui::Ui,
    history_depth: usize,
    fallback: &FallbackConfig,
    next_navigation: &NextNavigation,
) -> egui::Response {
    let response = ui
        .button("⬅ Back")
        .on_hover_text(back_hint(history_depth, fallback));
    if response.clicked() {
        *next_navigation.borrow_mut() = Some(go_back(history_depth, fallback));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_hint() {
        let fallback = FallbackConfig::new("/catalog");
        assert_eq!(back_hint(1, &fallback), "Go to /catalog");
        assert_eq!(back_hint(2, &fallback), "Back to the previous page");
    }
}
