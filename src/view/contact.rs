// Contact page: shop details and a message form
use crate::error::ContactError;
use crate::shell::{ContextAction, Shell};
use crate::style;
use eframe::egui;
use std::cell::RefCell;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub error: Option<ContactError>,
    prefilled: bool,
}

/// A validated, trimmed contact message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl ContactForm {
    /// Check fields in display order and report the first problem.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Prefill the sender from the signed-in profile once, without overwriting input.
    pub fn prefill(&mut self, name: &str, email: &str) {
        if self.prefilled {
            return;
        }
        self.prefilled = true;
        if self.name.is_empty() {
            self.name = name.to_string();
        }
        if self.email.is_empty() {
            self.email = email.to_string();
        }
    }
}

impl Shell {
    pub(crate) fn render_contact_page(
        &mut self,
        ui: &mut egui::Ui,
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        let contact = self.config.contact.clone();

        ui.group(|ui| {
            egui::Grid::new("contact_details")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Email");
                    if ui.link(contact.email.as_str()).clicked() {
                        let email = contact.email.clone();
                        *context_action.borrow_mut() = Some(Box::new(move |shell: &mut Shell| {
                            if let Err(e) = open::that(format!("mailto:{email}")) {
                                shell
                                    .context
                                    .notifications
                                    .error(format!("Could not open mail client: {e}"));
                            }
                        }));
                    }
                    ui.end_row();
                    ui.label("Phone");
                    ui.label(contact.phone.as_str());
                    ui.end_row();
                    ui.label("Address");
                    ui.label(contact.address.as_str());
                    ui.end_row();
                    ui.label("Hours");
                    ui.label(contact.hours.as_str());
                    ui.end_row();
                });
        });

        ui.add_space(12.0);
        ui.heading("Send us a message");
        self.contact_form.prefill(
            self.context.auth.display_name(),
            self.context.auth.email(),
        );

        let form = &mut self.contact_form;
        ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("Your name")
                .desired_width(style::CONTENT_MAX_WIDTH),
        );
        ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("you@example.com")
                .desired_width(style::CONTENT_MAX_WIDTH),
        );
        ui.add(
            egui::TextEdit::multiline(&mut form.message)
                .hint_text("What can we help you with?")
                .desired_rows(6)
                .desired_width(style::CONTENT_MAX_WIDTH),
        );

        if let Some(err) = &form.error {
            ui.colored_label(ui.visuals().error_fg_color, err.to_string());
        }

        if ui.button("Send").clicked() {
            match form.validate() {
                Ok(message) => {
                    tracing::info!(from = %message.email, chars = message.message.len(), "contact message");
                    *form = ContactForm::default();
                    self.context
                        .notifications
                        .success(format!("Thanks {}, we'll get back to you soon", message.name));
                }
                Err(e) => form.error = Some(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            error: None,
            prefilled: false,
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let msg = form("  Ada ", " ada@example.com ", "Do you buy old atlases?\n")
            .validate()
            .expect("valid");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "Do you buy old atlases?");
    }

    #[rstest]
    #[case("", "a@b.c", "hi", ContactError::MissingName)]
    #[case("Ada", "ada.example.com", "hi", ContactError::InvalidEmail("ada.example.com".into()))]
    #[case("Ada", "@example.com", "hi", ContactError::InvalidEmail("@example.com".into()))]
    #[case("Ada", "ada@", "hi", ContactError::InvalidEmail("ada@".into()))]
    #[case("Ada", "a da@x.y", "hi", ContactError::InvalidEmail("a da@x.y".into()))]
    #[case("Ada", "ada@x.y", "   ", ContactError::EmptyMessage)]
    fn test_invalid_form(
        #[case] name: &str,
        #[case] email: &str,
        #[case] message: &str,
        #[case] expected: ContactError,
    ) {
        assert_eq!(form(name, email, message).validate(), Err(expected));
    }

    #[test]
    fn test_first_error_wins() {
        assert_eq!(form("", "", "").validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn test_prefill_keeps_user_input() {
        let mut f = form("Ben", "", "");
        f.prefill("Ada", "ada@example.com");
        assert_eq!(f.name, "Ben");
        assert_eq!(f.email, "ada@example.com");

        f.email.clear();
        f.prefill("Ada", "ada@example.com");
        assert_eq!(f.email, "");
    }
}
