// Central panel content for each route
use crate::routes::{self, Page};
use crate::shell::{ContextAction, Shell};
use crate::state::CartLine;
use crate::style;
use crate::view::{request, NextNavigation};
use eframe::egui;
use std::cell::RefCell;

/// Showcase shelf on the home and catalog pages.
pub const FEATURED: &[(&str, &str, u32)] = &[
    ("The Left Hand of Darkness", "Ursula K. Le Guin", 650),
    ("Middlemarch", "George Eliot", 480),
    ("The Master and Margarita", "Mikhail Bulgakov", 720),
    ("Things Fall Apart", "Chinua Achebe", 550),
    ("Pale Fire", "Vladimir Nabokov", 590),
    ("The Remains of the Day", "Kazuo Ishiguro", 430),
];

const FAQ: &[(&str, &str)] = &[
    (
        "What condition are the books in?",
        "Every listing states its condition: like new, good, or well read.",
    ),
    (
        "Can I return a book?",
        "Yes, within 14 days if it does not match its listing.",
    ),
    (
        "How do I sell my books?",
        "Open 'Sell a book', describe the copy and set a price.",
    ),
];

impl Shell {
    pub(crate) fn render_page(
        &mut self,
        ui: &mut egui::Ui,
        page: Page,
        next_navigation: &NextNavigation,
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        egui::ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(style::CONTENT_MAX_WIDTH);
                ui.heading(page.title());
                ui.separator();

                match page {
                    Page::Home => self.render_home(ui, next_navigation, context_action),
                    Page::Catalog => self.render_shelf(ui, FEATURED, context_action),
                    Page::Cart => self.render_cart(ui, next_navigation, context_action),
                    Page::Contact => self.render_contact_page(ui, context_action),
                    Page::About => {
                        ui.label(
                            "Bookstall is a small marketplace where readers pass on \
                             the books they have finished to the next reader.",
                        );
                    }
                    Page::Faq => {
                        for (question, answer) in FAQ {
                            egui::CollapsingHeader::new(*question).show(ui, |ui| {
                                ui.label(*answer);
                            });
                        }
                    }
                    Page::Shipping => {
                        ui.label("Orders ship within two working days.");
                        ui.label("Delivery is free on orders over $25.00.");
                    }
                    Page::Sell => self.render_signed_in_only(ui, next_navigation, |ui| {
                        ui.label("Listing new books is coming to the desktop app soon.");
                    }),
                    Page::Dashboard => self.render_dashboard(ui, next_navigation),
                    Page::Orders | Page::Listings | Page::Wishlist => {
                        self.render_signed_in_only(ui, next_navigation, |ui| {
                            ui.label(egui::RichText::new("Nothing here yet.").weak());
                        })
                    }
                    Page::Settings => self.render_settings(ui, context_action),
                    Page::NotFound => self.render_not_found(ui, next_navigation),
                }
            });
    }

    fn render_home(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &NextNavigation,
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        ui.label("Second-hand books, first-hand stories.");
        ui.horizontal(|ui| {
            if ui.button("📚 Browse books").clicked() {
                request(next_navigation, routes::CATALOG);
            }
            if ui.button("🏷 Sell a book").clicked() {
                request(next_navigation, routes::SELL);
            }
        });
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Featured this week").strong());
        self.render_shelf(ui, &FEATURED[..3], context_action);
    }

    fn render_shelf(
        &self,
        ui: &mut egui::Ui,
        books: &'static [(&'static str, &'static str, u32)],
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        egui::Grid::new(("shelf", books.len()))
            .num_columns(4)
            .striped(true)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for &(title, author, price) in books {
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(author);
                    ui.label(style::format_price(price));
                    if ui.button("Add to cart").clicked() {
                        *context_action.borrow_mut() = Some(Box::new(move |shell: &mut Shell| {
                            shell.context.cart.add(CartLine::new(title, author, price));
                            shell
                                .context
                                .notifications
                                .success(format!("Added '{title}' to your cart"));
                        }));
                    }
                    ui.end_row();
                }
            });
    }

    fn render_cart(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &NextNavigation,
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        let cart = &self.context.cart;
        if cart.is_empty() {
            ui.label("Your cart is empty.");
            if ui.link("Find something to read").clicked() {
                request(next_navigation, routes::CATALOG);
            }
            return;
        }

        use egui_extras::{Column, TableBuilder};
        TableBuilder::new(ui)
            .id_salt("cart_table")
            .vscroll(false)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().clip(true))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(40.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto())
            .header(style::HEADER_HEIGHT, |mut header| {
                for title in ["Title", "Author", "Qty", "Subtotal", ""] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(style::ROW_HEIGHT, cart.lines().len(), |mut row| {
                    let index = row.index();
                    let line = &cart.lines()[index];
                    row.col(|ui| {
                        style::truncated_label_with_sense(ui, line.title.as_str(), egui::Sense::hover());
                    });
                    row.col(|ui| {
                        ui.label(line.author.as_str());
                    });
                    row.col(|ui| {
                        ui.label(line.quantity.to_string());
                    });
                    row.col(|ui| {
                        ui.label(style::format_price(line.subtotal_cents()));
                    });
                    row.col(|ui| {
                        if ui.small_button("🗑").on_hover_text("Remove").clicked() {
                            *context_action.borrow_mut() = Some(Box::new(move |shell: &mut Shell| {
                                shell.context.cart.remove(index);
                            }));
                        }
                    });
                });
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Total").strong());
            ui.label(style::format_price(cart.total_cents()));
            if ui.button("Empty cart").clicked() {
                *context_action.borrow_mut() = Some(Box::new(|shell: &mut Shell| {
                    shell.context.cart.clear();
                }));
            }
        });
    }

    fn render_dashboard(&self, ui: &mut egui::Ui, next_navigation: &NextNavigation) {
        self.render_signed_in_only(ui, next_navigation, |ui| {
            ui.label(format!("Welcome back, {}.", self.context.auth.display_name()));
            ui.add_space(8.0);
            egui::Grid::new("dashboard_summary")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Books in cart");
                    ui.label(self.context.cart.item_count().to_string());
                    ui.end_row();
                    ui.label("Cart total");
                    ui.label(style::format_price(self.context.cart.total_cents()));
                    ui.end_row();
                });
        });
    }

    fn render_settings(
        &self,
        ui: &mut egui::Ui,
        context_action: &RefCell<Option<ContextAction>>,
    ) {
        ui.horizontal(|ui| {
            ui.label("Theme");
            if ui
                .selectable_label(self.theme == style::Theme::Dark, "Dark")
                .clicked()
            {
                *context_action.borrow_mut() = Some(Box::new(|shell: &mut Shell| {
                    shell.theme = style::Theme::Dark;
                }));
            }
            if ui
                .selectable_label(self.theme == style::Theme::Light, "Light")
                .clicked()
            {
                *context_action.borrow_mut() = Some(Box::new(|shell: &mut Shell| {
                    shell.theme = style::Theme::Light;
                }));
            }
        });
        ui.add_space(8.0);
        if ui.button("Save settings").clicked() {
            *context_action.borrow_mut() = Some(Box::new(|shell: &mut Shell| {
                shell.config.theme.mode = match shell.theme {
                    style::Theme::Dark => "dark".into(),
                    style::Theme::Light => "light".into(),
                };
                match shell.config.save() {
                    Ok(()) => shell.context.notifications.success("Settings saved"),
                    Err(e) => shell.context.notifications.error(e.to_string()),
                }
            }));
        }
        if ui
            .button("Reset session")
            .on_hover_text("Empty the cart, restore the profile and clear history")
            .clicked()
        {
            *context_action.borrow_mut() = Some(Box::new(|shell: &mut Shell| shell.reset()));
        }
    }

    fn render_signed_in_only(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &NextNavigation,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) {
        if self.context.auth.is_signed_in() {
            add_contents(ui);
        } else {
            ui.label("You are not signed in.");
            if ui.link("Back to the shop").clicked() {
                request(next_navigation, &self.config.navigation.fallback_route);
            }
        }
    }

    fn render_not_found(&self, ui: &mut egui::Ui, next_navigation: &NextNavigation) {
        ui.label(format!(
            "Nothing lives at {}.",
            self.history.current_route()
        ));
        let fallback = &self.config.navigation.fallback_route;
        if ui.link(format!("Go to {fallback}")).clicked() {
            request(next_navigation, fallback);
        }
    }
}
