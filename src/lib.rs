// Bookstall: screens and navigation for a second-hand book marketplace

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod navigation;
pub mod routes;
pub mod shell;
pub mod state;
pub mod style;
pub mod view;

pub use menu::{active_entry, compose_menu, MenuItem, NavEntry};
pub use navigation::{go_back, FallbackConfig, History, NavState, NavigationAction};
pub use shell::{AppContext, Shell};
