pub mod back_button;
pub mod contact;
pub mod footer;
pub mod header;
pub mod pages;
pub mod sidebar;
pub mod toasts;

use crate::navigation::NavigationAction;
use std::cell::RefCell;

/// Navigation recorded during rendering, applied once the frame is done.
pub type NextNavigation = RefCell<Option<NavigationAction>>;

pub(crate) fn request(next_navigation: &NextNavigation, route: &str) {
    *next_navigation.borrow_mut() = Some(NavigationAction::NavigateTo(route.to_string()));
}
