// Route table and navigation menus
use crate::menu::{Icon, NavEntry};

pub const HOME: &str = "/";
pub const CATALOG: &str = "/catalog";
pub const CART: &str = "/cart";
pub const CONTACT: &str = "/contact";
pub const ABOUT: &str = "/about";
pub const FAQ: &str = "/faq";
pub const SHIPPING: &str = "/shipping";
pub const SELL: &str = "/sell";
pub const DASHBOARD: &str = "/dashboard";
pub const ORDERS: &str = "/dashboard/orders";
pub const LISTINGS: &str = "/dashboard/listings";
pub const WISHLIST: &str = "/dashboard/wishlist";
pub const SETTINGS: &str = "/dashboard/settings";

pub const HEADER_MENU: &[NavEntry] = &[
    NavEntry::new("Home", HOME, Icon::Home),
    NavEntry::new("Browse", CATALOG, Icon::Book),
    NavEntry::new("Sell a book", SELL, Icon::Listings),
    NavEntry::new("Contact", CONTACT, Icon::Mail),
];

pub const DASHBOARD_MENU: &[NavEntry] = &[
    NavEntry::new("Dashboard", DASHBOARD, Icon::Dashboard),
    NavEntry::new("Orders", ORDERS, Icon::Orders),
    NavEntry::new("My listings", LISTINGS, Icon::Listings),
    NavEntry::new("Wishlist", WISHLIST, Icon::Heart),
    NavEntry::new("Settings", SETTINGS, Icon::Settings),
];

/// A titled column of footer links.
#[derive(Clone, Copy, Debug)]
pub struct FooterSection {
    pub title: &'static str,
    pub entries: &'static [NavEntry],
}

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Shop",
        entries: &[
            NavEntry::new("Browse books", CATALOG, Icon::Book),
            NavEntry::new("Sell a book", SELL, Icon::Listings),
            NavEntry::new("Cart", CART, Icon::Cart),
        ],
    },
    FooterSection {
        title: "Company",
        entries: &[
            NavEntry::new("About us", ABOUT, Icon::Info),
            NavEntry::new("Contact", CONTACT, Icon::Mail),
        ],
    },
    FooterSection {
        title: "Help",
        entries: &[
            NavEntry::new("FAQ", FAQ, Icon::Help),
            NavEntry::new("Shipping", SHIPPING, Icon::Truck),
        ],
    },
];

/// Which screen renders a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Catalog,
    Cart,
    Contact,
    About,
    Faq,
    Shipping,
    Sell,
    Dashboard,
    Orders,
    Listings,
    Wishlist,
    Settings,
    NotFound,
}

impl Page {
    pub fn from_route(route: &str) -> Self {
        match route {
            HOME => Page::Home,
            CATALOG => Page::Catalog,
            CART => Page::Cart,
            CONTACT => Page::Contact,
            ABOUT => Page::About,
            FAQ => Page::Faq,
            SHIPPING => Page::Shipping,
            SELL => Page::Sell,
            DASHBOARD => Page::Dashboard,
            ORDERS => Page::Orders,
            LISTINGS => Page::Listings,
            WISHLIST => Page::Wishlist,
            SETTINGS => Page::Settings,
            _ => Page::NotFound,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Welcome",
            Page::Catalog => "Browse books",
            Page::Cart => "Your cart",
            Page::Contact => "Contact us",
            Page::About => "About us",
            Page::Faq => "Frequently asked questions",
            Page::Shipping => "Shipping",
            Page::Sell => "Sell a book",
            Page::Dashboard => "Dashboard",
            Page::Orders => "Orders",
            Page::Listings => "My listings",
            Page::Wishlist => "Wishlist",
            Page::Settings => "Settings",
            Page::NotFound => "Page not found",
        }
    }

    /// Dashboard pages render with the sidebar.
    pub fn in_dashboard(&self) -> bool {
        matches!(
            self,
            Page::Dashboard | Page::Orders | Page::Listings | Page::Wishlist | Page::Settings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_distinct(entries: &[NavEntry]) {
        let routes: HashSet<_> = entries.iter().map(|e| e.route).collect();
        assert_eq!(routes.len(), entries.len());
    }

    #[test]
    fn test_menu_routes_are_distinct() {
        assert_distinct(HEADER_MENU);
        assert_distinct(DASHBOARD_MENU);
        for section in FOOTER_SECTIONS {
            assert_distinct(section.entries);
        }
    }

    #[test]
    fn test_every_menu_route_has_a_page() {
        let all = HEADER_MENU
            .iter()
            .chain(DASHBOARD_MENU)
            .chain(FOOTER_SECTIONS.iter().flat_map(|s| s.entries));
        for entry in all {
            assert_ne!(Page::from_route(entry.route), Page::NotFound, "{}", entry.route);
        }
    }

    #[test]
    fn test_dashboard_menu_pages_use_sidebar() {
        for entry in DASHBOARD_MENU {
            assert!(Page::from_route(entry.route).in_dashboard());
        }
        assert!(!Page::from_route(CONTACT).in_dashboard());
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(Page::from_route("/dashboard/"), Page::NotFound);
        assert_eq!(Page::from_route("/books/42"), Page::NotFound);
    }
}
