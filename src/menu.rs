// Menu composition for sidebar and footer navigation

/// Symbolic icon reference, resolved to a glyph at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Book,
    Cart,
    Dashboard,
    Orders,
    Listings,
    Heart,
    Settings,
    Mail,
    Info,
    Help,
    Truck,
    Link,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Book => "📚",
            Icon::Cart => "🛒",
            Icon::Dashboard => "📊",
            Icon::Orders => "📦",
            Icon::Listings => "🏷",
            Icon::Heart => "♥",
            Icon::Settings => "⚙",
            Icon::Mail => "✉",
            Icon::Info => "ℹ",
            Icon::Help => "❓",
            Icon::Truck => "🚚",
            Icon::Link => "🔗",
        }
    }
}

/// A single labeled, routable menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: Icon,
}

impl NavEntry {
    pub const fn new(label: &'static str, route: &'static str, icon: Icon) -> Self {
        Self { label, route, icon }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub entry: NavEntry,
    pub is_active: bool,
}

/// Pair every entry with its active flag, keeping the configured order.
///
/// Matching is exact: `/dashboard` is not active on `/dashboard/orders`.
pub fn compose_menu(entries: &[NavEntry], current_route: &str) -> Vec<MenuItem> {
    entries
        .iter()
        .map(|entry| MenuItem {
            entry: *entry,
            is_active: entry.route == current_route,
        })
        .collect()
}

/// The entry highlighted for `current_route`, if any.
pub fn active_entry<'a>(entries: &'a [NavEntry], current_route: &str) -> Option<&'a NavEntry> {
    entries.iter().find(|entry| entry.route == current_route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ENTRIES: &[NavEntry] = &[
        NavEntry::new("Dashboard", "/dashboard", Icon::Dashboard),
        NavEntry::new("Orders", "/dashboard/orders", Icon::Orders),
        NavEntry::new("Settings", "/dashboard/settings", Icon::Settings),
    ];

    fn active_labels(items: &[MenuItem]) -> Vec<&'static str> {
        items
            .iter()
            .filter(|item| item.is_active)
            .map(|item| item.entry.label)
            .collect()
    }

    #[test]
    fn test_only_exact_match_is_active() {
        let entries = &ENTRIES[..2];
        let items = compose_menu(entries, "/dashboard/orders");
        assert_eq!(items.len(), 2);
        assert!(!items[0].is_active);
        assert!(items[1].is_active);
    }

    #[rstest]
    #[case("/dashboard", vec!["Dashboard"])]
    #[case("/dashboard/settings", vec!["Settings"])]
    #[case("/dashboard/", vec![])]
    #[case("/DASHBOARD", vec![])]
    #[case("", vec![])]
    fn test_active_entries(#[case] route: &str, #[case] expected: Vec<&str>) {
        let items = compose_menu(ENTRIES, route);
        assert_eq!(active_labels(&items), expected);
    }

    #[test]
    fn test_order_is_preserved() {
        let items = compose_menu(ENTRIES, "/nowhere");
        let labels: Vec<_> = items.iter().map(|item| item.entry.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Orders", "Settings"]);
    }

    #[test]
    fn test_empty_menu() {
        assert!(compose_menu(&[], "/").is_empty());
    }

    #[test]
    fn test_compose_is_repeatable() {
        assert_eq!(
            compose_menu(ENTRIES, "/dashboard"),
            compose_menu(ENTRIES, "/dashboard")
        );
    }

    #[test]
    fn test_duplicate_routes_are_all_marked() {
        let entries = [
            NavEntry::new("Home", "/", Icon::Home),
            NavEntry::new("Start", "/", Icon::Home),
        ];
        assert_eq!(active_labels(&compose_menu(&entries, "/")), vec!["Home", "Start"]);
    }

    #[test]
    fn test_active_entry_lookup() {
        assert_eq!(
            active_entry(ENTRIES, "/dashboard/orders").map(|e| e.label),
            Some("Orders")
        );
        assert_eq!(active_entry(ENTRIES, "/orders"), None);
    }
}
