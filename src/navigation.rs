// Navigation policy and in-app history
use serde::{Deserialize, Serialize};

pub const ROOT_ROUTE: &str = "/";

/// Entries kept by `History` before the oldest are dropped.
pub const HISTORY_LIMIT: usize = 100;

/// What a back control should do when pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationAction {
    /// Pop one entry off the history stack.
    StepBack,
    /// Replace the view with the given route.
    NavigateTo(String),
}

/// Where to land when there is no usable history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FallbackConfig {
    pub fallback_route: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            fallback_route: ROOT_ROUTE.to_string(),
        }
    }
}

impl FallbackConfig {
    pub fn new(fallback_route: impl Into<String>) -> Self {
        Self {
            fallback_route: fallback_route.into(),
        }
    }
}

/// Snapshot of the routing facility taken when the user triggers navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub current_route: String,
    pub history_depth: usize,
}

/// Decide between stepping back and redirecting to the fallback.
///
/// A depth of 0 or 1 means the current page was reached directly (deep link,
/// bookmark), so stepping back would leave the application.
pub fn go_back(history_depth: usize, fallback: &FallbackConfig) -> NavigationAction {
    if history_depth > 1 {
        NavigationAction::StepBack
    } else {
        NavigationAction::NavigateTo(fallback.fallback_route.clone())
    }
}

/// Linear history of visited routes with a cursor, like a browser tab.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    limit: usize,
}

impl History {
    pub fn new(start_route: impl Into<String>) -> Self {
        Self::with_limit(start_route, HISTORY_LIMIT)
    }

    pub fn with_limit(start_route: impl Into<String>, limit: usize) -> Self {
        Self {
            entries: vec![start_route.into()],
            index: 0,
            limit: limit.max(2),
        }
    }

    pub fn current_route(&self) -> &str {
        &self.entries[self.index]
    }

    /// Entries up to and including the current one.
    pub fn depth(&self) -> usize {
        self.index + 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn nav_state(&self) -> NavState {
        NavState {
            current_route: self.current_route().to_string(),
            history_depth: self.depth(),
        }
    }

    pub fn push(&mut self, route: impl Into<String>) {
        let route = route.into();
        if route == self.current_route() {
            return;
        }
        // Remove any forward history when navigating to a new route
        self.entries.truncate(self.index + 1);
        self.entries.push(route);
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
    }

    pub fn step_back(&mut self) -> Option<&str> {
        if self.index > 0 {
            self.index -= 1;
            Some(self.current_route())
        } else {
            None
        }
    }

    pub fn step_forward(&mut self) -> Option<&str> {
        if self.can_go_forward() {
            self.index += 1;
            Some(self.current_route())
        } else {
            None
        }
    }

    /// Execute an action and return the route now displayed.
    pub fn apply(&mut self, action: NavigationAction) -> &str {
        match action {
            NavigationAction::StepBack => {
                if self.step_back().is_none() {
                    tracing::debug!(route = self.current_route(), "step back at start of history");
                }
            }
            NavigationAction::NavigateTo(route) => self.push(route),
        }
        self.current_route()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "/catalog")]
    #[case(1, "/catalog")]
    #[case(0, "/")]
    #[case(1, "/dashboard/orders")]
    fn test_shallow_history_uses_fallback(#[case] depth: usize, #[case] fallback: &str) {
        assert_eq!(
            go_back(depth, &FallbackConfig::new(fallback)),
            NavigationAction::NavigateTo(fallback.to_string())
        );
    }

    #[rstest]
    #[case(2, "/catalog")]
    #[case(3, "/")]
    #[case(250, "/contact")]
    fn test_deep_history_steps_back(#[case] depth: usize, #[case] fallback: &str) {
        assert_eq!(
            go_back(depth, &FallbackConfig::new(fallback)),
            NavigationAction::StepBack
        );
    }

    #[test]
    fn test_default_fallback_is_root() {
        assert_eq!(
            go_back(0, &FallbackConfig::default()),
            NavigationAction::NavigateTo("/".into())
        );
    }

    #[test]
    fn test_go_back_is_idempotent() {
        let fallback = FallbackConfig::new("/catalog");
        assert_eq!(go_back(1, &fallback), go_back(1, &fallback));
        assert_eq!(go_back(5, &fallback), go_back(5, &fallback));
    }

    #[test]
    fn test_history_push_and_back() {
        let mut history = History::new("/");
        assert_eq!(history.depth(), 1);

        history.push("/catalog");
        history.push("/contact");
        assert_eq!(history.depth(), 3);
        assert_eq!(history.current_route(), "/contact");

        assert_eq!(history.step_back(), Some("/catalog"));
        assert_eq!(history.step_back(), Some("/"));
        assert_eq!(history.step_back(), None);
        assert_eq!(history.step_forward(), Some("/catalog"));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::new("/");
        history.push("/catalog");
        history.push("/contact");
        history.step_back();

        history.push("/cart");
        assert!(!history.can_go_forward());
        assert_eq!(history.step_back(), Some("/catalog"));
    }

    #[test]
    fn test_history_drops_oldest_past_limit() {
        let mut history = History::with_limit("/", 3);
        for _ in 0..10 {
            history.push("/catalog");
            history.push("/contact");
        }
        assert_eq!(history.depth(), 3);
        assert_eq!(history.current_route(), "/contact");
        assert_eq!(history.step_back(), Some("/catalog"));
        assert_eq!(history.step_back(), Some("/contact"));
        assert_eq!(history.step_back(), None);
    }

    #[test]
    fn test_push_current_route_is_noop() {
        let mut history = History::new("/catalog");
        history.push("/catalog");
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn test_deep_link_back_lands_on_fallback() {
        let fallback = FallbackConfig::new("/catalog");
        let mut history = History::new("/dashboard/orders");

        let action = go_back(history.depth(), &fallback);
        assert_eq!(history.apply(action), "/catalog");
        assert_eq!(
            history.nav_state(),
            NavState {
                current_route: "/catalog".into(),
                history_depth: 2,
            }
        );
    }

    #[test]
    fn test_back_after_browsing_returns_to_previous_page() {
        let fallback = FallbackConfig::default();
        let mut history = History::new("/");
        history.push("/catalog");

        let action = go_back(history.depth(), &fallback);
        assert_eq!(action, NavigationAction::StepBack);
        assert_eq!(history.apply(action), "/");
    }

    #[test]
    fn test_fallback_config_from_toml() {
        let parsed: FallbackConfig = toml::from_str("").expect("empty table");
        assert_eq!(parsed, FallbackConfig::default());

        let parsed: FallbackConfig =
            toml::from_str("fallback_route = \"/catalog\"").expect("valid table");
        assert_eq!(parsed.fallback_route, "/catalog");
    }
}
