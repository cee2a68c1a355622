//! Application-level state: route stack, input mode, theme.

use super::Notification;

/// A screen in the application.
///
/// The four root screens sit behind the bottom navigation; cluster and
/// market views are pushed routes with back navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Discover,
    Watchlist,
    Activity,
    Profile,
    Cluster(String),
    Market(String),
}

impl Screen {
    /// Whether this screen is a bottom-navigation root.
    pub fn is_root(&self) -> bool {
        matches!(
            self,
            Self::Discover | Self::Watchlist | Self::Activity | Self::Profile
        )
    }

    /// Display title for the status bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Discover => "Discover",
            Self::Watchlist => "Watchlist",
            Self::Activity => "Activity",
            Self::Profile => "Profile",
            Self::Cluster(_) => "Cluster",
            Self::Market(_) => "Market",
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Light/dark theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Global application state.
#[derive(Debug)]
pub struct AppState {
    /// Route stack; the last entry is the visible screen. Never empty.
    routes: Vec<Screen>,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Theme mode.
    pub theme_mode: ThemeMode,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Live search input (Discover).
    pub search_buffer: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            routes: vec![Screen::Discover],
            input_mode: InputMode::default(),
            theme_mode: ThemeMode::default(),
            show_help: false,
            notification: None,
            error: None,
            should_quit: false,
            search_buffer: String::new(),
        }
    }
}

impl AppState {
    /// The currently visible screen.
    pub fn screen(&self) -> &Screen {
        // routes is never empty
        self.routes.last().unwrap_or(&Screen::Discover)
    }

    /// Push a detail screen onto the route stack.
    pub fn push_screen(&mut self, screen: Screen) {
        self.routes.push(screen);
    }

    /// Pop back to the previous screen. Returns false at a root.
    pub fn pop_screen(&mut self) -> bool {
        if self.routes.len() > 1 {
            self.routes.pop();
            true
        } else {
            false
        }
    }

    /// Switch to a root screen, clearing any pushed routes.
    pub fn switch_root(&mut self, screen: Screen) {
        self.routes.clear();
        self.routes.push(screen);
    }

    /// Check if in search mode.
    pub fn is_searching(&self) -> bool {
        self.input_mode == InputMode::Search
    }

    /// Append a character to the search buffer.
    pub fn push_search_char(&mut self, c: char) {
        self.search_buffer.push(c);
    }

    /// Remove the last search character.
    pub fn pop_search_char(&mut self) {
        self.search_buffer.pop();
    }

    /// Clear the search buffer.
    pub fn clear_search(&mut self) {
        self.search_buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_route_stack_push_pop() {
        let mut app = AppState::default();
        assert_eq!(app.screen(), &Screen::Discover);

        app.push_screen(Screen::Cluster("c1".into()));
        app.push_screen(Screen::Market("m1".into()));
        assert_eq!(app.screen(), &Screen::Market("m1".into()));

        assert!(app.pop_screen());
        assert_eq!(app.screen(), &Screen::Cluster("c1".into()));
        assert!(app.pop_screen());
        assert_eq!(app.screen(), &Screen::Discover);
        // already at a root
        assert!(!app.pop_screen());
        assert_eq!(app.screen(), &Screen::Discover);
    }

    #[test]
    fn test_switch_root_clears_pushed_routes() {
        let mut app = AppState::default();
        app.push_screen(Screen::Cluster("c1".into()));
        app.switch_root(Screen::Activity);
        assert_eq!(app.screen(), &Screen::Activity);
        assert!(!app.pop_screen());
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
