//! Watchlist state: watched cluster and market id sets.

use crate::data::Catalog;

/// Tabs within the watchlist screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchTab {
    #[default]
    Clusters,
    Markets,
}

impl WatchTab {
    pub fn toggled(self) -> Self {
        match self {
            Self::Clusters => Self::Markets,
            Self::Markets => Self::Clusters,
        }
    }
}

impl std::fmt::Display for WatchTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clusters => write!(f, "Clusters"),
            Self::Markets => write!(f, "Markets"),
        }
    }
}

/// State for the watchlist screen.
#[derive(Debug, Default)]
pub struct WatchlistState {
    pub tab: WatchTab,
    pub selected_index: usize,
    /// Watched cluster ids, in watch order.
    pub clusters: Vec<String>,
    /// Watched market ids, in watch order.
    pub markets: Vec<String>,
}

impl WatchlistState {
    /// Seed with the starter watchlist (first two clusters, first three
    /// markets).
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            tab: WatchTab::default(),
            selected_index: 0,
            clusters: catalog
                .clusters()
                .iter()
                .take(2)
                .map(|c| c.id.clone())
                .collect(),
            markets: catalog
                .markets()
                .iter()
                .take(3)
                .map(|m| m.id.clone())
                .collect(),
        }
    }

    pub fn is_watching_cluster(&self, id: &str) -> bool {
        self.clusters.iter().any(|c| c == id)
    }

    pub fn is_watching_market(&self, id: &str) -> bool {
        self.markets.iter().any(|m| m == id)
    }

    /// Watch or unwatch a cluster. Returns true if now watched.
    pub fn toggle_cluster(&mut self, id: &str) -> bool {
        if let Some(pos) = self.clusters.iter().position(|c| c == id) {
            self.clusters.remove(pos);
            false
        } else {
            self.clusters.push(id.to_string());
            true
        }
    }

    /// Watch or unwatch a market. Returns true if now watched.
    pub fn toggle_market(&mut self, id: &str) -> bool {
        if let Some(pos) = self.markets.iter().position(|m| m == id) {
            self.markets.remove(pos);
            false
        } else {
            self.markets.push(id.to_string());
            true
        }
    }

    /// Length of the list under the active tab.
    pub fn active_len(&self) -> usize {
        match self.tab {
            WatchTab::Clusters => self.clusters.len(),
            WatchTab::Markets => self.markets.len(),
        }
    }

    /// Id selected under the active tab.
    pub fn selected_id(&self) -> Option<&str> {
        let list = match self.tab {
            WatchTab::Clusters => &self.clusters,
            WatchTab::Markets => &self.markets,
        };
        list.get(self.selected_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_watchlist() {
        let catalog = Catalog::load();
        let watchlist = WatchlistState::new(&catalog);
        assert_eq!(watchlist.clusters, vec!["c1", "c2"]);
        assert_eq!(watchlist.markets, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn test_toggle_pair_is_idempotent() {
        let catalog = Catalog::load();
        let mut watchlist = WatchlistState::new(&catalog);

        assert!(watchlist.toggle_cluster("c5"));
        assert!(watchlist.is_watching_cluster("c5"));
        assert!(!watchlist.toggle_cluster("c5"));
        assert!(!watchlist.is_watching_cluster("c5"));

        let before = watchlist.markets.clone();
        watchlist.toggle_market("m9");
        watchlist.toggle_market("m9");
        assert_eq!(watchlist.markets, before);
    }

    #[test]
    fn test_selected_id_follows_tab() {
        let catalog = Catalog::load();
        let mut watchlist = WatchlistState::new(&catalog);
        watchlist.selected_index = 1;
        assert_eq!(watchlist.selected_id(), Some("c2"));
        watchlist.tab = WatchTab::Markets;
        assert_eq!(watchlist.selected_id(), Some("m2"));
        watchlist.selected_index = 99;
        assert_eq!(watchlist.selected_id(), None);
    }
}
