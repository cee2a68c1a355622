//! Discover screen state: cluster ordering, search, scan progress.

use crate::data::{Catalog, Cluster};

/// Authored status lines replayed while a scan runs.
pub const SCAN_STEPS: [&str; 5] = [
    "Fetching cross-venue liquidity...",
    "Analyzing implied probabilities...",
    "Detecting divergence spikes...",
    "Calculating alpha scores...",
    "Finalizing market clusters...",
];

/// Inconsistencies "indexed" per scan step. Cumulative over the run.
pub const SCAN_FINDS: [u32; 5] = [2, 3, 1, 3, 2];

/// A scan in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    /// Index of the current status step.
    pub step: usize,
    /// Inconsistencies indexed so far.
    pub found: u32,
}

impl ScanState {
    /// The status line for the current step.
    pub fn status(&self) -> &'static str {
        SCAN_STEPS.get(self.step).copied().unwrap_or(SCAN_STEPS[0])
    }
}

/// State for the Discover screen.
#[derive(Debug)]
pub struct DiscoverState {
    /// Cluster ids in display order.
    pub order: Vec<String>,
    /// Selection within the visible (filtered) list.
    pub selected_index: usize,
    /// Submitted search filter.
    pub search_query: Option<String>,
    /// Whether the list has been re-ranked by alpha score.
    pub ranked: bool,
    /// In-progress scan, if any.
    pub scan: Option<ScanState>,
}

impl DiscoverState {
    /// Initial state: clusters in authored order.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            order: catalog.clusters().iter().map(|c| c.id.clone()).collect(),
            selected_index: 0,
            search_query: None,
            ranked: false,
            scan: None,
        }
    }

    /// Whether a scan is running.
    pub fn is_scanning(&self) -> bool {
        self.scan.is_some()
    }

    /// Clusters matching the current search, in display order.
    pub fn visible_clusters<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Cluster> {
        let query = self
            .search_query
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        self.order
            .iter()
            .filter_map(|id| catalog.cluster(id))
            .filter(|c| {
                query.is_empty()
                    || c.title.to_lowercase().contains(&query)
                    || c.subtitle.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// The currently selected cluster, if the list is non-empty.
    pub fn selected_cluster<'a>(&self, catalog: &'a Catalog) -> Option<&'a Cluster> {
        self.visible_clusters(catalog)
            .get(self.selected_index)
            .copied()
    }

    /// Re-order by alpha score descending (the scan's final step).
    pub fn rank_by_alpha(&mut self, catalog: &Catalog) {
        let mut clusters: Vec<&Cluster> = catalog.clusters().iter().collect();
        clusters.sort_by(|a, b| b.alpha_score.unwrap_or(0).cmp(&a.alpha_score.unwrap_or(0)));
        self.order = clusters.iter().map(|c| c.id.clone()).collect();
        self.ranked = true;
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_order_is_authored_order() {
        let catalog = Catalog::load();
        let discover = DiscoverState::new(&catalog);
        assert_eq!(discover.order.first().map(String::as_str), Some("c1"));
        assert_eq!(discover.visible_clusters(&catalog).len(), 10);
        assert!(!discover.ranked);
    }

    #[test]
    fn test_search_filters_title_and_subtitle() {
        let catalog = Catalog::load();
        let mut discover = DiscoverState::new(&catalog);

        discover.search_query = Some("fomc".into());
        let visible = discover.visible_clusters(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "c1");

        // subtitle match
        discover.search_query = Some("playoff".into());
        let visible = discover.visible_clusters(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "c6");

        discover.search_query = Some("zzz".into());
        assert!(discover.visible_clusters(&catalog).is_empty());
    }

    #[test]
    fn test_rank_by_alpha_descending() {
        let catalog = Catalog::load();
        let mut discover = DiscoverState::new(&catalog);
        discover.selected_index = 4;
        discover.rank_by_alpha(&catalog);

        assert!(discover.ranked);
        assert_eq!(discover.selected_index, 0);
        let scores: Vec<u8> = discover
            .visible_clusters(&catalog)
            .iter()
            .map(|c| c.alpha_score.unwrap_or(0))
            .collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_scan_status_lines() {
        let scan = ScanState { step: 2, found: 6 };
        assert_eq!(scan.status(), SCAN_STEPS[2]);
        // out-of-range step falls back rather than panicking
        let scan = ScanState { step: 99, found: 0 };
        assert_eq!(scan.status(), SCAN_STEPS[0]);
    }
}
