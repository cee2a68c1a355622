//! Cluster view state: tabs, signal focus, insight slots.

use std::collections::HashMap;

/// Tabs within the cluster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterTab {
    #[default]
    Compare,
    Signals,
    Activity,
}

impl ClusterTab {
    pub const ALL: [ClusterTab; 3] = [Self::Compare, Self::Signals, Self::Activity];

    pub fn next(self) -> Self {
        match self {
            Self::Compare => Self::Signals,
            Self::Signals => Self::Activity,
            Self::Activity => Self::Activity,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Compare => Self::Compare,
            Self::Signals => Self::Compare,
            Self::Activity => Self::Signals,
        }
    }
}

impl std::fmt::Display for ClusterTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compare => write!(f, "Compare"),
            Self::Signals => write!(f, "Signals"),
            Self::Activity => write!(f, "Activity"),
        }
    }
}

/// Lifecycle of one signal's AI insight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightStatus {
    Loading,
    Ready(String),
}

/// State for the cluster view.
#[derive(Debug, Default)]
pub struct ClusterState {
    /// Active tab.
    pub tab: ClusterTab,
    /// Selection within the Compare tab's market rows.
    pub selected_market: usize,
    /// Selection within the Signals tab.
    pub selected_signal: usize,
    /// Insight slots, keyed by signal id. Kept across cluster switches —
    /// a loaded insight stays loaded.
    pub insights: HashMap<String, InsightStatus>,
}

impl ClusterState {
    /// Reset per-cluster focus when a different cluster opens.
    pub fn reset(&mut self) {
        self.tab = ClusterTab::default();
        self.selected_market = 0;
        self.selected_signal = 0;
    }

    /// The insight slot for a signal.
    pub fn insight(&self, signal_id: &str) -> Option<&InsightStatus> {
        self.insights.get(signal_id)
    }

    /// Whether a request may be issued for this signal (none in flight,
    /// none loaded).
    pub fn can_request(&self, signal_id: &str) -> bool {
        !self.insights.contains_key(signal_id)
    }

    /// Mark a signal's insight as loading.
    pub fn set_loading(&mut self, signal_id: &str) {
        self.insights
            .insert(signal_id.to_string(), InsightStatus::Loading);
    }

    /// Store a loaded insight. Last write wins.
    pub fn set_ready(&mut self, signal_id: &str, text: String) {
        self.insights
            .insert(signal_id.to_string(), InsightStatus::Ready(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tab_order_saturates_at_edges() {
        assert_eq!(ClusterTab::Compare.prev(), ClusterTab::Compare);
        assert_eq!(ClusterTab::Compare.next(), ClusterTab::Signals);
        assert_eq!(ClusterTab::Signals.next(), ClusterTab::Activity);
        assert_eq!(ClusterTab::Activity.next(), ClusterTab::Activity);
        assert_eq!(ClusterTab::Activity.prev(), ClusterTab::Signals);
    }

    #[test]
    fn test_insight_request_lifecycle() {
        let mut state = ClusterState::default();
        assert!(state.can_request("s1"));

        state.set_loading("s1");
        assert!(!state.can_request("s1"));
        assert_eq!(state.insight("s1"), Some(&InsightStatus::Loading));

        state.set_ready("s1", "text".into());
        assert!(!state.can_request("s1"));
        assert_eq!(
            state.insight("s1"),
            Some(&InsightStatus::Ready("text".into()))
        );
    }

    #[test]
    fn test_reset_keeps_insights() {
        let mut state = ClusterState {
            tab: ClusterTab::Signals,
            selected_market: 2,
            selected_signal: 1,
            ..Default::default()
        };
        state.set_ready("s1", "text".into());

        state.reset();
        assert_eq!(state.tab, ClusterTab::Compare);
        assert_eq!(state.selected_market, 0);
        assert_eq!(state.selected_signal, 0);
        assert!(state.insight("s1").is_some());
    }
}
