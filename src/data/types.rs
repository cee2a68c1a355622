//! Domain records for markets, clusters, signals, and activity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market liquidity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LiquidityLevel {
    Low,
    #[default]
    Med,
    High,
}

impl std::fmt::Display for LiquidityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Med => write!(f, "Med"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Market status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarketStatus {
    #[default]
    Open,
    Closed,
    Resolved,
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Active"),
            Self::Closed => write!(f, "Locked"),
            Self::Resolved => write!(f, "Settled"),
        }
    }
}

/// A binary prediction market on some venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub title: String,
    pub category: String,
    pub venue: String,
    /// Price of the Yes outcome, in [0, 1].
    pub yes_price: Decimal,
    /// Price of the No outcome, in [0, 1].
    pub no_price: Decimal,
    pub spread: Decimal,
    pub liquidity: LiquidityLevel,
    pub resolution_date: NaiveDate,
    pub status: MarketStatus,
    /// Signed 24h move of the Yes price.
    pub price_change_24h: Decimal,
    pub description: String,
    /// Yes-probability series over the last 24h, oldest first. This is
    /// the chart core's input.
    pub price_history: Vec<f64>,
}

impl Market {
    /// Yes price as rounded integer cents.
    pub fn yes_cents(&self) -> Decimal {
        (self.yes_price * Decimal::ONE_HUNDRED).round()
    }

    /// No price as rounded integer cents.
    pub fn no_cents(&self) -> Decimal {
        (self.no_price * Decimal::ONE_HUNDRED).round()
    }

    /// Whether the market still accepts positions.
    pub fn is_tradeable(&self) -> bool {
        self.status == MarketStatus::Open
    }

    /// Whether the Yes price moved up over the last 24h.
    pub fn is_up(&self) -> bool {
        self.price_change_24h > Decimal::ZERO
    }
}

/// The kind of logical constraint between two markets' prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipKind {
    Threshold,
    Equivalence,
    Conditional,
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Threshold => write!(f, "Threshold"),
            Self::Equivalence => write!(f, "Equivalence"),
            Self::Conditional => write!(f, "Conditional"),
        }
    }
}

/// A logical constraint between the prices of related markets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub kind: RelationshipKind,
    pub description: String,
    pub market_ids: Vec<String>,
}

/// Detected pricing inconsistency type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    ThresholdViolation,
    CrossVenueDivergence,
    ImpliedProbabilityInconsistency,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThresholdViolation => write!(f, "Threshold Violation"),
            Self::CrossVenueDivergence => write!(f, "Cross-Venue Divergence"),
            Self::ImpliedProbabilityInconsistency => {
                write!(f, "Implied Probability Inconsistency")
            }
        }
    }
}

/// Signal severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Med,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Med => write!(f, "Med"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A detected pricing inconsistency between related markets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    pub kind: SignalKind,
    pub severity: Severity,
    pub explanation: String,
    pub related_market_ids: Vec<String>,
}

/// A named group of related markets referencing the same event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Short display tags for sample markets in the group.
    pub sample_markets: Vec<String>,
    pub signal_count: usize,
    pub market_ids: Vec<String>,
    pub relationship_ids: Vec<String>,
    pub signal_ids: Vec<String>,
    /// Authored 0–100 arbitrage attractiveness score. Not derived from
    /// any formula; only ever compared and displayed.
    pub alpha_score: Option<u8>,
    /// Authored volume display string (e.g. "$4.2M").
    pub volume: Option<String>,
}

impl Cluster {
    /// High-alpha clusters get the Alpha badge.
    pub fn is_high_alpha(&self) -> bool {
        self.alpha_score.is_some_and(|s| s > 85)
    }
}

/// The kind of an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Signal,
    Alert,
    System,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signal => write!(f, "Signal"),
            Self::Alert => write!(f, "Alert"),
            Self::System => write!(f, "System"),
        }
    }
}

/// An entry in the intelligence/activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub message: String,
    /// Authored relative timestamp for display ("2 mins ago").
    pub timestamp: String,
    pub read: bool,
    /// Cluster this entry points at, if any.
    pub cluster_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_market() -> Market {
        Market {
            id: "m1".into(),
            title: "Test market".into(),
            category: "Economics".into(),
            venue: "Polymarket".into(),
            yes_price: dec!(0.65),
            no_price: dec!(0.35),
            spread: dec!(0.02),
            liquidity: LiquidityLevel::High,
            resolution_date: NaiveDate::default(),
            status: MarketStatus::Open,
            price_change_24h: dec!(0.05),
            description: String::new(),
            price_history: vec![0.6, 0.65],
        }
    }

    #[test]
    fn test_cents_rounding() {
        let market = sample_market();
        assert_eq!(market.yes_cents(), dec!(65));
        assert_eq!(market.no_cents(), dec!(35));
    }

    #[test]
    fn test_tradeable_by_status() {
        let mut market = sample_market();
        assert!(market.is_tradeable());
        market.status = MarketStatus::Resolved;
        assert!(!market.is_tradeable());
    }

    #[test]
    fn test_high_alpha_threshold() {
        let mut cluster = Cluster {
            id: "c1".into(),
            title: String::new(),
            subtitle: String::new(),
            sample_markets: vec![],
            signal_count: 0,
            market_ids: vec![],
            relationship_ids: vec![],
            signal_ids: vec![],
            alpha_score: Some(85),
            volume: None,
        };
        assert!(!cluster.is_high_alpha());
        cluster.alpha_score = Some(86);
        assert!(cluster.is_high_alpha());
        cluster.alpha_score = None;
        assert!(!cluster.is_high_alpha());
    }
}
