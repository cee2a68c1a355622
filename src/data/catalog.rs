//! The authored market-intelligence catalog.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{
    ActivityEntry, ActivityKind, Cluster, LiquidityLevel, Market, MarketStatus, Relationship,
    RelationshipKind, Severity, Signal, SignalKind,
};

/// Read-only tables of markets, clusters, signals, relationships, and
/// activity entries, keyed by string identifiers.
#[derive(Debug, Clone)]
pub struct Catalog {
    markets: Vec<Market>,
    relationships: Vec<Relationship>,
    signals: Vec<Signal>,
    clusters: Vec<Cluster>,
    activity: Vec<ActivityEntry>,
}

impl Catalog {
    /// Load the authored catalog.
    pub fn load() -> Self {
        Self {
            markets: seed_markets(),
            relationships: seed_relationships(),
            signals: seed_signals(),
            clusters: seed_clusters(),
            activity: seed_activity(),
        }
    }

    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    pub fn market(&self, id: &str) -> Option<&Market> {
        self.markets.iter().find(|m| m.id == id)
    }

    pub fn cluster(&self, id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    pub fn signal(&self, id: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.id == id)
    }

    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.id == id)
    }

    /// Markets belonging to a cluster, in the cluster's order. Unknown
    /// ids are skipped.
    pub fn cluster_markets(&self, cluster: &Cluster) -> Vec<&Market> {
        cluster
            .market_ids
            .iter()
            .filter_map(|id| self.market(id))
            .collect()
    }

    /// Signals belonging to a cluster.
    pub fn cluster_signals(&self, cluster: &Cluster) -> Vec<&Signal> {
        cluster
            .signal_ids
            .iter()
            .filter_map(|id| self.signal(id))
            .collect()
    }

    /// Relationships belonging to a cluster.
    pub fn cluster_relationships(&self, cluster: &Cluster) -> Vec<&Relationship> {
        cluster
            .relationship_ids
            .iter()
            .filter_map(|id| self.relationship(id))
            .collect()
    }

    /// Member markets of a relationship.
    pub fn relationship_markets(&self, relationship: &Relationship) -> Vec<&Market> {
        relationship
            .market_ids
            .iter()
            .filter_map(|id| self.market(id))
            .collect()
    }

    /// The market rows of a cluster's comparison view: grouped by
    /// relationship when the cluster has relationships (a market appears
    /// once per group that contains it), the flat member list otherwise.
    pub fn compare_rows(&self, cluster: &Cluster) -> Vec<&Market> {
        let relationships = self.cluster_relationships(cluster);
        if relationships.is_empty() {
            self.cluster_markets(cluster)
        } else {
            relationships
                .iter()
                .flat_map(|r| self.relationship_markets(r))
                .collect()
        }
    }

    /// Markets a signal refers to.
    pub fn signal_markets(&self, signal: &Signal) -> Vec<&Market> {
        signal
            .related_market_ids
            .iter()
            .filter_map(|id| self.market(id))
            .collect()
    }

    /// Activity entries attached to a cluster.
    pub fn cluster_activity(&self, cluster_id: &str) -> Vec<&ActivityEntry> {
        self.activity
            .iter()
            .filter(|a| a.cluster_id.as_deref() == Some(cluster_id))
            .collect()
    }
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn market(
    id: &str,
    title: &str,
    category: &str,
    venue: &str,
    yes_price: Decimal,
    spread: Decimal,
    liquidity: LiquidityLevel,
    resolution_date: NaiveDate,
    status: MarketStatus,
    price_change_24h: Decimal,
    description: &str,
    price_history: &[f64],
) -> Market {
    Market {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        venue: venue.into(),
        yes_price,
        no_price: Decimal::ONE - yes_price,
        spread,
        liquidity,
        resolution_date,
        status,
        price_change_24h,
        description: description.into(),
        price_history: price_history.to_vec(),
    }
}

fn seed_markets() -> Vec<Market> {
    use LiquidityLevel::{High, Low, Med};
    use MarketStatus::Open;

    vec![
        // FOMC cluster
        market(
            "m1",
            "Fed lowers rates by 25bps in March",
            "Economics",
            "Polymarket",
            dec!(0.65),
            dec!(0.02),
            High,
            date(2024, 3, 31),
            Open,
            dec!(0.05),
            "Will the Federal Open Market Committee (FOMC) announce a target range for \
             the federal funds rate that is 25 basis points lower than the previous range \
             following their March meeting?",
            &[0.58, 0.60, 0.57, 0.61, 0.60, 0.63, 0.64, 0.65],
        ),
        market(
            "m2",
            "Fed lowers rates by 50bps in March",
            "Economics",
            "Polymarket",
            dec!(0.15),
            dec!(0.03),
            Med,
            date(2024, 3, 31),
            Open,
            dec!(-0.02),
            "Will the FOMC announce a target range 50 basis points lower following their \
             March meeting?",
            &[0.17, 0.18, 0.16, 0.17, 0.15, 0.16, 0.14, 0.15],
        ),
        market(
            "m3",
            "March Rate Cut (25bps)",
            "Economics",
            "Kalshi",
            dec!(0.68),
            dec!(0.01),
            High,
            date(2024, 3, 31),
            Open,
            dec!(0.04),
            "Binary option on a 25bps rate cut in the March FOMC meeting.",
            &[0.62, 0.64, 0.63, 0.66, 0.65, 0.67, 0.66, 0.68],
        ),
        // SpaceX cluster
        market(
            "m4",
            "SpaceX Starship reaches orbit on IFT-3",
            "Science",
            "Polymarket",
            dec!(0.42),
            dec!(0.04),
            Med,
            date(2024, 4, 15),
            Open,
            dec!(0.12),
            "Will the SpaceX Starship vehicle successfully reach an orbital velocity \
             during its third integrated flight test?",
            &[0.30, 0.32, 0.31, 0.35, 0.38, 0.36, 0.40, 0.42],
        ),
        market(
            "m5",
            "SpaceX Starship successfully de-orbits",
            "Science",
            "Polymarket",
            dec!(0.28),
            dec!(0.05),
            Low,
            date(2024, 4, 15),
            Open,
            dec!(0.05),
            "Will the Starship vehicle perform a controlled re-entry and splashdown?",
            &[0.23, 0.24, 0.22, 0.25, 0.26, 0.25, 0.27, 0.28],
        ),
        // US election cluster
        market(
            "m6",
            "Donald Trump wins 2024 Election",
            "Politics",
            "Polymarket",
            dec!(0.52),
            dec!(0.01),
            High,
            date(2024, 11, 5),
            Open,
            dec!(0.01),
            "Will Donald Trump be elected the next President of the United States?",
            &[0.51, 0.52, 0.50, 0.53, 0.52, 0.51, 0.52, 0.52],
        ),
        market(
            "m7",
            "Trump wins Popular Vote",
            "Politics",
            "Polymarket",
            dec!(0.38),
            dec!(0.02),
            High,
            date(2024, 11, 5),
            Open,
            dec!(-0.01),
            "Will Donald Trump win the majority of the popular vote in the 2024 US \
             Presidential Election?",
            &[0.39, 0.40, 0.38, 0.39, 0.37, 0.38, 0.39, 0.38],
        ),
        // Crypto cluster
        market(
            "m8",
            "Spot ETH ETF Approved by May 31",
            "Crypto",
            "Polymarket",
            dec!(0.45),
            dec!(0.03),
            High,
            date(2024, 5, 31),
            Open,
            dec!(0.08),
            "Will the SEC approve a spot Ethereum exchange-traded fund by the specified \
             date?",
            &[0.37, 0.39, 0.38, 0.42, 0.40, 0.44, 0.43, 0.45],
        ),
        market(
            "m9",
            "Ethereum Spot ETF (May)",
            "Crypto",
            "Kalshi",
            dec!(0.49),
            dec!(0.02),
            Med,
            date(2024, 5, 31),
            Open,
            dec!(0.06),
            "SEC approval of Spot ETH ETF listing.",
            &[0.43, 0.44, 0.46, 0.45, 0.47, 0.48, 0.47, 0.49],
        ),
        // NBA cluster
        market(
            "m10",
            "Boston Celtics win NBA Finals",
            "Sports",
            "Polymarket",
            dec!(0.35),
            dec!(0.04),
            High,
            date(2024, 6, 25),
            Open,
            dec!(0.02),
            "Will the Boston Celtics be crowned the 2023-24 NBA Champions?",
            &[0.33, 0.34, 0.32, 0.35, 0.34, 0.36, 0.34, 0.35],
        ),
        market(
            "m11",
            "Celtics to win Title",
            "Sports",
            "DraftKings (Sim)",
            dec!(0.41),
            dec!(0.05),
            High,
            date(2024, 6, 25),
            Open,
            dec!(0.01),
            "Moneyline on Celtics winning the NBA Championship.",
            &[0.40, 0.41, 0.39, 0.42, 0.41, 0.40, 0.42, 0.41],
        ),
        // Geopolitics cluster
        market(
            "m12",
            "Ceasefire in Gaza by April 1",
            "Global",
            "Polymarket",
            dec!(0.22),
            dec!(0.03),
            Med,
            date(2024, 4, 1),
            Open,
            dec!(-0.10),
            "Will a formal ceasefire be reached in the Gaza conflict by April 1?",
            &[0.32, 0.30, 0.31, 0.28, 0.26, 0.25, 0.23, 0.22],
        ),
        market(
            "m13",
            "Hostage Release Agreement signed",
            "Global",
            "Polymarket",
            dec!(0.28),
            dec!(0.04),
            Low,
            date(2024, 4, 1),
            Open,
            dec!(-0.05),
            "Will a hostage exchange deal be signed between Israel and Hamas?",
            &[0.33, 0.32, 0.34, 0.31, 0.30, 0.29, 0.30, 0.28],
        ),
    ]
}

fn seed_relationships() -> Vec<Relationship> {
    use RelationshipKind::{Conditional, Equivalence, Threshold};

    let relationship = |id: &str, kind, description: &str, market_ids: &[&str]| Relationship {
        id: id.into(),
        kind,
        description: description.into(),
        market_ids: ids(market_ids),
    };

    vec![
        relationship(
            "r1",
            Threshold,
            "A 50bps cut implies a 25bps cut. Price of 50bps must be <= 25bps.",
            &["m1", "m2"],
        ),
        relationship(
            "r2",
            Equivalence,
            "Same event, different venues. Prices should converge.",
            &["m1", "m3"],
        ),
        relationship(
            "r3",
            Conditional,
            "De-orbit success is dependent on reaching orbit first.",
            &["m4", "m5"],
        ),
        relationship(
            "r4",
            Threshold,
            "Trump popular vote win implies overall win.",
            &["m6", "m7"],
        ),
        relationship(
            "r5",
            Equivalence,
            "Cross-venue ETH ETF approval monitoring.",
            &["m8", "m9"],
        ),
        relationship(
            "r6",
            Equivalence,
            "Prediction Market vs Sportsbook discrepancy.",
            &["m10", "m11"],
        ),
        relationship(
            "r7",
            Conditional,
            "Hostage deal is a likely prerequisite for ceasefire.",
            &["m12", "m13"],
        ),
    ]
}

fn seed_signals() -> Vec<Signal> {
    use SignalKind::{CrossVenueDivergence, ImpliedProbabilityInconsistency, ThresholdViolation};

    let signal = |id: &str, kind, severity, explanation: &str, related: &[&str]| Signal {
        id: id.into(),
        kind,
        severity,
        explanation: explanation.into(),
        related_market_ids: ids(related),
    };

    vec![
        signal(
            "s1",
            CrossVenueDivergence,
            Severity::High,
            "Polymarket (65%) and Kalshi (68%) are showing a 3% discrepancy on the FOMC \
             rate cut.",
            &["m1", "m3"],
        ),
        signal(
            "s2",
            ImpliedProbabilityInconsistency,
            Severity::Med,
            "The conditional probability of de-orbit given orbit success is unusually \
             low (0.28/0.42 = 66%).",
            &["m4", "m5"],
        ),
        signal(
            "s3",
            ThresholdViolation,
            Severity::High,
            "Popular vote (38%) is pricing Trump higher than historical correlation to \
             Electoral College win (52%).",
            &["m6", "m7"],
        ),
        signal(
            "s4",
            CrossVenueDivergence,
            Severity::High,
            "4% gap between Polymarket (45%) and Kalshi (49%) on ETH ETF approval \
             probability.",
            &["m8", "m9"],
        ),
        signal(
            "s5",
            CrossVenueDivergence,
            Severity::Med,
            "Polymarket is significantly more bearish on Celtics (35%) than traditional \
             sportsbooks (41%).",
            &["m10", "m11"],
        ),
    ]
}

fn seed_clusters() -> Vec<Cluster> {
    #[allow(clippy::too_many_arguments)]
    let cluster = |id: &str,
                   title: &str,
                   subtitle: &str,
                   sample_markets: &[&str],
                   market_ids: &[&str],
                   relationship_ids: &[&str],
                   signal_ids: &[&str],
                   alpha_score: Option<u8>,
                   volume: Option<&str>| Cluster {
        id: id.into(),
        title: title.into(),
        subtitle: subtitle.into(),
        sample_markets: ids(sample_markets),
        signal_count: signal_ids.len(),
        market_ids: ids(market_ids),
        relationship_ids: ids(relationship_ids),
        signal_ids: ids(signal_ids),
        alpha_score,
        volume: volume.map(String::from),
    };

    vec![
        cluster(
            "c1",
            "March FOMC Meeting",
            "Interest rate decisions and macro expectations",
            &["25bps Rate Cut", "50bps Rate Cut"],
            &["m1", "m2", "m3"],
            &["r1", "r2"],
            &["s1"],
            Some(92),
            Some("$4.2M"),
        ),
        cluster(
            "c2",
            "Starship IFT-3 Progress",
            "Orbital milestones and re-entry testing",
            &["Orbital reach", "Successful de-orbit"],
            &["m4", "m5"],
            &["r3"],
            &["s2"],
            Some(78),
            Some("$1.1M"),
        ),
        cluster(
            "c3",
            "2024 US Election",
            "Presidential and Congressional outcomes",
            &["Trump Win", "Popular Vote"],
            &["m6", "m7"],
            &["r4"],
            &["s3"],
            Some(95),
            Some("$142M"),
        ),
        cluster(
            "c4",
            "ETH ETF & SEC Policy",
            "Regulatory rulings and institutional crypto",
            &["Spot ETH ETF", "SEC Approval"],
            &["m8", "m9"],
            &["r5"],
            &["s4"],
            Some(88),
            Some("$12.5M"),
        ),
        cluster(
            "c5",
            "AI Governance",
            "Safety standards and model regulation",
            &["GPT-5 Release", "OpenAI Board"],
            &[],
            &[],
            &[],
            Some(30),
            Some("$800K"),
        ),
        cluster(
            "c6",
            "NBA Championship",
            "Season outcomes and playoff brackets",
            &["Finals Winner", "MVP"],
            &["m10", "m11"],
            &["r6"],
            &["s5"],
            Some(65),
            Some("$8.9M"),
        ),
        cluster(
            "c7",
            "Geopolitical Stability",
            "Conflict resolution and diplomatic efforts",
            &["Ceasefire Date", "Agreement Sign"],
            &["m12", "m13"],
            &["r7"],
            &[],
            Some(95),
            Some("$3.4M"),
        ),
        cluster(
            "c8",
            "Energy Transition",
            "Nuclear expansion and green hydrogen",
            &["Fusion Target", "EV Adoption"],
            &[],
            &[],
            &[],
            Some(22),
            Some("$1.9M"),
        ),
        cluster(
            "c9",
            "UK General Election",
            "Westminster control and Tory vs Labour odds",
            &["Labour Majority", "Sunak Exit"],
            &[],
            &[],
            &[],
            Some(82),
            Some("$1.2M"),
        ),
        cluster(
            "c10",
            "US Debt Ceiling",
            "Fiscal policy deadlines and default risk",
            &["Default Probability", "Bipartisan Deal"],
            &[],
            &[],
            &[],
            Some(45),
            Some("$500K"),
        ),
    ]
}

fn seed_activity() -> Vec<ActivityEntry> {
    let entry = |id: &str,
                 kind,
                 title: &str,
                 message: &str,
                 timestamp: &str,
                 read: bool,
                 cluster_id: Option<&str>| ActivityEntry {
        id: id.into(),
        kind,
        title: title.into(),
        message: message.into(),
        timestamp: timestamp.into(),
        read,
        cluster_id: cluster_id.map(String::from),
    };

    vec![
        entry(
            "a1",
            ActivityKind::Signal,
            "New High-Severity Signal",
            "Arbitrage opportunity detected in March FOMC cluster between Kalshi and \
             Polymarket.",
            "2 mins ago",
            false,
            Some("c1"),
        ),
        entry(
            "a2",
            ActivityKind::Alert,
            "Price Target Reached",
            "Fed 25bps cut yes price crossed 65¢.",
            "1 hour ago",
            true,
            Some("c1"),
        ),
        entry(
            "a3",
            ActivityKind::System,
            "Market Resolution",
            "NVIDIA Q4 Earnings market has resolved to \"YES\".",
            "4 hours ago",
            true,
            None,
        ),
        entry(
            "a4",
            ActivityKind::Signal,
            "Probability Violation",
            "Election threshold violation: Popular vote price exceeding electoral win \
             implied floor.",
            "10 mins ago",
            false,
            Some("c3"),
        ),
        entry(
            "a5",
            ActivityKind::Alert,
            "Volatility Spike",
            "ETH ETF approval probability jumped 8% in 15 minutes following SEC rumor.",
            "30 mins ago",
            false,
            Some("c4"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::prelude::ToPrimitive;

    #[test]
    fn test_table_sizes() {
        let catalog = Catalog::load();
        assert_eq!(catalog.markets().len(), 13);
        assert_eq!(catalog.clusters().len(), 10);
        assert_eq!(catalog.signals().len(), 5);
        assert_eq!(catalog.relationships().len(), 7);
        assert_eq!(catalog.activity().len(), 5);
    }

    #[test]
    fn test_all_cluster_references_resolve() {
        let catalog = Catalog::load();
        for cluster in catalog.clusters() {
            for id in &cluster.market_ids {
                assert!(catalog.market(id).is_some(), "missing market {id}");
            }
            for id in &cluster.signal_ids {
                assert!(catalog.signal(id).is_some(), "missing signal {id}");
            }
            for id in &cluster.relationship_ids {
                assert!(catalog.relationship(id).is_some(), "missing relationship {id}");
            }
        }
    }

    #[test]
    fn test_signal_count_matches_signal_ids() {
        let catalog = Catalog::load();
        for cluster in catalog.clusters() {
            assert_eq!(cluster.signal_count, cluster.signal_ids.len());
        }
    }

    #[test]
    fn test_signal_and_relationship_references_resolve() {
        let catalog = Catalog::load();
        for signal in catalog.signals() {
            assert_eq!(
                catalog.signal_markets(signal).len(),
                signal.related_market_ids.len()
            );
        }
        for relationship in catalog.relationships() {
            assert_eq!(
                catalog.relationship_markets(relationship).len(),
                relationship.market_ids.len()
            );
        }
    }

    #[test]
    fn test_prices_are_complementary() {
        let catalog = Catalog::load();
        for market in catalog.markets() {
            assert_eq!(market.yes_price + market.no_price, Decimal::ONE);
        }
    }

    #[test]
    fn test_price_history_is_probability_series() {
        let catalog = Catalog::load();
        for market in catalog.markets() {
            assert!(!market.price_history.is_empty());
            for &p in &market.price_history {
                assert!((0.0..=1.0).contains(&p), "{}: {p} out of range", market.id);
            }
            // the series ends at the current yes price
            let last = *market.price_history.last().unwrap();
            let yes = market.yes_price.to_f64().unwrap();
            assert!((last - yes).abs() < 1e-9, "{}: {last} != {yes}", market.id);
        }
    }

    #[test]
    fn test_cluster_activity_filter() {
        let catalog = Catalog::load();
        let c1 = catalog.cluster_activity("c1");
        assert_eq!(c1.len(), 2);
        assert!(catalog.cluster_activity("c8").is_empty());
    }

    #[test]
    fn test_compare_rows_grouped_and_flat() {
        let catalog = Catalog::load();
        // c1 has relationships r1 (m1, m2) and r2 (m1, m3): m1 repeats
        let c1 = catalog.cluster("c1").unwrap();
        let rows: Vec<&str> = catalog
            .compare_rows(c1)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(rows, vec!["m1", "m2", "m1", "m3"]);

        // a cluster without relationships falls back to its member list
        let mut flat = c1.clone();
        flat.relationship_ids.clear();
        let rows: Vec<&str> = catalog
            .compare_rows(&flat)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(rows, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn test_unknown_ids_are_none() {
        let catalog = Catalog::load();
        assert!(catalog.market("nope").is_none());
        assert!(catalog.cluster("nope").is_none());
        assert!(catalog.signal("nope").is_none());
        assert!(catalog.relationship("nope").is_none());
    }
}
