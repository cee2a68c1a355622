//! Insight request assembly.

use crate::data::{Market, Signal};

/// The information handed to an insight provider for one signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRequest {
    /// Human-readable signal kind.
    pub signal_kind: String,
    /// The authored signal explanation.
    pub explanation: String,
    /// One rendered line per related market.
    pub market_context: String,
}

impl InsightRequest {
    /// Build a request for a signal and its related markets.
    pub fn for_signal(signal: &Signal, markets: &[&Market]) -> Self {
        let market_context = markets
            .iter()
            .map(|m| format!("{} on {} (Price: {})", m.title, m.venue, m.yes_price))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            signal_kind: signal.kind.to_string(),
            explanation: signal.explanation.clone(),
            market_context,
        }
    }

    /// Render the completion prompt.
    pub fn prompt(&self) -> String {
        format!(
            "You are an expert market analyst for \"Mirror\".\n\
             Analyze the following market signal for a prediction market cluster.\n\
             \n\
             Signal Type: {}\n\
             Current Signal Explanation: {}\n\
             Related Markets: {}\n\
             \n\
             Provide a concise (2-3 sentence) deeper explanation of why this signal \
             represents an edge or inconsistency for a retail trader.\n\
             Be calm, analytical, and professional.",
            self.signal_kind, self.explanation, self.market_context
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_market_context_lines() {
        let catalog = Catalog::load();
        let signal = catalog.signal("s1").unwrap();
        let markets = catalog.signal_markets(signal);

        let request = InsightRequest::for_signal(signal, &markets);
        assert_eq!(
            request.market_context,
            "Fed lowers rates by 25bps in March on Polymarket (Price: 0.65), \
             March Rate Cut (25bps) on Kalshi (Price: 0.68)"
        );
    }

    #[test]
    fn test_prompt_carries_signal_fields() {
        let catalog = Catalog::load();
        let signal = catalog.signal("s2").unwrap();
        let markets = catalog.signal_markets(signal);

        let request = InsightRequest::for_signal(signal, &markets);
        let prompt = request.prompt();
        assert!(prompt.contains("Implied Probability Inconsistency"));
        assert!(prompt.contains(&signal.explanation));
        assert!(prompt.contains(&request.market_context));
    }
}
