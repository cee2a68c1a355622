//! LLM-backed signal insight service.
//!
//! The one asynchronous boundary in the application. Callers build an
//! [`InsightRequest`] from a signal and its related markets, hand it to a
//! provider, and always get displayable text back: the provider degrades
//! to fixed fallback strings on missing configuration or any failure, so
//! no error from this module ever reaches the render path.

mod client;
mod request;

pub use client::InsightClient;
pub use request::InsightRequest;

use async_trait::async_trait;

/// Shown when no API key is configured.
pub const UNCONFIGURED_FALLBACK: &str = "AI insights currently unavailable.";
/// Shown on transport, HTTP, or decode failure.
pub const FAILURE_FALLBACK: &str = "Insights unavailable.";
/// Shown when the model returns an empty completion.
pub const EMPTY_FALLBACK: &str = "Unable to generate deeper insight at this time.";

/// Source of natural-language signal summaries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Summarize a signal. Always resolves to displayable text, never an
    /// error.
    async fn signal_insight(&self, request: &InsightRequest) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_round_trip() {
        let mut provider = MockInsightProvider::new();
        provider
            .expect_signal_insight()
            .returning(|_| "A concise deeper explanation.".to_string());

        let request = InsightRequest {
            signal_kind: "Cross-Venue Divergence".into(),
            explanation: "3% discrepancy on the FOMC rate cut.".into(),
            market_context: "Fed lowers rates on Polymarket (Price: 0.65)".into(),
        };

        let text = tokio_test::block_on(provider.signal_insight(&request));
        assert_eq!(text, "A concise deeper explanation.");
    }
}
