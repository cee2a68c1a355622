//! # Mirror - Prediction-Market Intelligence TUI
//!
//! A mobile-styled terminal application for browsing prediction-market
//! intelligence: topic clusters of related markets across venues,
//! per-market pricing with an interactive price chart, and a mock
//! trade-execution sheet. Market data is an authored in-memory catalog;
//! the only external call is the optional LLM insight fetch.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the select loop over input events
//!   and the action channel
//! - **Chart**: Pure series-to-geometry computations (normalization,
//!   curve building, metrics, pointer mapping)
//! - **Data**: The immutable catalog of markets, clusters, signals,
//!   relationships, and activity entries
//! - **Insight**: The async LLM summary collaborator with fixed
//!   fallbacks
//! - **State**: Store + action reducer, one sub-state per screen
//! - **Events**: Input handling producing actions
//! - **UI**: Layout and rendering
//! - **Config**: Configuration management

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod insight;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
