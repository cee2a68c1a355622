//! Immutable in-memory market intelligence data.
//!
//! The catalog is loaded once at startup and never mutated. Screens read
//! it through id-keyed accessors; mutable per-session state (read flags,
//! watchlists, orderings) lives in the store, not here.

mod catalog;
mod types;

pub use catalog::Catalog;
pub use types::{
    ActivityEntry, ActivityKind, Cluster, LiquidityLevel, Market, MarketStatus, Relationship,
    RelationshipKind, Severity, Signal, SignalKind,
};
