//! Trade sheet state and mock execution tickets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::Market;

/// Which outcome the order buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TradeSide {
    #[default]
    Yes,
    No,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

/// Manual one-shot order or autonomous agent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionMode {
    #[default]
    Manual,
    Agent,
}

impl ExecutionMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Manual => Self::Agent,
            Self::Agent => Self::Manual,
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "Manual"),
            Self::Agent => write!(f, "Agent"),
        }
    }
}

/// Size selector bounds (USD).
const SIZE_MIN: Decimal = dec!(10);
const SIZE_MAX: Decimal = dec!(1000);
const SIZE_STEP: Decimal = dec!(10);

/// Agent runtime bounds (minutes).
const RUNTIME_MIN: u32 = 5;
const RUNTIME_MAX: u32 = 240;
const RUNTIME_STEP: u32 = 5;

/// The open trade sheet form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeForm {
    pub market_id: String,
    pub mode: ExecutionMode,
    pub side: TradeSide,
    /// Order size in USD.
    pub size: Decimal,
    /// Agent runtime in minutes.
    pub runtime_mins: u32,
}

impl TradeForm {
    pub fn new(market_id: impl Into<String>) -> Self {
        Self {
            market_id: market_id.into(),
            mode: ExecutionMode::default(),
            side: TradeSide::default(),
            size: dec!(100),
            runtime_mins: 60,
        }
    }

    /// Nudge the size selector by whole steps, clamped to its bounds.
    pub fn adjust_size(&mut self, steps: i64) {
        let delta = SIZE_STEP * Decimal::from(steps);
        self.size = (self.size + delta).clamp(SIZE_MIN, SIZE_MAX);
    }

    /// Nudge the agent runtime by whole steps, clamped to its bounds.
    pub fn adjust_runtime(&mut self, steps: i64) {
        let delta = RUNTIME_STEP as i64 * steps;
        let runtime = self.runtime_mins as i64 + delta;
        self.runtime_mins = runtime.clamp(RUNTIME_MIN as i64, RUNTIME_MAX as i64) as u32;
    }

    /// The entry price for the selected side.
    pub fn price(&self, market: &Market) -> Decimal {
        match self.side {
            TradeSide::Yes => market.yes_price,
            TradeSide::No => market.no_price,
        }
    }

    /// Estimated payout if the side resolves true: `size / price`.
    pub fn payout(&self, market: &Market) -> Decimal {
        let price = self.price(market);
        if price.is_zero() {
            Decimal::ZERO
        } else {
            self.size / price
        }
    }

    /// Network fee: `size * 0.001`.
    pub fn fee(&self) -> Decimal {
        self.size * dec!(0.001)
    }
}

/// A confirmed mock order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeTicket {
    pub id: Uuid,
    pub market_id: String,
    pub side: TradeSide,
    pub mode: ExecutionMode,
    pub size: Decimal,
    pub price: Decimal,
    /// Agent runtime, for agent tickets.
    pub runtime_mins: Option<u32>,
    pub placed_at: DateTime<Utc>,
}

/// State for the trade sheet.
#[derive(Debug, Default)]
pub struct TradeState {
    /// The open form, if the sheet is showing.
    pub form: Option<TradeForm>,
    /// Tickets confirmed this session.
    pub tickets: Vec<TradeTicket>,
}

impl TradeState {
    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    /// Open the sheet for a market.
    pub fn open(&mut self, market_id: impl Into<String>) {
        self.form = Some(TradeForm::new(market_id));
    }

    /// Close the sheet without confirming.
    pub fn close(&mut self) {
        self.form = None;
    }

    /// Confirm the open form against its market, producing a ticket and
    /// closing the sheet. Returns `None` if no sheet is open.
    pub fn confirm(&mut self, market: &Market) -> Option<TradeTicket> {
        let form = self.form.take()?;
        let ticket = TradeTicket {
            id: Uuid::new_v4(),
            market_id: form.market_id.clone(),
            side: form.side,
            mode: form.mode,
            size: form.size,
            price: form.price(market),
            runtime_mins: (form.mode == ExecutionMode::Agent).then_some(form.runtime_mins),
            placed_at: Utc::now(),
        };
        self.tickets.push(ticket.clone());
        Some(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_adjust_clamps() {
        let mut form = TradeForm::new("m1");
        assert_eq!(form.size, dec!(100));
        form.adjust_size(2);
        assert_eq!(form.size, dec!(120));
        form.adjust_size(-100);
        assert_eq!(form.size, dec!(10));
        form.adjust_size(1000);
        assert_eq!(form.size, dec!(1000));
    }

    #[test]
    fn test_runtime_adjust_clamps() {
        let mut form = TradeForm::new("m1");
        assert_eq!(form.runtime_mins, 60);
        form.adjust_runtime(-100);
        assert_eq!(form.runtime_mins, 5);
        form.adjust_runtime(1000);
        assert_eq!(form.runtime_mins, 240);
    }

    #[test]
    fn test_trade_math() {
        let catalog = Catalog::load();
        let market = catalog.market("m1").unwrap();
        let mut form = TradeForm::new("m1");

        // yes at 0.65: payout = 100 / 0.65
        let payout = form.payout(market);
        assert_eq!(payout.round_dp(2), dec!(153.85));
        assert_eq!(form.fee(), dec!(0.100));

        form.side = TradeSide::No;
        assert_eq!(form.price(market), dec!(0.35));
    }

    #[test]
    fn test_confirm_produces_ticket_with_side_price() {
        let catalog = Catalog::load();
        let market = catalog.market("m1").unwrap();

        let mut state = TradeState::default();
        state.open("m1");
        if let Some(form) = state.form.as_mut() {
            form.side = TradeSide::No;
        }

        let ticket = state.confirm(market).unwrap();
        assert_eq!(ticket.market_id, "m1");
        assert_eq!(ticket.side, TradeSide::No);
        assert_eq!(ticket.price, market.no_price);
        assert_eq!(ticket.runtime_mins, None);
        assert!(!state.is_open());
        assert_eq!(state.tickets.len(), 1);
    }

    #[test]
    fn test_agent_ticket_carries_runtime() {
        let catalog = Catalog::load();
        let market = catalog.market("m4").unwrap();

        let mut state = TradeState::default();
        state.open("m4");
        if let Some(form) = state.form.as_mut() {
            form.mode = ExecutionMode::Agent;
            form.adjust_runtime(2);
        }

        let ticket = state.confirm(market).unwrap();
        assert_eq!(ticket.mode, ExecutionMode::Agent);
        assert_eq!(ticket.runtime_mins, Some(70));
    }

    #[test]
    fn test_confirm_without_open_sheet() {
        let catalog = Catalog::load();
        let market = catalog.market("m1").unwrap();
        let mut state = TradeState::default();
        assert!(state.confirm(market).is_none());
    }
}
