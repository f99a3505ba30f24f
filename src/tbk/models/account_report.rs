use super::Quantity;

use crate::ids::{Symbol, UserId};
use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub user_id: UserId,
    pub balance: Money,
    pub initial_deposit: Money,
    pub portfolio_value: Money,
    pub profit_loss: Money,
}

/// One holding valued at the current price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingReport {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub price: Money,
    pub value: Money,
}
