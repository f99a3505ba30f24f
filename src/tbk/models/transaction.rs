use super::Quantity;

use crate::ids::Symbol;
use crate::{Money, TransactionReport};

use std::fmt;

/// Transaction represents a successful change to an account. It is never altered after being
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Deposit {
        amount: Money,
    },
    Withdraw {
        amount: Money,
    },
    Buy {
        symbol: Symbol,
        quantity: Quantity,
        price: Money,
    },
    Sell {
        symbol: Symbol,
        quantity: Quantity,
        price: Money,
    },
}

impl Transaction {
    pub fn type_name(&self) -> &'static str {
        return match self {
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Buy { .. } => "buy",
            Self::Sell { .. } => "sell",
        };
    }

    /// Flattens the transaction into an export row. `index` is 1-based.
    pub fn to_report(&self, index: usize) -> TransactionReport {
        let (symbol, quantity, price, amount) = match self {
            Self::Deposit { amount } | Self::Withdraw { amount } => {
                (String::new(), String::new(), String::new(), amount.to_string())
            }
            Self::Buy {
                symbol,
                quantity,
                price,
            }
            | Self::Sell {
                symbol,
                quantity,
                price,
            } => (
                symbol.to_string(),
                quantity.to_string(),
                price.to_string(),
                String::new(),
            ),
        };

        return TransactionReport {
            index,
            typ: self.type_name().to_string(),
            symbol,
            quantity,
            price,
            amount,
        };
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Deposit { amount } => write!(f, "Deposit: ${amount:.2}"),
            Self::Withdraw { amount } => write!(f, "Withdrawal: ${amount:.2}"),
            Self::Buy {
                symbol,
                quantity,
                price,
            } => write!(f, "Buy: {quantity} shares of {symbol} at ${price:.2}"),
            Self::Sell {
                symbol,
                quantity,
                price,
            } => write!(f, "Sell: {quantity} shares of {symbol} at ${price:.2}"),
        };
    }
}
