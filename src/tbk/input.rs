use crate::ids::Symbol;
use crate::models::Quantity;
use crate::{Money, MoneyError};

use serde::Deserialize;

use thiserror::Error;

/// Represents an input command that a string would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputCommand {
    #[serde(rename = "type")]
    pub typ: InputCommandType,

    pub symbol: Option<String>,
    pub quantity: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputCommandType {
    Reset,
    Deposit,
    Withdraw,
    Buy,
    Sell,
    Price,
    Holdings,
    Summary,
    Transactions,
}

/// Represents one row of a price table file
#[derive(Deserialize, Debug, Clone)]
pub struct PriceRecord {
    pub symbol: String,
    pub price: String,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input: symbol missing from {0}")]
    NoSymbol(String),

    #[error("Error parsing input command: amount value missing from {0:?}")]
    NoAmount(InputCommand),

    #[error("Error parsing input command: quantity value missing from {0:?}")]
    NoQuantity(InputCommand),

    #[error("Error parsing input command: quantity {1:?} is not a whole number: {0:?}")]
    InvalidQuantity(InputCommand, String),

    #[error("Error parsing input command: invalid amount in {0:?}")]
    InvalidAmount(InputCommand, #[source] MoneyError),

    #[error("Error parsing price record: invalid price in {0:?}")]
    InvalidPrice(PriceRecord, #[source] MoneyError),

    #[error("Error parsing price record: negative prices not supported: {0:?}")]
    NegativePrice(PriceRecord),
}

/// Typed command, produced once the text fields have been parsed.
///
/// Only syntax is checked here. Business rules such as positive amounts are enforced by the
/// account itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reset,
    Deposit { amount: Money },
    Withdraw { amount: Money },
    Buy { symbol: Symbol, quantity: Quantity },
    Sell { symbol: Symbol, quantity: Quantity },
    Price { symbol: Symbol },
    Holdings,
    Summary,
    Transactions,
}

impl InputCommand {
    pub fn parse_command(self) -> Result<Command, InputParseError> {
        let command = match self.typ {
            InputCommandType::Reset => Command::Reset,
            InputCommandType::Deposit => Command::Deposit {
                amount: self.parse_amount()?,
            },
            InputCommandType::Withdraw => Command::Withdraw {
                amount: self.parse_amount()?,
            },
            InputCommandType::Buy => Command::Buy {
                symbol: self.parse_symbol()?,
                quantity: self.parse_quantity()?,
            },
            InputCommandType::Sell => Command::Sell {
                symbol: self.parse_symbol()?,
                quantity: self.parse_quantity()?,
            },
            InputCommandType::Price => Command::Price {
                symbol: self.parse_symbol()?,
            },
            InputCommandType::Holdings => Command::Holdings,
            InputCommandType::Summary => Command::Summary,
            InputCommandType::Transactions => Command::Transactions,
        };

        Ok(command)
    }

    fn parse_symbol(&self) -> Result<Symbol, InputParseError> {
        let symbol = self
            .symbol
            .as_deref()
            .map(str::trim)
            .filter(|symbol| !symbol.is_empty())
            .ok_or_else(|| InputParseError::NoSymbol(format!("{self:?}")))?;

        Ok(Symbol::new(symbol))
    }

    fn parse_quantity(&self) -> Result<Quantity, InputParseError> {
        let quantity = self
            .quantity
            .as_deref()
            .ok_or_else(|| InputParseError::NoQuantity(self.clone()))?;

        quantity
            .trim()
            .parse::<Quantity>()
            .map_err(|_| InputParseError::InvalidQuantity(self.clone(), quantity.to_string()))
    }

    fn parse_amount(&self) -> Result<Money, InputParseError> {
        let amount = self
            .amount
            .as_deref()
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;

        Money::parse(amount).map_err(|e| InputParseError::InvalidAmount(self.clone(), e))
    }
}

impl PriceRecord {
    pub fn parse_price(self) -> Result<(Symbol, Money), InputParseError> {
        let symbol = self.symbol.trim();

        if symbol.is_empty() {
            Err(InputParseError::NoSymbol(format!("{self:?}")))?;
        }

        let price = match Money::parse(&self.price) {
            Ok(price) => price,
            Err(e) => return Err(InputParseError::InvalidPrice(self.clone(), e)),
        };

        if price.0 < 0 {
            Err(InputParseError::NegativePrice(self.clone()))?;
        }

        Ok((Symbol::new(symbol), price))
    }
}
