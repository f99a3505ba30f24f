use super::PriceOracle;

use crate::ids::Symbol;
use crate::input::{InputParseError, PriceRecord};
use crate::Money;

use std::collections::HashMap;

/// Fixed lookup table of share prices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<Symbol, Money>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three symbols offered by the reference deployment
    pub fn reference() -> Self {
        return Self::new()
            .with_price("AAPL", Money::whole(150))
            .with_price("TSLA", Money::whole(700))
            .with_price("GOOGL", Money::whole(2800));
    }

    pub fn from_records(records: impl IntoIterator<Item = PriceRecord>) -> Result<Self, InputParseError> {
        let mut table = Self::new();

        for record in records {
            let (symbol, price) = record.parse_price()?;
            log::debug!("Loaded price for {symbol}: {price}");

            table.set_price(symbol, price);
        }

        return Ok(table);
    }

    pub fn with_price(mut self, symbol: impl Into<Symbol>, price: Money) -> Self {
        self.set_price(symbol, price);
        return self;
    }

    /// Replaces the price for `symbol`, returning the previous one
    pub fn set_price(&mut self, symbol: impl Into<Symbol>, price: Money) -> Option<Money> {
        return self.prices.insert(symbol.into(), price);
    }

    /// Known symbols in alphabetical order
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.prices.keys().collect();
        symbols.sort();
        return symbols;
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PriceOracle for PriceTable {
    fn get_share_price(&self, symbol: &Symbol) -> Money {
        return self.prices.get(symbol).copied().unwrap_or(Money::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_record(symbol: &str, price: &str) -> PriceRecord {
        PriceRecord {
            symbol: symbol.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn reference_prices() {
        let table = PriceTable::reference();

        assert_eq!(table.get_share_price(&Symbol::new("AAPL")), Money::whole(150));
        assert_eq!(table.get_share_price(&Symbol::new("TSLA")), Money::whole(700));
        assert_eq!(table.get_share_price(&Symbol::new("GOOGL")), Money::whole(2800));
    }

    #[test]
    fn unknown_symbol_is_zero() {
        let table = PriceTable::reference();

        assert_eq!(table.get_share_price(&Symbol::new("UNKNOWN")), Money::ZERO);
        assert_eq!(table.get_share_price(&Symbol::new("aapl")), Money::ZERO);
        assert_eq!(PriceTable::new().get_share_price(&Symbol::new("AAPL")), Money::ZERO);
    }

    #[test]
    fn set_price() {
        let mut table = PriceTable::new();

        assert_eq!(table.set_price("AAPL", Money::whole(10)), None);
        assert_eq!(table.set_price("AAPL", Money::whole(15)), Some(Money::whole(10)));
        assert_eq!(table.get_share_price(&Symbol::new("AAPL")), Money::whole(15));
    }

    #[test]
    fn symbols_are_sorted() {
        let table = PriceTable::reference();

        let symbols: Vec<&str> = table.symbols().into_iter().map(|s| s.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "TSLA"]);
    }

    #[test]
    fn from_records() {
        let table = PriceTable::from_records(vec![
            price_record("MSFT", "310.25"),
            price_record("AMZN", "128"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get_share_price(&Symbol::new("MSFT")), Money(3_102_500));
        assert_eq!(table.get_share_price(&Symbol::new("AMZN")), Money::whole(128));
    }

    #[test]
    fn from_records_rejects_bad_prices() {
        assert!(matches!(
            PriceTable::from_records(vec![price_record("MSFT", "-1")]),
            Err(InputParseError::NegativePrice(..))
        ));
        assert!(matches!(
            PriceTable::from_records(vec![price_record("MSFT", "ten")]),
            Err(InputParseError::InvalidPrice(..))
        ));
        assert!(matches!(
            PriceTable::from_records(vec![price_record("", "10")]),
            Err(InputParseError::NoSymbol(..))
        ));
    }
}
