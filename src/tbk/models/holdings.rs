use crate::ids::Symbol;

use std::collections::BTreeMap;

/// Whole number of shares
pub type Quantity = i64;

/// Share counts per symbol. Only strictly positive counts are stored: a symbol whose count
/// drops to zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holdings(BTreeMap<Symbol, Quantity>);

impl Holdings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shares held, zero when the symbol is absent
    pub fn get(&self, symbol: &Symbol) -> Quantity {
        return self.0.get(symbol).copied().unwrap_or(0);
    }

    pub fn set(&mut self, symbol: Symbol, quantity: Quantity) {
        debug_assert!(quantity >= 0, "negative holding for {symbol}: {quantity}");

        if quantity > 0 {
            self.0.insert(symbol, quantity);
        } else {
            self.0.remove(&symbol);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, Quantity)> {
        return self.0.iter().map(|(symbol, quantity)| (symbol, *quantity));
    }

    pub fn to_map(&self) -> BTreeMap<Symbol, Quantity> {
        return self.0.clone();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
