mod price_table;

pub use price_table::PriceTable;

use crate::ids::Symbol;
use crate::Money;

/// Source of current share prices.
///
/// Implementations must never fail: a symbol without a known price is reported as
/// `Money::ZERO`.
pub trait PriceOracle {
    fn get_share_price(&self, symbol: &Symbol) -> Money;
}

impl<T: PriceOracle + ?Sized> PriceOracle for &T {
    fn get_share_price(&self, symbol: &Symbol) -> Money {
        return (**self).get_share_price(symbol);
    }
}
