use std::borrow::Borrow;
use std::fmt;

/// Ticker symbol, e.g. `AAPL`. Compared exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        return Self(symbol.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for Symbol {
    fn from(symbol: &str) -> Self {
        return Self::new(symbol);
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
