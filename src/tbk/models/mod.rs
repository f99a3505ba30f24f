mod account;
mod account_report;
mod holdings;
mod transaction;

pub use account::{Account, AccountError, UnknownSymbolPolicy};
pub use account_report::{AccountSummary, HoldingReport};
pub use holdings::{Holdings, Quantity};
pub use transaction::Transaction;
