pub mod ids;
pub mod input;
mod ledger;
pub mod models;
mod money;
pub mod prices;
mod result;
mod transaction_report;

pub use ledger::Ledger;
pub use money::{Money, MoneyError};
pub use result::Result;
pub use transaction_report::TransactionReport;

/// Opens an empty account priced from the reference price table
pub fn open_account(user_id: ids::UserId) -> models::Account<prices::PriceTable> {
    let prices = prices::PriceTable::reference();
    let account = models::Account::new(user_id, prices);

    return account;
}
