use crate::args::InputArgs;
use crate::reader;

use tbk::ids::UserId;
use tbk::models::{Account, UnknownSymbolPolicy};
use tbk::prices::PriceTable;
use tbk::Result;

use std::path::PathBuf;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// The presentation layer serves a single account
pub const DEFAULT_USER_ID: &str = "user123";

pub fn configure_logger() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

/// Everything needed to open (or re-open) the session's account
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub user_id: UserId,
    pub prices: PriceTable,
    pub unknown_symbol_policy: UnknownSymbolPolicy,
    pub export_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_args(input_args: &InputArgs) -> Result<Self> {
        let prices = match &input_args.prices_path {
            Some(path) => reader::read_price_table(path)?,
            None => PriceTable::reference(),
        };

        log::debug!("Using prices for symbols: {:?}", prices.symbols());

        let unknown_symbol_policy = if input_args.strict_symbols {
            UnknownSymbolPolicy::Reject
        } else {
            UnknownSymbolPolicy::Allow
        };

        return Ok(Self {
            user_id: UserId::new(DEFAULT_USER_ID),
            prices,
            unknown_symbol_policy,
            export_path: input_args.export_path.clone(),
        });
    }

    pub fn open_account(&self) -> Account {
        return Account::new(self.user_id.clone(), self.prices.clone())
            .with_unknown_symbol_policy(self.unknown_symbol_policy);
    }
}
