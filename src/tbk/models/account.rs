use super::{AccountSummary, HoldingReport, Holdings, Quantity, Transaction};

use crate::ids::{Symbol, UserId};
use crate::prices::{PriceOracle, PriceTable};
use crate::{Ledger, Money, MoneyError};

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount {0:.2}: amount must be greater than zero")]
    InvalidAmount(Money),

    #[error("Invalid quantity {0}: quantity must be greater than zero")]
    InvalidQuantity(Quantity),

    #[error("Insufficient funds: {required:.2} required but only {available:.2} available")]
    InsufficientFunds { required: Money, available: Money },

    #[error("Insufficient shares of {symbol}: cannot sell {requested} while holding {held}")]
    InsufficientShares {
        symbol: Symbol,
        requested: Quantity,
        held: Quantity,
    },

    #[error("Unknown symbol: no price available for {0}")]
    UnknownSymbol(Symbol),

    #[error("Share count overflow for {0}")]
    QuantityOverflow(Symbol),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// What `buy_shares` does when the oracle reports a zero price, which is how unknown symbols
/// are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy {
    /// Buy at zero cost
    #[default]
    Allow,

    /// Refuse with `AccountError::UnknownSymbol`
    Reject,
}

/// Single-user brokerage account: cash balance, share holdings and the transaction log.
///
/// Every mutating operation either succeeds completely, appending exactly one transaction, or
/// fails with the account left untouched.
#[derive(Debug, Clone)]
pub struct Account<P = PriceTable> {
    user_id: UserId,
    balance: Money,
    initial_deposit: Money,
    holdings: Holdings,
    transactions: Ledger,
    oracle: P,
    unknown_symbol_policy: UnknownSymbolPolicy,
}

impl<P: PriceOracle> Account<P> {
    pub fn new(user_id: UserId, oracle: P) -> Self {
        return Self {
            user_id,
            balance: Money::ZERO,
            initial_deposit: Money::ZERO,
            holdings: Holdings::new(),
            transactions: Ledger::new(),
            oracle,
            unknown_symbol_policy: UnknownSymbolPolicy::default(),
        };
    }

    pub fn with_unknown_symbol_policy(mut self, policy: UnknownSymbolPolicy) -> Self {
        self.unknown_symbol_policy = policy;
        return self;
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Running total of every deposit, the baseline for profit/loss. Withdrawals do not reduce it.
    pub fn initial_deposit(&self) -> Money {
        self.initial_deposit
    }

    pub fn oracle(&self) -> &P {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut P {
        &mut self.oracle
    }

    pub fn unknown_symbol_policy(&self) -> UnknownSymbolPolicy {
        self.unknown_symbol_policy
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        log::debug!("Deposit of {amount} requested for {}", self.user_id);

        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(amount))?
        }

        let mut balance = self.balance;
        let mut initial_deposit = self.initial_deposit;

        balance.add(&amount)?;
        initial_deposit.add(&amount)?;

        // Only apply if both operations were successful
        self.balance = balance;
        self.initial_deposit = initial_deposit;

        self.record(Transaction::Deposit { amount });

        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        log::debug!("Withdrawal of {amount} requested for {}", self.user_id);

        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(amount))?
        }

        if amount > self.balance {
            Err(AccountError::InsufficientFunds {
                required: amount,
                available: self.balance,
            })?
        }

        self.balance.sub(&amount)?;

        self.record(Transaction::Withdraw { amount });

        Ok(())
    }

    /// Buys `quantity` shares at the oracle's current price
    pub fn buy_shares(&mut self, symbol: Symbol, quantity: Quantity) -> Result<(), AccountError> {
        log::debug!("Purchase of {quantity} {symbol} requested for {}", self.user_id);

        if quantity <= 0 {
            Err(AccountError::InvalidQuantity(quantity))?
        }

        let price = self.oracle.get_share_price(&symbol);

        if price.is_zero() {
            match self.unknown_symbol_policy {
                UnknownSymbolPolicy::Allow => {
                    log::warn!("No price for {symbol}, buying {quantity} shares at zero cost");
                }
                UnknownSymbolPolicy::Reject => Err(AccountError::UnknownSymbol(symbol.clone()))?,
            }
        }

        // A cost too large to represent exceeds any balance
        let cost = price
            .times(quantity)
            .map_err(|_| AccountError::InsufficientFunds {
                required: Money::MAX,
                available: self.balance,
            })?;

        if cost > self.balance {
            Err(AccountError::InsufficientFunds {
                required: cost,
                available: self.balance,
            })?
        }

        let held = self
            .holdings
            .get(&symbol)
            .checked_add(quantity)
            .ok_or_else(|| AccountError::QuantityOverflow(symbol.clone()))?;

        self.balance.sub(&cost)?;
        self.holdings.set(symbol.clone(), held);

        self.record(Transaction::Buy {
            symbol,
            quantity,
            price,
        });

        Ok(())
    }

    /// Sells `quantity` shares at the oracle's current price. Selling the last share of a symbol
    /// removes it from the holdings.
    pub fn sell_shares(&mut self, symbol: Symbol, quantity: Quantity) -> Result<(), AccountError> {
        log::debug!("Sale of {quantity} {symbol} requested for {}", self.user_id);

        if quantity <= 0 {
            Err(AccountError::InvalidQuantity(quantity))?
        }

        let held = self.holdings.get(&symbol);

        if held < quantity {
            Err(AccountError::InsufficientShares {
                symbol: symbol.clone(),
                requested: quantity,
                held,
            })?
        }

        let price = self.oracle.get_share_price(&symbol);
        let proceeds = price.times(quantity)?;

        self.balance.add(&proceeds)?;
        self.holdings.set(symbol.clone(), held - quantity);

        self.record(Transaction::Sell {
            symbol,
            quantity,
            price,
        });

        Ok(())
    }

    pub fn report_holdings(&self) -> BTreeMap<Symbol, Quantity> {
        self.holdings.to_map()
    }

    /// Cash balance plus every holding valued at the oracle's current price
    pub fn calculate_portfolio_value(&self) -> Result<Money, MoneyError> {
        let mut value = self.balance;

        for (symbol, quantity) in self.holdings.iter() {
            let price = self.oracle.get_share_price(symbol);
            value.add(&price.times(quantity)?)?;
        }

        Ok(value)
    }

    /// Portfolio value relative to everything ever deposited. Negative is a loss.
    pub fn calculate_profit_loss(&self) -> Result<Money, MoneyError> {
        let mut profit_loss = self.calculate_portfolio_value()?;
        profit_loss.sub(&self.initial_deposit)?;

        Ok(profit_loss)
    }

    pub fn report_profit_loss(&self) -> Result<Money, MoneyError> {
        self.calculate_profit_loss()
    }

    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.transactions.to_vec()
    }

    pub fn transactions(&self) -> &Ledger {
        &self.transactions
    }

    pub fn build_summary(&self) -> Result<AccountSummary, MoneyError> {
        let portfolio_value = self.calculate_portfolio_value()?;

        let mut profit_loss = portfolio_value;
        profit_loss.sub(&self.initial_deposit)?;

        Ok(AccountSummary {
            user_id: self.user_id.clone(),
            balance: self.balance,
            initial_deposit: self.initial_deposit,
            portfolio_value,
            profit_loss,
        })
    }

    pub fn build_holdings_report(&self) -> Result<Vec<HoldingReport>, MoneyError> {
        self.holdings
            .iter()
            .map(|(symbol, quantity)| -> Result<HoldingReport, MoneyError> {
                let price = self.oracle.get_share_price(symbol);

                Ok(HoldingReport {
                    symbol: symbol.clone(),
                    quantity,
                    price,
                    value: price.times(quantity)?,
                })
            })
            .collect()
    }

    fn record(&mut self, tx: Transaction) {
        log::debug!("Recording transaction for {}: {tx:?}", self.user_id);

        let ledger_idx = self.transactions.append(tx);

        log::debug!("Recorded at index: {ledger_idx}");
    }
}
