use crate::models::Transaction;
use crate::{Money, MoneyError};

/// Represents a WORM (Write Once, Read Many) data structure for keeping track of transactions.
/// Insertion order is chronological order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    history: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, tx: Transaction) -> usize {
        let index = self.history.len();

        self.history.push(tx);

        index
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.history.iter()
    }

    pub fn to_vec(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    /// Sum of every deposited amount
    pub fn total_deposited(&self) -> Result<Money, MoneyError> {
        let mut total = Money::ZERO;

        for tx in self.history.iter() {
            if let Transaction::Deposit { amount } = tx {
                total.add(amount)?;
            }
        }

        Ok(total)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
