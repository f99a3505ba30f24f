//! Formats ledger results as the text shown to the user

use tbk::ids::{Symbol, UserId};
use tbk::models::{AccountSummary, HoldingReport, Quantity, Transaction};
use tbk::Money;

use std::fmt::Display;

pub fn account_created(user_id: &UserId) -> String {
    format!("Account created for {user_id}")
}

pub fn deposited(amount: Money, balance: Money) -> String {
    format!("Successfully deposited ${amount:.2}. New balance: ${balance:.2}")
}

pub fn withdrew(amount: Money, balance: Money) -> String {
    format!("Successfully withdrew ${amount:.2}. New balance: ${balance:.2}")
}

pub fn bought(symbol: &Symbol, quantity: Quantity, price: Money, balance: Money) -> String {
    format!(
        "Successfully bought {quantity} shares of {symbol} at ${price:.2} each. New balance: ${balance:.2}"
    )
}

pub fn sold(symbol: &Symbol, quantity: Quantity, price: Money, balance: Money) -> String {
    format!(
        "Successfully sold {quantity} shares of {symbol} at ${price:.2} each. New balance: ${balance:.2}"
    )
}

/// Zero is how the oracle reports a symbol it doesn't know
pub fn share_price(symbol: &Symbol, price: Money) -> String {
    if price.is_zero() {
        return format!("Symbol {symbol} not found.");
    }

    format!("Current price of {symbol} is ${price:.2}")
}

pub fn holdings(report: &[HoldingReport]) -> String {
    if report.is_empty() {
        return "You currently have no share holdings.".to_string();
    }

    let mut lines = vec!["Current Holdings:".to_string()];

    for holding in report {
        lines.push(format!(
            "- {}: {} shares at ${:.2} each, total value: ${:.2}",
            holding.symbol, holding.quantity, holding.price, holding.value
        ));
    }

    lines.join("\n")
}

pub fn summary(summary: &AccountSummary) -> String {
    let outcome = if summary.profit_loss.0 >= 0 { "profit" } else { "loss" };

    [
        format!("Account Summary for {}:", summary.user_id),
        format!("Cash Balance: ${:.2}", summary.balance),
        format!("Initial Deposit: ${:.2}", summary.initial_deposit),
        format!("Portfolio Value: ${:.2}", summary.portfolio_value),
        format!("Overall {outcome}: ${:.2}", summary.profit_loss.abs()),
    ]
    .join("\n")
}

pub fn transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> String {
    let lines: Vec<String> = transactions
        .into_iter()
        .enumerate()
        .map(|(idx, tx)| format!("{}. {tx}", idx + 1))
        .collect();

    if lines.is_empty() {
        return "No transactions recorded yet.".to_string();
    }

    format!("Transaction History:\n{}", lines.join("\n"))
}

pub fn error(e: &dyn Display) -> String {
    format!("Error: {e}")
}
