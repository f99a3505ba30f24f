mod args;
mod config;
mod presenter;
mod reader;
mod writer;

use config::AppConfig;

use tbk::input::{Command, InputCommand};
use tbk::models::Account;
use tbk::prices::PriceOracle;
use tbk::Result;

use std::path::Path;

fn main() -> Result {
    config::configure_logger()?;

    log::debug!("Logger configured. Parsing arguments...");

    let input_args = args::parse_input_args()?;
    log::debug!("Found input args: {input_args:?}");

    let app_config = AppConfig::from_args(&input_args)?;

    let mut account = app_config.open_account();

    process_commands(&mut account, &app_config, &input_args.commands_path)?;

    if let Some(export_path) = &app_config.export_path {
        writer::export_transactions(export_path, account.transactions())?;
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the command script and apply each command to the account, printing every result
fn process_commands(account: &mut Account, app_config: &AppConfig, commands_path: &Path) -> Result {
    let mut rdr = reader::build_csv_reader(commands_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputCommand>() {
        log::debug!("Parsing record into InputCommand: {record:?}");
        let input_command = match record {
            Ok(input_command) => input_command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_command into Command: {input_command:?}");
        let command = match input_command.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let output = execute(account, app_config, command);

        println!("{output}");
    }

    Ok(())
}

fn execute(account: &mut Account, app_config: &AppConfig, command: Command) -> String {
    log::debug!("Executing command: {command:?}");

    match command {
        Command::Reset => {
            *account = app_config.open_account();
            presenter::account_created(account.user_id())
        }
        Command::Deposit { amount } => match account.deposit(amount) {
            Ok(()) => presenter::deposited(amount, account.balance()),
            Err(e) => presenter::error(&e),
        },
        Command::Withdraw { amount } => match account.withdraw(amount) {
            Ok(()) => presenter::withdrew(amount, account.balance()),
            Err(e) => presenter::error(&e),
        },
        Command::Buy { symbol, quantity } => {
            let price = account.oracle().get_share_price(&symbol);

            match account.buy_shares(symbol.clone(), quantity) {
                Ok(()) => presenter::bought(&symbol, quantity, price, account.balance()),
                Err(e) => presenter::error(&e),
            }
        }
        Command::Sell { symbol, quantity } => {
            let price = account.oracle().get_share_price(&symbol);

            match account.sell_shares(symbol.clone(), quantity) {
                Ok(()) => presenter::sold(&symbol, quantity, price, account.balance()),
                Err(e) => presenter::error(&e),
            }
        }
        Command::Price { symbol } => {
            presenter::share_price(&symbol, account.oracle().get_share_price(&symbol))
        }
        Command::Holdings => match account.build_holdings_report() {
            Ok(report) => presenter::holdings(&report),
            Err(e) => presenter::error(&e),
        },
        Command::Summary => match account.build_summary() {
            Ok(summary) => presenter::summary(&summary),
            Err(e) => presenter::error(&e),
        },
        Command::Transactions => presenter::transactions(account.transactions().iter()),
    }
}
