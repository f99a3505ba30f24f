use tbk::{Ledger, Result};

use std::{fs, path::Path};

use csv::Writer;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Writes the transaction log as CSV, numbering rows from 1
pub fn export_transactions(filepath: &Path, ledger: &Ledger) -> Result {
    let mut wtr = build_csv_writer();

    log::debug!("Serializing {} transactions...", ledger.len());
    for (idx, tx) in ledger.iter().enumerate() {
        wtr.serialize(tx.to_report(idx + 1))?;
    }

    let output = write_to_string(wtr)?;

    log::debug!("Writing export to {filepath:?}");
    fs::write(filepath, output)?;

    return Ok(());
}
