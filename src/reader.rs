use tbk::input::PriceRecord;
use tbk::prices::PriceTable;
use tbk::Result;

use std::{fs::File, path::Path};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    return Ok(reader);
}

/// Loads a `symbol,price` CSV file. Unlike the command script, any bad row fails the whole load.
pub fn read_price_table(filepath: &Path) -> Result<PriceTable> {
    let mut rdr = build_csv_reader(filepath)?;

    let records = rdr
        .deserialize::<PriceRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    log::debug!("Read {} price records from {filepath:?}", records.len());

    let table = PriceTable::from_records(records)?;

    return Ok(table);
}
