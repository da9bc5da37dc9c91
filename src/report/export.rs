use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::TransactionRecord;

const HEADER: [&str; 5] = ["date", "type", "amount", "description", "category"];

/// Write categorized records as CSV. Returns the number of rows written.
pub(crate) fn write_csv<W: Write>(records: &[TransactionRecord], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for rec in records {
        wtr.write_record([
            rec.date_string().as_str(),
            rec.kind.as_str(),
            rec.amount.to_string().as_str(),
            rec.description.as_str(),
            rec.category.map(|c| c.name()).unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    Ok(records.len())
}

pub(crate) fn export_to_csv(records: &[TransactionRecord], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(records, std::io::BufWriter::new(file))
}
