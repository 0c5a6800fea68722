//! `report` command: validate every record's barcode fields and write a
//! per-record results file alongside a printed summary.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use tiendadb_core::AppConfig;

use crate::catalog;

/// One row of the results file. Borrowed views over the loaded records;
/// nothing is copied just to serialize.
#[derive(Debug, Serialize)]
struct RecordReport<'a> {
    sku: &'a str,
    name: &'a str,
    upc: Option<&'a str>,
    upc_valid: bool,
    ean13: Option<&'a str>,
    ean13_valid: bool,
}

pub(crate) fn run(config: &AppConfig, input: Option<&Path>, output: &Path) -> anyhow::Result<()> {
    let input = input.unwrap_or(&config.products_path);
    let records = catalog::read_products(input)?;

    let mut valid_upc = 0usize;
    let mut valid_ean13 = 0usize;
    let mut duplicate_ean13 = 0usize;
    let mut seen_ean13: HashSet<&str> = HashSet::new();

    let results: Vec<RecordReport<'_>> = records
        .iter()
        .map(|record| {
            let upc_valid = record.has_valid_upc();
            let ean13_valid = record.has_valid_ean13();
            if upc_valid {
                valid_upc += 1;
            }
            if ean13_valid {
                valid_ean13 += 1;
            }
            if let Some(code) = record.ean13.as_deref() {
                if !seen_ean13.insert(code) {
                    duplicate_ean13 += 1;
                }
            }
            RecordReport {
                sku: &record.sku,
                name: &record.name,
                upc: record.upc.as_deref(),
                upc_valid,
                ean13: record.ean13.as_deref(),
                ean13_valid,
            }
        })
        .collect();

    catalog::write_json(output, &results)?;

    let total = records.len();
    println!("Validation summary for {}", input.display());
    println!("  products:       {total}");
    println!(
        "  valid UPC-A:    {valid_upc} ({:.1}%)",
        percent(valid_upc, total)
    );
    println!(
        "  invalid UPC-A:  {} ({:.1}%)",
        total - valid_upc,
        percent(total - valid_upc, total)
    );
    println!(
        "  valid EAN-13:   {valid_ean13} ({:.1}%)",
        percent(valid_ean13, total)
    );
    println!(
        "  invalid EAN-13: {} ({:.1}%)",
        total - valid_ean13,
        percent(total - valid_ean13, total)
    );
    println!("  duplicate EAN-13 codes: {duplicate_ean13}");
    println!("Results written to {}", output.display());
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
