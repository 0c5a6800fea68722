//! `enrich` command: normalize the barcode fields of a whole catalog.
//!
//! Wraps [`tiendadb_core::ensure_barcodes`] per record. Duplicate
//! detection lives here, as an explicit seen-set owned by the workflow,
//! so the codec and core stay stateless.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use tiendadb_core::{ensure_barcodes, AppConfig, FieldAction};

use crate::catalog;

pub(crate) fn run(
    config: &AppConfig,
    input: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let input = input.unwrap_or(&config.products_path);
    let output = output.unwrap_or(input);

    let mut records = catalog::read_products(input)?;
    tracing::info!(count = records.len(), input = %input.display(), "enriching products");

    let mut kept = 0usize;
    let mut corrected = 0usize;
    let mut derived = 0usize;
    let mut seen_ean13: HashSet<String> = HashSet::new();

    for record in &mut records {
        if record.currency.is_empty() {
            record.currency.clone_from(&config.default_currency);
        }

        let outcome = ensure_barcodes(record, &config.country_prefix)
            .with_context(|| format!("enriching sku {}", record.sku))?;
        for action in [outcome.upc, outcome.ean13] {
            match action {
                FieldAction::Kept => kept += 1,
                FieldAction::Corrected => corrected += 1,
                FieldAction::Derived => derived += 1,
            }
        }

        // Distinct SKUs can collide after digit extraction (e.g. "A-101"
        // and "B101"); flag them for manual review rather than failing.
        if let Some(ean13) = &record.ean13 {
            if !seen_ean13.insert(ean13.clone()) {
                tracing::warn!(sku = %record.sku, %ean13, "duplicate EAN-13 after enrichment");
            }
        }
    }

    catalog::write_json(output, &records)?;
    tracing::info!(kept, corrected, derived, output = %output.display(), "enrichment complete");
    println!(
        "Enriched {} records: {kept} kept, {corrected} corrected, {derived} derived",
        records.len()
    );
    Ok(())
}
