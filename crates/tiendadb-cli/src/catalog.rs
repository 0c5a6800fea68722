//! Products-file I/O shared by the batch commands.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use tiendadb_core::ProductRecord;

pub(crate) fn read_products(path: &Path) -> anyhow::Result<Vec<ProductRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading products file {}", path.display()))?;
    let records: Vec<ProductRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing products file {}", path.display()))?;
    Ok(records)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(value).context("serializing results")?;
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}
