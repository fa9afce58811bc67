use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::record::ProductRecord;

/// Why the external data source could not be used. Every variant is
/// recoverable: the caller substitutes the demo catalog and shows a banner.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open product data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed product data: {0}")]
    Malformed(#[from] csv::Error),
    #[error("product data file contained no rows")]
    Empty,
}

/// Load the product catalog from a header-delimited CSV file.
pub fn load_products(path: &Path) -> Result<Vec<ProductRecord>, CatalogError> {
    let file = File::open(path)?;
    read_products(file)
}

/// Parse catalog rows from any reader. Header-driven, whitespace-trimmed,
/// ragged rows tolerated via field defaults. A result with zero rows is an
/// error so the caller falls back just like on a missing file.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<ProductRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }

    if rows.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(rows)
}

/// Built-in fallback catalog, used whenever the external source cannot be
/// loaded or is empty. Content is fixed so the rest of the UI stays
/// exercisable without a data file.
pub fn demo_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            name: "Demo Product 1".to_string(),
            carbon: "15.2".to_string(),
            water: "120".to_string(),
            waste: "45".to_string(),
            alternatives: "Eco Product 1;Green Alternative 1".to_string(),
        },
        ProductRecord {
            name: "Demo Product 2".to_string(),
            carbon: "8.7".to_string(),
            water: "85".to_string(),
            waste: "32".to_string(),
            alternatives: "Eco Product 2;Sustainable Option 2".to_string(),
        },
    ]
}
