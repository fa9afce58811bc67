// Product catalog: records, loading with fallback, metric coercion and the
// alternatives field parser.

pub mod alternatives;
pub mod loader;
pub mod metrics;
pub mod record;

pub use alternatives::{parse_alternatives, AlternativeItem, ParsedAlternatives};
pub use loader::{demo_products, load_products, read_products, CatalogError};
pub use metrics::{Band, Metric, MetricReading, ALL_METRICS};
pub use record::ProductRecord;
