// Export our modules for use in the binary and tests
pub mod assistant;
pub mod catalog;
pub mod config;

pub use catalog::{Band, Metric, MetricReading, ProductRecord};
