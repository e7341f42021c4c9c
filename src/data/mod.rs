//! Data module - CSV loading and sample extraction

mod extractor;
mod loader;

pub use extractor::{extract_samples, MetricSamples};
pub use loader::load_stats_csv;
