//! 基础设施层

pub mod repository;
pub mod sample_cache;
pub mod tables;

pub use repository::CsvDatasetRepository;
pub use sample_cache::SampleDatasets;
