// Insurance Handbook ETL - Core Library
// Extracts and standardizes handbook tables into a long-form facts relation

pub mod combine;
pub mod config;
pub mod model;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod sheet;
pub mod standardize;
pub mod tables;
pub mod validate;

// Re-export commonly used types
pub use combine::{combine, CombineResult};
pub use model::{Fact, FundDetail, SolvencyDetail, StateDetail, Value};
pub use pipeline::{run, run_and_write, EtlOutput};
pub use sheet::{Sheet, Workbook};
pub use standardize::{Crosswalk, NameStandardizer};
pub use validate::{validate_facts, QaEntry, QaStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
