//! Shared calculator service layer.
//!
//! Frontends pick operands from a catalog and hand them to the engine
//! through this crate; it owns menu configuration, operand resolution and
//! result presentation.

pub mod calc_service;
pub mod catalog;
pub mod config;
pub mod error;
pub mod table;

// Re-export key types for convenience
pub use calc_service::{Calculation, calculate, calculate_values};
pub use catalog::{Catalog, CatalogEntry};
pub use config::{CONFIG_VERSION, CatalogConfig, OperandDef, load_catalog, load_config};
pub use error::{AppError, AppResult};
pub use table::{OperationTable, OutcomeCounts, operation_table};
