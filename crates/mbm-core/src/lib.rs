//! mbm-core: the axiomatic evaluator for measurement-based mathematics.
//!
//! Contains:
//! - value (the closed `Value` type + rendering + token parsing)
//! - outcome (result of one operation, including the non-value markers)
//! - ops (`Operator`, add / multiply / divide)
//! - numeric (float helpers for rendering and parsing)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod ops;
pub mod outcome;
pub mod value;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use ops::{Operator, add, divide, evaluate, multiply};
pub use outcome::{Outcome, UndefinedReason};
pub use value::Value;
