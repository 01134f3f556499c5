use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid value token: '{input}' (expected a real number, 0m, 0bm or 1t)")]
    InvalidValue { input: String },

    #[error("Unknown operation: '{input}' (expected +, × or /)")]
    UnknownOperator { input: String },
}
