// ===============================
// src/error.rs
// ===============================
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::OrderKind;

/// Rejected locally, before anything is sent to the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Symbol is required")]
    MissingSymbol,
    #[error("{kind} order requires a price")]
    MissingPrice { kind: OrderKind },
    #[error("{kind} order requires a stop price")]
    MissingStopPrice { kind: OrderKind },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("{field} is not a number: {input}")]
    NotNumeric { field: &'static str, input: String },
    #[error("Unknown order type: {0}")]
    UnknownOrderKind(String),
}

/// The exchange refused the order or could not be reached.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Binance API error (code {code}): {msg}")]
    Api { code: i64, msg: String },
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Signing failed: {0}")]
    Signing(String),
}

/// Outcome tag for a single place-order attempt.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl OrderError {
    /// Validation failures are fixed by asking the user again.
    pub fn is_validation(&self) -> bool {
        matches!(self, OrderError::Validation(_))
    }
}
