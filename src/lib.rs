// ===============================
// src/lib.rs
// ===============================
pub mod binance;          // signer/timestamps/wire helpers for Binance
pub mod builder;          // OrderIntent -> OrderRequest (pre-submit checks)
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;          // OrderGateway trait + paper venue
pub mod gateway_binance;  // real Binance USDⓈ-M Futures (signed REST)
pub mod logging;
pub mod posttrade;
pub mod prompt;

pub use builder::build;
pub use domain::{OrderIntent, OrderKind, OrderRequest, OrderResponse, Side, TimeInForce};
pub use error::{OrderError, RemoteError, ValidationError};
pub use gateway::{OrderGateway, PaperGateway};
pub use gateway_binance::{BinanceFuturesGateway, Credentials};
pub use posttrade::{place, OrderResult};
