// ===============================
// src/binance.rs
// ===============================
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::Deserialize;
use sha2::Sha256;

use crate::error::RemoteError;

pub const TESTNET_REST_URL: &str = "https://testnet.binancefuture.com";
pub const MAINNET_REST_URL: &str = "https://fapi.binance.com";
pub const ORDER_PATH: &str = "/fapi/v1/order";
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub fn timestamp_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

pub fn sign_query(secret: &str, query: &str) -> Result<String, RemoteError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| RemoteError::Signing(e.to_string()))?;
    mac.update(query.as_bytes());
    let sig = mac.finalize().into_bytes();
    Ok(hex::encode(sig))
}

/// `k=v&k=v` with URL-encoded values, in the given order.
pub fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Unique client order id (CL-<ms>-<rand>).
pub fn client_order_id() -> String {
    format!("CL-{}-{}", timestamp_ms(), rand::thread_rng().gen::<u32>())
}

/// Error body returned by the REST API on 4xx/5xx.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}
