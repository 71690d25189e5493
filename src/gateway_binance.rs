// ===============================
// src/gateway_binance.rs
// ===============================
use async_trait::async_trait;
use url::Url;

use crate::binance::{
    client_order_id, encode_query, sign_query, timestamp_ms, ApiErrorBody, API_KEY_HEADER, ORDER_PATH,
};
use crate::domain::{OrderRequest, OrderResponse};
use crate::error::RemoteError;
use crate::gateway::OrderGateway;

/// API key pair. The secret never reaches Debug output.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

/// Binance USDⓈ-M Futures gateway (signed REST).
/// One `POST /fapi/v1/order` per submit, no retry.
#[derive(Debug)]
pub struct BinanceFuturesGateway {
    http: reqwest::Client,
    rest_base: Url,
    creds: Credentials,
    recv_window: u64,
}

impl BinanceFuturesGateway {
    pub fn new(rest_base: Url, creds: Credentials, recv_window: u64) -> Self {
        Self { http: reqwest::Client::new(), rest_base, creds, recv_window }
    }

    fn order_url(&self, query: &str, sig: &str) -> String {
        format!(
            "{}{}?{}&signature={}",
            self.rest_base.as_str().trim_end_matches('/'),
            ORDER_PATH,
            query,
            sig
        )
    }
}

#[async_trait]
impl OrderGateway for BinanceFuturesGateway {
    fn venue(&self) -> &str {
        self.rest_base.host_str().unwrap_or("binance")
    }

    async fn submit(&self, req: &OrderRequest) -> Result<OrderResponse, RemoteError> {
        let mut params = req.params();
        params.push(("newClientOrderId", client_order_id()));
        params.push(("recvWindow", self.recv_window.to_string()));
        params.push(("timestamp", timestamp_ms().to_string()));

        let query = encode_query(&params);
        let sig = sign_query(&self.creds.api_secret, &query)?;
        let url = self.order_url(&query, &sig);

        let rsp = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.creds.api_key)
            .send()
            .await?;

        let status = rsp.status();
        let body = rsp.text().await?;

        // body mentah masuk log apa adanya
        if status.is_success() {
            tracing::info!(%status, %body, "order response");
            return Ok(serde_json::from_str::<OrderResponse>(&body)?);
        }
        tracing::error!(%status, %body, "order response");
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(e) => Err(RemoteError::Api { code: e.code, msg: e.msg }),
            Err(_) => Err(RemoteError::Http { status, body }),
        }
    }
}
