// ===============================
// src/gateway.rs
// ===============================
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use crate::binance::client_order_id;
use crate::domain::{OrderKind, OrderRequest, OrderResponse};
use crate::error::RemoteError;

/// One venue call: create a futures order from an already built request.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    fn venue(&self) -> &str;

    async fn submit(&self, req: &OrderRequest) -> Result<OrderResponse, RemoteError>;
}

/// Local venue: ACK immediately, MARKET is FILLED, everything else rests as NEW.
#[derive(Debug)]
pub struct PaperGateway {
    next_id: AtomicI64,
    submitted: AtomicUsize,
}

impl Default for PaperGateway {
    fn default() -> Self {
        Self { next_id: AtomicI64::new(1), submitted: AtomicUsize::new(0) }
    }
}

impl PaperGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> usize {
        self.submitted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderGateway for PaperGateway {
    fn venue(&self) -> &str {
        "mock"
    }

    async fn submit(&self, req: &OrderRequest) -> Result<OrderResponse, RemoteError> {
        self.submitted.fetch_add(1, Ordering::SeqCst);
        let status = match req.kind {
            OrderKind::Market => "FILLED",
            _ => "NEW",
        };
        Ok(OrderResponse {
            order_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            client_order_id: client_order_id(),
            symbol: req.symbol.clone(),
            status: status.to_string(),
            side: req.side.as_wire().to_string(),
            kind: req.kind.as_wire().to_string(),
            orig_qty: Some(req.quantity),
            price: req.price,
            stop_price: req.stop_price,
            time_in_force: req.time_in_force.map(|t| t.as_wire().to_string()),
            update_time: Some(Utc::now().timestamp_millis()),
        })
    }
}
