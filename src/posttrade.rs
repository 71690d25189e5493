// ===============================
// src/posttrade.rs
// ===============================
use tracing::{error, info};

use crate::builder::build;
use crate::config::Presentation;
use crate::domain::{OrderIntent, OrderRequest, OrderResponse};
use crate::error::{OrderError, RemoteError};
use crate::gateway::OrderGateway;

pub type OrderResult = Result<OrderResponse, RemoteError>;

/// Hand the request to the venue unchanged and log both directions.
pub async fn submit(gateway: &dyn OrderGateway, req: &OrderRequest) -> OrderResult {
    info!(venue = %gateway.venue(), params = %req, "placing order");
    let res = gateway.submit(req).await;
    match &res {
        Ok(ack) => info!(order_id = ack.order_id, status = %ack.status, "order accepted"),
        Err(e) => error!(venue = %gateway.venue(), error = ?e, "order failed: {e}"),
    }
    res
}

/// Build, then submit. Validation errors return before the gateway is touched.
pub async fn place(gateway: &dyn OrderGateway, intent: &OrderIntent) -> Result<OrderResponse, OrderError> {
    let req = build(intent)?;
    Ok(submit(gateway, &req).await?)
}

/// Multi-line summary shown before the confirmation prompt.
pub fn render_request(req: &OrderRequest, style: &Presentation) -> String {
    let mut out = vec![style.heading.apply_to("Order summary").to_string()];
    for (k, v) in req.params() {
        out.push(format!("  {:<12} {}", style.dim.apply_to(k), v));
    }
    out.join("\n")
}

pub fn render_success(ack: &OrderResponse, style: &Presentation) -> String {
    let mut line = format!(
        "Order placed successfully: orderId={} status={} {} {} {}",
        ack.order_id, ack.status, ack.side, ack.kind, ack.symbol
    );
    if let Some(q) = ack.orig_qty {
        line.push_str(&format!(" qty={}", q.normalize()));
    }
    if let Some(px) = ack.price.filter(|p| !p.is_zero()) {
        line.push_str(&format!(" price={}", px.normalize()));
    }
    if let Some(sp) = ack.stop_price.filter(|p| !p.is_zero()) {
        line.push_str(&format!(" stopPrice={}", sp.normalize()));
    }
    if !ack.client_order_id.is_empty() {
        line.push_str(&format!(" clientOrderId={}", ack.client_order_id));
    }
    style.ok.apply_to(line).to_string()
}

pub fn render_failure(err: &OrderError, log_file: &str, style: &Presentation) -> String {
    let line = match err {
        OrderError::Validation(e) => format!("Invalid order: {e}"),
        OrderError::Remote(e) => {
            // pesan Binance biasanya sudah diakhiri titik
            let reason = e.to_string();
            format!("Order failed: {}. See '{log_file}' for details.", reason.trim_end_matches('.'))
        }
    };
    style.err.apply_to(line).to_string()
}
