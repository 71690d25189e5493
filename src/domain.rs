// ===============================
// src/domain.rs
// ===============================
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side { Buy, Sell }

impl Side {
    /// "buy" in any case is Buy; every other string is Sell.
    pub fn from_user(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("buy") { Side::Buy } else { Side::Sell }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_wire()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Market,
    Limit,
    StopMarket,
    StopLimit,
}

impl OrderKind {
    pub const ALL: [OrderKind; 4] =
        [OrderKind::Market, OrderKind::Limit, OrderKind::StopMarket, OrderKind::StopLimit];

    /// Accepts the menu number or the friendly name, case-insensitive.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1" | "MARKET" => Ok(OrderKind::Market),
            "2" | "LIMIT" => Ok(OrderKind::Limit),
            "3" | "STOP_MARKET" => Ok(OrderKind::StopMarket),
            "4" | "STOP_LIMIT" | "STOP" => Ok(OrderKind::StopLimit),
            _ => Err(ValidationError::UnknownOrderKind(s.trim().to_string())),
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::StopMarket => "STOP_MARKET",
            // USDⓈ-M futures call a stop-limit order plain "STOP"
            OrderKind::StopLimit => "STOP",
        }
    }

    /// Name shown in menus.
    pub fn label(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::StopMarket => "STOP_MARKET",
            OrderKind::StopLimit => "STOP_LIMIT",
        }
    }

    pub fn needs_price(&self) -> bool {
        matches!(self, OrderKind::Limit | OrderKind::StopLimit)
    }

    pub fn needs_stop_price(&self) -> bool {
        matches!(self, OrderKind::StopMarket | OrderKind::StopLimit)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInForce {
    Gtc,
}

impl TimeInForce {
    pub fn as_wire(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
        }
    }
}

/// Uppercased, trimmed instrument id.
pub fn normalize_symbol(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

/// What the user asked for, before the per-kind field policy is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderIntent {
    pub symbol: String,
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
}

/// Flattened parameter set for the order-creation call.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
}

impl OrderRequest {
    /// Wire parameters in the order they go on the query string.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_wire().to_string()),
            ("type", self.kind.as_wire().to_string()),
            ("quantity", self.quantity.normalize().to_string()),
        ];
        if let Some(px) = self.price {
            out.push(("price", px.normalize().to_string()));
        }
        if let Some(sp) = self.stop_price {
            out.push(("stopPrice", sp.normalize().to_string()));
        }
        if let Some(tif) = self.time_in_force {
            out.push(("timeInForce", tif.as_wire().to_string()));
        }
        out
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.params().iter().map(|(k, v)| format!("{k}={v}")).collect();
        f.write_str(&parts.join(" "))
    }
}

/// Exchange acknowledgement for a new order. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    #[serde(default)]
    pub client_order_id: String,
    pub symbol: String,
    pub status: String,
    #[serde(default)]
    pub side: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub orig_qty: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub time_in_force: Option<String>,
    #[serde(default)]
    pub update_time: Option<i64>,
}
