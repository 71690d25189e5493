// ===============================
// src/builder.rs
// ===============================
use rust_decimal::Decimal;

use crate::domain::{normalize_symbol, OrderIntent, OrderRequest, TimeInForce};
use crate::error::ValidationError;

/// Pre-submit checks -> if they pass, flatten the OrderIntent into an OrderRequest.
///
/// | kind        | price | stopPrice | timeInForce |
/// |-------------|-------|-----------|-------------|
/// | Market      | -     | -         | -           |
/// | Limit       | req   | -         | GTC         |
/// | StopMarket  | -     | req       | -           |
/// | StopLimit   | req   | req       | GTC         |
///
/// Fields the kind does not use are dropped.
pub fn build(intent: &OrderIntent) -> Result<OrderRequest, ValidationError> {
    // 1) Symbol
    let symbol = normalize_symbol(&intent.symbol);
    if symbol.is_empty() {
        return Err(ValidationError::MissingSymbol);
    }

    // 2) Quantity
    positive("quantity", intent.quantity)?;

    // 3) Conditional fields per kind
    let kind = intent.kind;
    let price = if kind.needs_price() {
        let px = intent.price.ok_or(ValidationError::MissingPrice { kind })?;
        Some(positive("price", px)?)
    } else {
        None
    };
    let stop_price = if kind.needs_stop_price() {
        let sp = intent.stop_price.ok_or(ValidationError::MissingStopPrice { kind })?;
        Some(positive("stopPrice", sp)?)
    } else {
        None
    };

    // 4) GTC ikut harga
    let time_in_force = price.map(|_| TimeInForce::Gtc);

    Ok(OrderRequest {
        symbol,
        side: intent.side,
        kind,
        quantity: intent.quantity,
        price,
        stop_price,
        time_in_force,
    })
}

fn positive(field: &'static str, v: Decimal) -> Result<Decimal, ValidationError> {
    if v > Decimal::ZERO {
        Ok(v)
    } else {
        Err(ValidationError::NotPositive { field })
    }
}

/// Parse a user-typed decimal for `field`.
pub fn parse_decimal(field: &'static str, input: &str) -> Result<Decimal, ValidationError> {
    let raw = input.trim();
    let v: Decimal = raw.parse().map_err(|_| ValidationError::NotNumeric {
        field,
        input: raw.to_string(),
    })?;
    positive(field, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderKind, Side};
    use rstest::rstest;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn intent(kind: OrderKind, price: Option<&str>, stop: Option<&str>) -> OrderIntent {
        OrderIntent {
            symbol: "btcusdt".into(),
            side: Side::from_user("buy"),
            kind,
            quantity: d("0.01"),
            price: price.map(d),
            stop_price: stop.map(d),
        }
    }

    #[test]
    fn limit_scenario_from_lowercase_input() {
        let req = build(&intent(OrderKind::Limit, Some("50000"), None)).unwrap();
        assert_eq!(
            req,
            OrderRequest {
                symbol: "BTCUSDT".into(),
                side: Side::Buy,
                kind: OrderKind::Limit,
                quantity: d("0.01"),
                price: Some(d("50000")),
                stop_price: None,
                time_in_force: Some(TimeInForce::Gtc),
            }
        );
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("1"), None)]
    #[case(None, Some("2"))]
    #[case(Some("1"), Some("2"))]
    fn market_never_carries_conditional_fields(#[case] price: Option<&str>, #[case] stop: Option<&str>) {
        let req = build(&intent(OrderKind::Market, price, stop)).unwrap();
        assert_eq!(req.price, None);
        assert_eq!(req.stop_price, None);
        assert_eq!(req.time_in_force, None);
    }

    #[test]
    fn limit_drops_stop_price_and_needs_price() {
        let req = build(&intent(OrderKind::Limit, Some("100"), Some("90"))).unwrap();
        assert_eq!(req.stop_price, None);

        let err = build(&intent(OrderKind::Limit, None, None)).unwrap_err();
        assert_eq!(err, ValidationError::MissingPrice { kind: OrderKind::Limit });
    }

    #[test]
    fn stop_market_needs_stop_price_only() {
        let req = build(&intent(OrderKind::StopMarket, Some("100"), Some("95"))).unwrap();
        assert_eq!(req.price, None);
        assert_eq!(req.stop_price, Some(d("95")));
        assert_eq!(req.time_in_force, None);

        let err = build(&intent(OrderKind::StopMarket, None, None)).unwrap_err();
        assert_eq!(err, ValidationError::MissingStopPrice { kind: OrderKind::StopMarket });
    }

    #[test]
    fn stop_limit_carries_everything() {
        let req = build(&intent(OrderKind::StopLimit, Some("101"), Some("100"))).unwrap();
        assert_eq!(req.price, Some(d("101")));
        assert_eq!(req.stop_price, Some(d("100")));
        assert_eq!(req.time_in_force, Some(TimeInForce::Gtc));

        assert_eq!(
            build(&intent(OrderKind::StopLimit, None, Some("100"))).unwrap_err(),
            ValidationError::MissingPrice { kind: OrderKind::StopLimit }
        );
        assert_eq!(
            build(&intent(OrderKind::StopLimit, Some("101"), None)).unwrap_err(),
            ValidationError::MissingStopPrice { kind: OrderKind::StopLimit }
        );
    }

    #[test]
    fn time_in_force_follows_price_for_every_kind() {
        for kind in OrderKind::ALL {
            let req = build(&intent(kind, Some("10"), Some("9"))).unwrap();
            assert_eq!(req.price.is_some(), kind.needs_price());
            assert_eq!(req.stop_price.is_some(), kind.needs_stop_price());
            assert_eq!(req.time_in_force.is_some(), req.price.is_some());
        }
    }

    #[rstest]
    #[case("BUY", Side::Buy)]
    #[case("buy", Side::Buy)]
    #[case("Buy", Side::Buy)]
    #[case(" bUy ", Side::Buy)]
    #[case("sell", Side::Sell)]
    #[case("SELL", Side::Sell)]
    #[case("long", Side::Sell)]
    #[case("", Side::Sell)]
    fn side_vocabulary(#[case] input: &str, #[case] expected: Side) {
        assert_eq!(Side::from_user(input), expected);
    }

    #[rstest]
    #[case("btcusdt")]
    #[case("  EthUsdt ")]
    #[case("SOLUSDT")]
    fn symbol_normalization_is_idempotent(#[case] raw: &str) {
        let once = normalize_symbol(raw);
        assert_eq!(normalize_symbol(&once), once);
        assert_eq!(once, raw.trim().to_uppercase());
    }

    #[test]
    fn rejects_blank_symbol_and_non_positive_numbers() {
        let mut i = intent(OrderKind::Market, None, None);
        i.symbol = "   ".into();
        assert_eq!(build(&i).unwrap_err(), ValidationError::MissingSymbol);

        let mut i = intent(OrderKind::Market, None, None);
        i.quantity = Decimal::ZERO;
        assert_eq!(build(&i).unwrap_err(), ValidationError::NotPositive { field: "quantity" });

        assert_eq!(
            build(&intent(OrderKind::Limit, Some("-5"), None)).unwrap_err(),
            ValidationError::NotPositive { field: "price" }
        );
    }

    #[test]
    fn parse_decimal_reports_field() {
        assert_eq!(parse_decimal("quantity", " 0.5 ").unwrap(), d("0.5"));
        assert_eq!(
            parse_decimal("price", "abc").unwrap_err(),
            ValidationError::NotNumeric { field: "price", input: "abc".into() }
        );
        assert_eq!(
            parse_decimal("price", "0").unwrap_err(),
            ValidationError::NotPositive { field: "price" }
        );
    }
}
