// ===============================
// tests/place_order.rs
// ===============================
use futures_order_bot::{
    place, BinanceFuturesGateway, Credentials, OrderError, OrderIntent, OrderKind, RemoteError,
    Side, ValidationError,
};
use rust_decimal::Decimal;
use tokio_test::assert_ok;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn gateway(server: &MockServer) -> BinanceFuturesGateway {
    BinanceFuturesGateway::new(
        Url::parse(&server.uri()).unwrap(),
        Credentials { api_key: "k".into(), api_secret: "s".into() },
        5000,
    )
}

#[tokio::test]
async fn lowercase_limit_intent_reaches_exchange_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("side", "BUY"))
        .and(query_param("type", "LIMIT"))
        .and(query_param("price", "50000"))
        .and(query_param("timeInForce", "GTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 7,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "side": "BUY",
            "type": "LIMIT",
            "origQty": "0.01",
            "price": "50000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let intent = OrderIntent {
        symbol: "btcusdt".into(),
        side: Side::from_user("buy"),
        kind: OrderKind::Limit,
        quantity: d("0.01"),
        price: Some(d("50000")),
        stop_price: None,
    };
    let ack = assert_ok!(place(&gateway(&server), &intent).await);
    assert_eq!(ack.order_id, 7);

    let q = server.received_requests().await.unwrap()[0].url.query().unwrap().to_string();
    assert!(!q.contains("stopPrice"));
}

#[tokio::test]
async fn stop_market_without_stop_price_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let intent = OrderIntent {
        symbol: "ETHUSDT".into(),
        side: Side::Sell,
        kind: OrderKind::StopMarket,
        quantity: d("1"),
        price: None,
        stop_price: None,
    };
    let err = place(&gateway(&server), &intent).await.unwrap_err();
    assert!(matches!(
        err,
        OrderError::Validation(ValidationError::MissingStopPrice { kind: OrderKind::StopMarket })
    ));
}

#[tokio::test]
async fn market_order_carries_no_conditional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 8, "symbol": "SOLUSDT", "status": "FILLED"
        })))
        .mount(&server)
        .await;

    let intent = OrderIntent {
        symbol: "solusdt".into(),
        side: Side::from_user("SELL"),
        kind: OrderKind::Market,
        quantity: d("3"),
        price: Some(d("150")),
        stop_price: Some(d("140")),
    };
    assert_ok!(place(&gateway(&server), &intent).await);

    let q = server.received_requests().await.unwrap()[0].url.query().unwrap().to_string();
    assert!(q.starts_with("symbol=SOLUSDT&side=SELL&type=MARKET&quantity=3&newClientOrderId="));
    assert!(!q.contains("price"));
    assert!(!q.contains("timeInForce"));
}

#[tokio::test]
async fn exchange_rejection_comes_back_as_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -4164,
            "msg": "Order's notional must be no smaller than 100"
        })))
        .mount(&server)
        .await;

    let intent = OrderIntent {
        symbol: "BTCUSDT".into(),
        side: Side::Buy,
        kind: OrderKind::StopLimit,
        quantity: d("0.001"),
        price: Some(d("60000")),
        stop_price: Some(d("59900")),
    };
    match place(&gateway(&server), &intent).await {
        Err(OrderError::Remote(RemoteError::Api { code, msg })) => {
            assert_eq!(code, -4164);
            assert!(msg.contains("notional"));
        }
        other => panic!("expected remote api error, got {other:?}"),
    }
}
