//! Freight quote client tests against a local mock of the shipping-rate API.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router, extract::State};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use shipdesk::config::{FreteApiConfig, PackageSpec};
use shipdesk::{FreightQuoter, ServiceResult, ShippingService, Simulacao};

#[derive(Default)]
struct Upstream {
    calls: AtomicUsize,
    last_request: Mutex<Option<(Value, Option<String>)>>,
    response_status: Mutex<StatusCode>,
    response_body: Mutex<Value>,
}

impl Upstream {
    fn new(status: StatusCode, body: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            response_status: Mutex::new(status),
            response_body: Mutex::new(body),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

async fn quote_endpoint(
    State(upstream): State<Arc<Upstream>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    upstream.calls.fetch_add(1, Ordering::SeqCst);
    let token = headers
        .get("token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *upstream.last_request.lock().unwrap() = Some((body, token));

    let status = *upstream.response_status.lock().unwrap();
    let response = upstream.response_body.lock().unwrap().clone();
    (status, Json(response))
}

async fn spawn_upstream(upstream: Arc<Upstream>) -> SocketAddr {
    let router = Router::new()
        .route("/shipping/quote", post(quote_endpoint))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock");
    });
    addr
}

fn service_for(addr: SocketAddr) -> ShippingService {
    let config = FreteApiConfig {
        base_url: format!("http://{}", addr),
        access_token: "test-token".to_string(),
        declared_value: 320.68,
        packages: vec![PackageSpec {
            height: 2,
            length: 33,
            width: 47,
            quantity: 1,
            weight: 1.18,
            sku: Some("IDW_54626".to_string()),
            category: None,
        }],
    };
    ShippingService::new(&config).expect("build shipping service")
}

fn simulacao(origem: &str, destino: &str) -> Simulacao {
    Simulacao {
        origem: origem.to_string(),
        destino: destino.to_string(),
    }
}

#[tokio::test]
async fn happy_path_parses_first_service() {
    let upstream = Upstream::new(
        StatusCode::OK,
        json!({
            "ShippingSevicesArray": [
                {"ServiceCode": "04014", "ShippingPrice": "100.50", "DeliveryTime": "5"},
                {"ServiceCode": "04510", "ShippingPrice": "999.99", "DeliveryTime": "1"}
            ]
        }),
    );
    let addr = spawn_upstream(upstream.clone()).await;
    let service = service_for(addr);

    let result = service
        .calcular_frete(&simulacao("01310100", "20040020"))
        .await;

    assert!(result.is_success());
    assert_eq!(result.status_code(), 200);
    let quote = result.value().expect("quote present");
    assert_eq!(quote.shipping_price, Decimal::from_str("100.50").unwrap());
    assert_eq!(quote.original_delivery_time, 5);
    assert_eq!(upstream.call_count(), 1);
}

#[tokio::test]
async fn request_carries_token_header_and_wire_fields() {
    let upstream = Upstream::new(
        StatusCode::OK,
        json!({"ShippingSevicesArray": [{"ShippingPrice": "10.00", "DeliveryTime": "3"}]}),
    );
    let addr = spawn_upstream(upstream.clone()).await;
    let service = service_for(addr);

    service
        .calcular_frete(&simulacao("01310100", "20040020"))
        .await;

    let guard = upstream.last_request.lock().unwrap();
    let (body, token) = guard.as_ref().expect("upstream was called");
    assert_eq!(token.as_deref(), Some("test-token"));
    assert_eq!(body["SellerCEP"], "01310100");
    assert_eq!(body["RecipientCEP"], "20040020");
    assert_eq!(body["RecipientCountry"], "BR");
    assert_eq!(body["ShipmentInvoiceValue"], 320.68);
    assert_eq!(body["ShippingServiceCode"], Value::Null);
    assert_eq!(body["ShippingItemArray"][0]["SKU"], "IDW_54626");
    assert_eq!(body["ShippingItemArray"][0]["Weight"], 1.18);
}

#[tokio::test]
async fn invalid_postal_code_fails_without_an_outbound_call() {
    let upstream = Upstream::new(StatusCode::OK, json!({}));
    let addr = spawn_upstream(upstream.clone()).await;
    let service = service_for(addr);

    let result = service.calcular_frete(&simulacao("123", "20040020")).await;

    assert_eq!(result.status_code(), 400);
    assert!(result.error_message().contains("invalid"));
    assert_eq!(upstream.call_count(), 0);
}

#[tokio::test]
async fn empty_service_array_is_a_500_failure() {
    let upstream = Upstream::new(StatusCode::OK, json!({"ShippingSevicesArray": []}));
    let addr = spawn_upstream(upstream.clone()).await;
    let service = service_for(addr);

    let result = service
        .calcular_frete(&simulacao("01310100", "20040020"))
        .await;

    assert_eq!(result.status_code(), 500);
    assert!(result.error_message().contains("No freight service found"));
}

#[tokio::test]
async fn missing_service_array_is_a_500_failure() {
    let upstream = Upstream::new(StatusCode::OK, json!({}));
    let addr = spawn_upstream(upstream.clone()).await;
    let service = service_for(addr);

    let result = service
        .calcular_frete(&simulacao("01310100", "20040020"))
        .await;

    assert_eq!(result.status_code(), 500);
    assert!(result.error_message().contains("No freight service found"));
}

#[tokio::test]
async fn upstream_error_status_passes_through() {
    let upstream = Upstream::new(StatusCode::BAD_REQUEST, json!({"Message": "bad request"}));
    let addr = spawn_upstream(upstream.clone()).await;
    let service = service_for(addr);

    let result = service
        .calcular_frete(&simulacao("01310100", "20040020"))
        .await;

    assert_eq!(result.status_code(), 400);
    assert!(result.error_message().contains("Failed to query"));
}

#[tokio::test]
async fn unreachable_upstream_is_a_500_failure() {
    // Bind a port, then free it so the connection is refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let service = service_for(addr);
    let result = service
        .calcular_frete(&simulacao("01310100", "20040020"))
        .await;

    assert_eq!(result.status_code(), 500);
    assert!(result.error_message().contains("Error calculating freight"));
}

#[tokio::test]
async fn unparsable_price_is_a_500_failure() {
    let upstream = Upstream::new(
        StatusCode::OK,
        json!({"ShippingSevicesArray": [{"ShippingPrice": "not-a-price", "DeliveryTime": "5"}]}),
    );
    let addr = spawn_upstream(upstream.clone()).await;
    let service = service_for(addr);

    let result = service
        .calcular_frete(&simulacao("01310100", "20040020"))
        .await;

    assert_eq!(result.status_code(), 500);
    assert!(!result.is_success());
    assert!(result.into_value().is_none());
}

#[tokio::test]
async fn failure_results_compare_by_value() {
    let left: ServiceResult<()> = ServiceResult::failure(500, "No freight service found");
    let right: ServiceResult<()> = ServiceResult::failure(500, "No freight service found");
    assert_eq!(left, right);
}
