//! HTTP API 测试

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
};
use http::{Request, StatusCode, header};
use ops_dashboard::api::dashboard_routes;
use ops_dashboard::application::DashboardHandler;
use ops_dashboard::infrastructure::{CsvDatasetRepository, SampleDatasets};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "opsdash-test-boundary";

fn app_with_limit(max_upload_bytes: usize) -> Router {
    let sample_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../sample_data");
    let repo = Arc::new(CsvDatasetRepository::new(SampleDatasets::new(sample_dir)));
    let handler = Arc::new(DashboardHandler::new(repo));
    dashboard_routes(handler, max_upload_bytes)
}

fn app() -> Router {
    app_with_limit(10 * 1024 * 1024)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, content_type, json)
}

/// 手工拼装 multipart 请求体，`files` 为 (字段名, 内容)
fn multipart(files: &[(&str, &str)], fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, content) in files {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
             filename=\"{name}.csv\"\r\nContent-Type: text/csv\r\n\r\n{content}\r\n"
        ));
    }
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/api/dashboard")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

const PRODUCTION_CSV: &str = "date,sku,produced_qty,orders\n\
2024-05-01,A,100,80\n\
2024-05-02,B,50,40\n";

const LOGISTICS_CSV: &str = "date,route,delivered_qty,on_time_rate,transport_cost\n\
2024-05-01,R1,60,0.9,120\n\
2024-05-02,R2,40,0.8,80\n";

const INVENTORY_CSV: &str = "week_ending,sku,plant_inventory,warehouse_inventory\n\
2024-05-05,A,300,100\n\
2024-05-05,B,200,50\n";

#[tokio::test]
async fn test_index_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/dashboard"));
}

#[tokio::test]
async fn test_sample_date_range_is_intersection() {
    let (status, _, json) = get(app(), "/api/date-range").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["start"], "2024-01-03");
    assert_eq!(json["end"], "2024-03-31");
}

#[tokio::test]
async fn test_sample_dashboard_defaults_to_full_range() {
    let (status, _, json) = get(app(), "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data_source"], "sample");
    assert!(json["notice"].as_str().unwrap().contains("sample"));
    assert_eq!(json["selected_range"], json["available_range"]);

    // 4 个 SKU: 4 个工厂节点 + 4 个仓库节点 + Customers
    assert_eq!(json["flow"]["labels"].as_array().unwrap().len(), 9);
    assert_eq!(json["flow"]["values"].as_array().unwrap().len(), 8);
    assert_eq!(json["production_by_sku"].as_array().unwrap().len(), 4);
    assert_eq!(json["deliveries_by_route"][0]["key"], "East");
}

#[tokio::test]
async fn test_sample_dashboard_single_day() {
    let (status, _, json) = get(app(), "/api/dashboard?start=2024-01-03&end=2024-01-03").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kpis"]["total_produced"], 1059);
    assert_eq!(json["kpis"]["total_delivered"], 1051);
    assert_eq!(json["kpis"]["demand"], 940);
    assert_eq!(json["kpi_display"]["produced"], "1,059");
    assert_eq!(json["imbalance"]["state"], "balanced");
    assert_eq!(json["imbalance"]["severity"], "success");
    assert_eq!(json["production_trend"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_window_is_clamped_to_available_range() {
    let (status, _, json) = get(app(), "/api/dashboard?start=2023-12-01&end=2024-12-31").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selected_range"]["start"], "2024-01-03");
    assert_eq!(json["selected_range"]["end"], "2024-03-31");
}

#[tokio::test]
async fn test_inverted_window_is_bad_request() {
    let (status, content_type, json) =
        get(app(), "/api/dashboard?start=2024-03-01&end=2024-02-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_malformed_query_date_is_bad_request() {
    let (status, _, _) = get(app(), "/api/dashboard?start=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_complete_upload_is_rendered() {
    let request = multipart(
        &[
            ("production", PRODUCTION_CSV),
            ("logistics", LOGISTICS_CSV),
            ("inventory", INVENTORY_CSV),
        ],
        &[],
    );
    let (status, _, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data_source"], "uploaded");
    assert!(json.get("notice").is_none());

    assert_eq!(json["kpis"]["total_produced"], 150);
    assert_eq!(json["kpis"]["total_delivered"], 100);
    assert_eq!(json["kpis"]["demand"], 120);
    assert_eq!(json["kpi_display"]["on_time"], "85.0%");
    assert_eq!(json["kpi_display"]["cost_per_unit"], "2.00");
    assert_eq!(json["imbalance"]["state"], "overproduction");
    assert_eq!(json["imbalance"]["severity"], "warning");

    let labels: Vec<&str> = json["flow"]["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Plant:A", "Warehouse:A", "Plant:B", "Warehouse:B", "Customers"]
    );
    assert_eq!(json["flow"]["values"], serde_json::json!([300, 200, 80, 40]));
}

#[tokio::test]
async fn test_upload_with_window_fields() {
    let request = multipart(
        &[
            ("production", PRODUCTION_CSV),
            ("logistics", LOGISTICS_CSV),
            ("inventory", INVENTORY_CSV),
        ],
        &[("start", "2024-05-02"), ("end", "")],
    );
    let (status, _, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selected_range"]["start"], "2024-05-02");
    assert_eq!(json["kpis"]["total_produced"], 50);
    // 订单只在窗口内累计，SKU A 退回到仓库库存 80%
    assert_eq!(json["flow"]["values"], serde_json::json!([300, 200, 80, 40]));
}

#[tokio::test]
async fn test_partial_upload_falls_back_to_samples() {
    let request = multipart(&[("production", PRODUCTION_CSV)], &[]);
    let (status, _, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data_source"], "sample");
    assert_eq!(json["available_range"]["start"], "2024-01-03");
}

#[tokio::test]
async fn test_upload_without_overlap_is_unprocessable() {
    let logistics = "date,route,delivered_qty,on_time_rate,transport_cost\n\
                     2024-06-01,R1,60,0.9,120\n";
    let request = multipart(
        &[
            ("production", PRODUCTION_CSV),
            ("logistics", logistics),
            ("inventory", INVENTORY_CSV),
        ],
        &[],
    );
    let (status, _, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["detail"].as_str().unwrap().contains("do not overlap"));
}

#[tokio::test]
async fn test_upload_with_bad_date_is_unprocessable() {
    let production = "date,sku,produced_qty,orders\n\
                      2024-05-01,A,100,80\n\
                      someday,B,50,40\n";
    let request = multipart(
        &[
            ("production", production),
            ("logistics", LOGISTICS_CSV),
            ("inventory", INVENTORY_CSV),
        ],
        &[],
    );
    let (status, content_type, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    let detail = json["detail"].as_str().unwrap();
    assert!(detail.contains("line 3"));
    assert!(detail.contains("someday"));
}

#[tokio::test]
async fn test_upload_missing_column_is_unprocessable() {
    let inventory = "week_ending,sku,plant_inventory\n2024-05-05,A,300\n";
    let request = multipart(
        &[
            ("production", PRODUCTION_CSV),
            ("logistics", LOGISTICS_CSV),
            ("inventory", inventory),
        ],
        &[],
    );
    let (status, _, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        json["detail"]
            .as_str()
            .unwrap()
            .contains("warehouse_inventory")
    );
}

#[tokio::test]
async fn test_upload_bad_window_field_is_bad_request() {
    let request = multipart(&[], &[("start", "not-a-date")]);
    let (status, _, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("start"));
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let big = format!("date,sku,produced_qty,orders\n{}", "2024-05-01,A,1,1\n".repeat(64));
    let request = multipart(
        &[
            ("production", big.as_str()),
            ("logistics", LOGISTICS_CSV),
            ("inventory", INVENTORY_CSV),
        ],
        &[],
    );
    let (status, _, _) = send(app_with_limit(256), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
