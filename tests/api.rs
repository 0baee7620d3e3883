use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use eba_npl_api::{app, AppState, Catalog, MemoryRepository, Row};
use serde_json::{json, Value};
use tower::ServiceExt;

const SAMPLE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/eba_sample.json"));

fn row(v: Value) -> Row {
    v.as_object().cloned().expect("row must be an object")
}

fn router(repo: MemoryRepository, prefix: &str) -> Router {
    let state = AppState::new(Catalog::eba().unwrap(), repo, "localhost:3000");
    app(state, prefix)
}

fn sample_router() -> Router {
    let repo = MemoryRepository::from_fixture(SAMPLE, &Catalog::eba().unwrap()).unwrap();
    router(repo, "")
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::get(uri).header("host", "npl.test").body(Body::empty()).unwrap();
    send(app, req).await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn single_loan_list_and_detail() {
    let repo = MemoryRepository::new().with_rows(
        "eba_loan",
        vec![row(json!({
            "id": 1,
            "loan_identifier": "LN-0001",
            "counterparty_id": 3,
            "currency_of_loan": "EUR",
            "total_balance": "100.00",
            "principal_balance": "90.00",
        }))],
    );
    let app = router(repo, "");

    let (status, list) = get_json(&app, "/eba_loan").await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["loan_identifier"], "LN-0001");
    assert_eq!(list[0]["url"], "http://npl.test/eba_loan/1");
    assert_eq!(list[0]["counterparty"], "http://npl.test/eba_counterparty/3");
    assert!(list[0].get("principal_balance").is_none());

    let (status, detail) = get_json(&app, "/eba_loan/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["principal_balance"], "90.00");
    assert!(detail.as_object().unwrap().len() > list[0].as_object().unwrap().len());

    let (status, body) = get(&app, "/eba_loan/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn empty_store_lists_empty_arrays() {
    let app = router(MemoryRepository::new(), "");
    let (status, body) = get_json(&app, "/eba_counterparty").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_length_matches_row_count_for_every_resource() {
    let catalog = Catalog::eba().unwrap();
    let app = sample_router();
    let doc: Value = serde_json::from_str(SAMPLE).unwrap();
    for resource in catalog.resources() {
        let expected = doc[resource.name].as_array().map(Vec::len).unwrap_or(0);
        let (status, body) = get_json(&app, &format!("/{}", resource.name)).await;
        assert_eq!(status, StatusCode::OK, "{}", resource.name);
        assert_eq!(body.as_array().unwrap().len(), expected, "{}", resource.name);
    }
}

#[tokio::test]
async fn detail_is_wider_than_list_for_detail_resources() {
    let app = sample_router();
    for name in ["eba_counterparty", "eba_loan", "eba_property_collateral"] {
        let (_, list) = get_json(&app, &format!("/{}", name)).await;
        let first = &list.as_array().unwrap()[0];
        let (status, detail) = get_json(&app, &format!("/{}/{}", name, first["id"])).await;
        assert_eq!(status, StatusCode::OK, "{}", name);
        assert_eq!(detail["id"], first["id"]);
        assert!(
            detail.as_object().unwrap().len() > first.as_object().unwrap().len(),
            "{}",
            name
        );
    }
}

#[tokio::test]
async fn detail_routes_exist_only_for_three_resources() {
    let app = sample_router();
    for name in [
        "eba_counterparty_group",
        "eba_enforcement",
        "eba_forbearance",
        "eba_nonproperty_collateral",
        "eba_external_collection",
    ] {
        let (status, _) = get(&app, &format!("/{}/1", name)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", name);
    }
}

#[tokio::test]
async fn unknown_and_malformed_keys() {
    let app = sample_router();
    let (status, body) = get(&app, "/eba_counterparty/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = get_json(&app, "/eba_property_collateral/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn discovery_lists_every_resource_in_order() {
    let app = sample_router();
    for root in ["/", "/eba/"] {
        let (status, body) = get_json(&app, root).await;
        assert_eq!(status, StatusCode::OK);
        let endpoints = body["EBA Template Endpoints"].as_array().unwrap();
        let names: Vec<_> = endpoints
            .iter()
            .map(|e| e.as_object().unwrap().keys().next().unwrap().clone())
            .collect();
        assert_eq!(
            names,
            vec![
                "eba_counterparty_group",
                "eba_counterparty",
                "eba_loan",
                "eba_enforcement",
                "eba_forbearance",
                "eba_nonproperty_collateral",
                "eba_property_collateral",
                "eba_external_collection",
            ]
        );
        assert_eq!(endpoints[2]["eba_loan"], "http://npl.test/eba_loan");
    }
}

#[tokio::test]
async fn discovery_urls_resolve_to_list_endpoints() {
    let app = router(
        MemoryRepository::from_fixture(SAMPLE, &Catalog::eba().unwrap()).unwrap(),
        "/api/v1",
    );
    let (status, body) = get_json(&app, "/api/v1/eba/").await;
    assert_eq!(status, StatusCode::OK);
    for entry in body["EBA Template Endpoints"].as_array().unwrap() {
        let url = entry.as_object().unwrap().values().next().unwrap().as_str().unwrap();
        let path = url.strip_prefix("http://npl.test").expect("absolute url on request host");
        assert!(path.starts_with("/api/v1/eba_"), "{}", url);
        let (status, list) = get_json(&app, path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert!(list.is_array());
    }
}

#[tokio::test]
async fn prefixed_root_serves_discovery_with_and_without_slash() {
    let app = router(
        MemoryRepository::from_fixture(SAMPLE, &Catalog::eba().unwrap()).unwrap(),
        "/api/v1",
    );
    for root in ["/api/v1/", "/api/v1"] {
        let (status, body) = get_json(&app, root).await;
        assert_eq!(status, StatusCode::OK, "{}", root);
        let endpoints = body["EBA Template Endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 8);
        assert_eq!(endpoints[2]["eba_loan"], "http://npl.test/api/v1/eba_loan");
    }

    let (_, list) = get_json(&app, "/api/v1/eba_loan").await;
    assert_eq!(list[0]["url"], "http://npl.test/api/v1/eba_loan/1");
    let (status, _) = get(&app, "/eba_loan").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn links_follow_forwarded_headers() {
    let app = sample_router();
    let req = Request::get("/eba_property_collateral")
        .header("host", "internal:3000")
        .header("x-forwarded-proto", "https")
        .header("x-forwarded-host", "npl.example.com")
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let list: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(list[0]["url"], "https://npl.example.com/eba_property_collateral/1");
    assert_eq!(list[0]["loan"], "https://npl.example.com/eba_loan/1");
}

#[tokio::test]
async fn only_get_is_allowed() {
    let app = sample_router();
    for (method, uri) in [("POST", "/eba_loan"), ("DELETE", "/eba_loan/1"), ("PUT", "/eba/")] {
        let req = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn health_ready_and_version() {
    let app = router(MemoryRepository::new(), "/api");
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, body) = get_json(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "eba-npl-api");
}
