//! Route-level integration tests
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`; no
//! listener is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use calcsrv::config::ServiceConfig;
use calcsrv::routes::create_routes;
use calcsrv::state::AppState;

fn test_app() -> axum::Router {
    create_routes(Arc::new(AppState::new(ServiceConfig::default())))
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_soma_sums_all_values() {
    let (status, body) = get_json("/soma?valores=1&valores=2&valores=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    assert_eq!(body["Message"][0], "The sum of the values is: 6");
}

#[tokio::test]
async fn test_soma_without_values_sums_to_zero() {
    let (status, body) = get_json("/soma").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    assert_eq!(body["Message"][0], "The sum of the values is: 0");
}

#[tokio::test]
async fn test_soma_rejects_non_numeric_value() {
    let (status, body) = get_json("/soma?valores=1&valores=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Sucesso"], false);
}

#[tokio::test]
async fn test_subtracao() {
    let (status, body) = get_json("/subtracao?x=10&y=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    assert_eq!(body["Message"][0], "The result of subtracting 4 from 10 is: 6");
}

#[tokio::test]
async fn test_divisao() {
    let (status, body) = get_json("/divisao?x=10&y=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    assert_eq!(body["Message"][0], "The result of dividing 10 by 2 is: 5");
}

#[tokio::test]
async fn test_divisao_by_zero_returns_400() {
    let (status, body) = get_json("/divisao?x=10&y=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Sucesso"], false);
    assert_eq!(body["Message"][0], "Cannot divide by 0");
}

#[tokio::test]
async fn test_raiz_quadrada_exact() {
    let (status, body) = get_json("/raizQuadrada?x=16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    assert_eq!(body["Message"][0], "The square root of 16 is 4!");
}

#[tokio::test]
async fn test_raiz_quadrada_negative_returns_400() {
    let (status, body) = get_json("/raizQuadrada?x=-4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Sucesso"], false);
}

#[tokio::test]
async fn test_raiz_quadrada_non_exact_falls_back() {
    let (status, body) = get_json("/raizQuadrada?x=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    let message = body["Message"][0].as_str().unwrap();
    assert!(message.starts_with("It looks like this value does not have an exact square root."));
}

#[tokio::test]
async fn test_raiz_quadrada_nao_exata() {
    let (status, body) = get_json("/raizQuadradaNaoExata?x=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    let message = body["Message"][0].as_str().unwrap();
    assert!(message.starts_with("The closest square root of 2 is: 1.414213"));
}

#[tokio::test]
async fn test_raiz_quadrada_nao_exata_negative_returns_400() {
    let (status, body) = get_json("/raizQuadradaNaoExata?x=-0.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Sucesso"], false);
}

#[tokio::test]
async fn test_calculo_personalizado_respects_precedence() {
    // formula = 2+3*4 ('+' URL-encoded)
    let (status, body) = get_json("/calculoPersonalizado?formula=2%2B3*4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sucesso"], true);
    assert_eq!(body["Message"][0], "The result is: 14");
}

#[tokio::test]
async fn test_calculo_personalizado_with_parentheses() {
    // formula = (2+3)*4
    let (status, body) = get_json("/calculoPersonalizado?formula=(2%2B3)*4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"][0], "The result is: 20");
}

#[tokio::test]
async fn test_calculo_personalizado_left_associativity() {
    let (status, body) = get_json("/calculoPersonalizado?formula=10-2-3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"][0], "The result is: 5");
}

#[tokio::test]
async fn test_calculo_personalizado_malformed_returns_400() {
    let (status, body) = get_json("/calculoPersonalizado?formula=(2%2B3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Sucesso"], false);
}

#[tokio::test]
async fn test_missing_query_params_are_rejected() {
    // No JSON body contract for extractor rejections; status only
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/divisao?x=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "calcsrv");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/multiplicacao?x=2&y=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
