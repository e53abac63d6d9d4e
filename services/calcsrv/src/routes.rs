//! API Route Configuration
//!
//! Central route definition for all calculator endpoints.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;
#[cfg(feature = "swagger-ui")]
use utoipa_swagger_ui::SwaggerUi;

use crate::api::arithmetic_handlers::{divide, subtract, sum};
use crate::api::expression_handlers::custom_calculation;
use crate::api::health_handlers::health_check;
use crate::api::sqrt_handlers::{approximate_square_root, exact_square_root};
use crate::state::AppState;

// OpenAPI documentation - only compiled when the swagger-ui feature is enabled
#[cfg(feature = "swagger-ui")]
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::arithmetic_handlers::sum,
        crate::api::arithmetic_handlers::subtract,
        crate::api::arithmetic_handlers::divide,
        crate::api::sqrt_handlers::exact_square_root,
        crate::api::sqrt_handlers::approximate_square_root,
        crate::api::expression_handlers::custom_calculation,
        crate::api::health_handlers::health_check
    ),
    components(schemas(calc_engine::CalcResponse))
)]
pub struct CalcSrvApiDoc;

/// Build the service router.
pub fn create_routes(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/soma", get(sum))
        .route("/subtracao", get(subtract))
        .route("/divisao", get(divide))
        .route("/raizQuadrada", get(exact_square_root))
        .route("/raizQuadradaNaoExata", get(approximate_square_root))
        .route("/calculoPersonalizado", get(custom_calculation))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", CalcSrvApiDoc::openapi()),
    );

    router
}
