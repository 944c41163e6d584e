//! Shop API - REST server for products and categories

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

/// Assemble the full application: versioned API, docs, middleware and health.
fn build_app(config: &Config) -> std::io::Result<Router> {
    let router =
        create_router::<openapi::ApiDoc>(api::routes(), &config.server, &config.environment)?;
    Ok(router.merge(health_router(config.app)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let app = build_app(&config)?;

    info!(
        "Starting {} v{} ({:?}) on {}",
        config.app.name,
        config.app.version,
        config.environment,
        config.server.address()
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async {
        info!("Shutting down: nothing to release for in-memory storage");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop API shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig, Environment};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        };
        build_app(&config).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "shop_api");
    }

    #[tokio::test]
    async fn test_versioned_routes_are_mounted() {
        let app = test_app();

        let create = Request::builder()
            .method("POST")
            .uri("/api/v1/products")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"name": "Mug", "description": "Ceramic", "price": 9.5}).to_string(),
            ))
            .unwrap();
        let (status, body) = send(&app, create).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["name"], "Mug");

        let list = Request::builder()
            .uri("/api/v1/categories")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, list).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["categories"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_route_uses_envelope() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api/v2/products")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn test_openapi_document_lists_both_domains() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        let paths = body["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/v1/products/{id}"));
        assert!(paths.contains_key("/api/v1/categories"));
    }
}
