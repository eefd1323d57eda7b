//! HTTP Server configuration and startup for the booking service.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use stays_types::{BookingRepository, PaymentGateway};

use super::handlers::{self, AppState};
use super::super::openapi::ApiDoc;
use crate::BookingService;
use crate::http::{health, shutdown_signal};

/// HTTP Server for the Booking API.
pub struct HttpServer<R: BookingRepository, G: PaymentGateway> {
    state: Arc<AppState<R, G>>,
}

impl<R: BookingRepository, G: PaymentGateway> HttpServer<R, G> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: BookingService<R, G>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/booking", post(handlers::create_booking::<R, G>))
            .route("/booking/{id}", get(handlers::get_booking::<R, G>))
            .route(
                "/booking/{id}/transaction",
                post(handlers::process_payment::<R, G>),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }

    /// Serves on an already-bound listener with graceful shutdown.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        tracing::info!("Booking server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve(listener).await
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::booking::service_tests::tests::{MockGateway, MockRepo};

    use super::*;

    fn router() -> Router {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(9));
        HttpServer::new(service).router()
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_booking_route_returns_created() {
        let body = serde_json::json!({
            "from_date": "2024-01-01",
            "to_date": "2024-01-04",
            "aadhar_number": "1234",
            "num_of_rooms": 2
        });

        let response = router()
            .oneshot(
                Request::post("/booking")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response.into_body()).await;
        assert_eq!(json["room_price"], 6000);
        assert_eq!(json["transaction_id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_get_unknown_booking_is_404() {
        let response = router()
            .oneshot(Request::get("/booking/999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response.into_body()).await;
        assert_eq!(json["code"], 404);
    }

    #[tokio::test]
    async fn test_pay_with_bad_mode_is_400() {
        let router = router();

        let create = serde_json::json!({
            "from_date": "2024-01-01",
            "to_date": "2024-01-04",
            "aadhar_number": "1234",
            "num_of_rooms": 1
        });
        let response = router
            .clone()
            .oneshot(
                Request::post("/booking")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(create.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let created = body_json(response.into_body()).await;

        let pay = serde_json::json!({ "payment_mode": "CASH" });
        let response = router
            .oneshot(
                Request::post(format!("/booking/{}/transaction", created["id"]))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(pay.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
