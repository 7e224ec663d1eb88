use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_current_user::get_current_user;
use super::handlers::login_user::login_user;
use super::handlers::ping::ping;
use super::handlers::register_user::register_user;
use super::middleware::authenticate as auth_middleware;
use super::session::TokenLifetimes;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub token_issuer: Arc<TokenIssuer>,
    pub token_lifetimes: TokenLifetimes,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    token_issuer: Arc<TokenIssuer>,
    token_lifetimes: TokenLifetimes,
) -> Router {
    let state = AppState {
        user_service,
        token_issuer,
        token_lifetimes,
    };

    let public_routes = Router::new()
        .route("/ping", get(ping))
        .route("/api/v1/users", post(register_user))
        .route("/api/v1/users/login", post(login_user));

    let protected_routes = Router::new()
        .route("/api/v1/users/me", get(get_current_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
