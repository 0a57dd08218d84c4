mod handlers;
mod middleware;

pub use middleware::RESPONSE_DELAY;

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::application::catalog::ContentCatalog;

use middleware::{fixed_latency, log_responses, set_request_context};

#[derive(Clone)]
pub struct FixtureState {
    pub catalog: Arc<ContentCatalog>,
}

pub fn build_router(state: FixtureState) -> Router {
    Router::new()
        .route("/rest/api/space", get(handlers::spaces))
        .route("/rest/api/content/{label_id}/label", get(handlers::labels))
        .route("/rest/api/content/search", get(handlers::search))
        .route(
            "/rest/api/content/{content_id}/child/attachment",
            get(handlers::attachments),
        )
        .route(
            "/download/attachments/{content_id}/{attachment_id}",
            get(handlers::download),
        )
        .with_state(state)
        .layer(axum_middleware::from_fn(fixed_latency))
        .layer(axum_middleware::from_fn(log_responses))
        .layer(axum_middleware::from_fn(set_request_context))
}
