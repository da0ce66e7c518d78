use axum::{Router, extract::DefaultBodyLimit};
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa_axum::router::OpenApiRouter;

use crate::http::{
    messages::routes::message_routes,
    server::{AppState, response::ErrorBody},
};

pub mod messages;
pub mod server;

#[derive(OpenApi)]
#[openapi(
    info(title = "Messages API", description = "Create and retrieve messages"),
    tags((name = "messages", description = "Message creation and retrieval")),
    components(schemas(ErrorBody))
)]
pub struct ApiDoc;

/// Builds the application router and the OpenAPI document describing it.
///
/// Message text has no length limit, so request bodies are not capped.
pub fn app_router(state: AppState) -> (Router, OpenApiDoc) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(message_routes())
        .with_state(state)
        .split_for_parts();

    (router.layer(DefaultBodyLimit::disable()), api)
}
