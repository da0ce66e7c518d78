use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::{
    messages::handlers::{__path_create_message, __path_get_message, create_message, get_message},
    server::AppState,
};

pub fn message_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_message))
        .routes(routes!(get_message))
}
