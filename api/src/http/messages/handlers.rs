use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use messages_core::domain::message::{
    entities::{
        CreateMessageCommand, CreateMessageCommandResponse, GetMessageByIdQuery,
        GetMessageByIdQueryResponse, MessageId,
    },
    ports::MessageService,
};
use uuid::Uuid;

use crate::http::server::{ApiError, AppState, Response, response::ErrorBody};

pub const CANNOT_PARSE_BODY: &str = "cannot parse request body";
pub const INVALID_UUID_FORMAT: &str = "invalid UUID format";

#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = CreateMessageCommand,
    responses(
        (status = 201, description = "Message created successfully", body = CreateMessageCommandResponse),
        (status = 400, description = "Bad request - Body is not a valid create message command", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state, payload))]
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageCommand>, JsonRejection>,
) -> Result<Response<CreateMessageCommandResponse>, ApiError> {
    handle_create_message(&state.service, payload).await
}

/// Every service failure on this route is reported as 404, not only
/// `MessageNotFound`.
#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = String, Path, description = "Message ID (UUID)")
    ),
    responses(
        (status = 200, description = "Message retrieved successfully", body = GetMessageByIdQueryResponse),
        (status = 400, description = "Bad request - ID is not a valid UUID", body = ErrorBody),
        (status = 404, description = "Message not found", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state, path))]
pub async fn get_message(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response<GetMessageByIdQueryResponse>, ApiError> {
    handle_get_message(&state.service, path).await
}

/// Body of `POST /messages`, independent of the concrete service.
pub async fn handle_create_message<S>(
    service: &S,
    payload: Result<Json<CreateMessageCommand>, JsonRejection>,
) -> Result<Response<CreateMessageCommandResponse>, ApiError>
where
    S: MessageService,
{
    let Json(command) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "create message body rejected");
        ApiError::BadRequest(CANNOT_PARSE_BODY.to_string())
    })?;

    let created = service.create_message(command).await?;
    Ok(Response::created(created))
}

/// Body of `GET /messages/{id}`, independent of the concrete service.
pub async fn handle_get_message<S>(
    service: &S,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response<GetMessageByIdQueryResponse>, ApiError>
where
    S: MessageService,
{
    // Undecodable segments (e.g. invalid UTF-8) are malformed identifiers too.
    let Path(raw_id) = path.map_err(|rejection| {
        tracing::debug!(%rejection, "message id path rejected");
        ApiError::BadRequest(INVALID_UUID_FORMAT.to_string())
    })?;
    let id = Uuid::parse_str(&raw_id)
        .map_err(|_| ApiError::BadRequest(INVALID_UUID_FORMAT.to_string()))?;

    let query = GetMessageByIdQuery::from(MessageId::from(id));
    let message = service
        .get_message_by_id(query)
        .await
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    Ok(Response::ok(message))
}
