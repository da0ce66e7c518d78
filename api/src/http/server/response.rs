use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body paired with the status it is sent with.
pub struct Response<T> {
    status: StatusCode,
    data: T,
}

impl<T> Response<T>
where
    T: Serialize,
{
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize,
{
    fn into_response(self) -> AxumResponse {
        (self.status, Json(self.data)).into_response()
    }
}

/// Error envelope returned by every failing route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
