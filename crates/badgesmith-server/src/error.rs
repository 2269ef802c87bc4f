use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use badgesmith::RasterError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("PNG output requires rasterization support (build with the `raster` feature)")]
    RasterizationUnavailable,
    #[error(transparent)]
    Raster(RasterError),
    #[error("render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<RasterError> for ApiError {
    fn from(value: RasterError) -> Self {
        if value.is_unavailable() {
            Self::RasterizationUnavailable
        } else {
            Self::Raster(value)
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RasterizationUnavailable => StatusCode::BAD_REQUEST,
            Self::Raster(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "badge request failed");
        } else {
            tracing::debug!(error = %self, "badge request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
