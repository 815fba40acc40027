//! Request handlers and error mapping for the companion API.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;
use vrc::SessionError;
use vrc_protocol::{EndRequest, ErrorResponse, LaunchRequest, LibraryResponse, MessageResponse, StatusResponse};

use super::AppState;

/// Liveness probe; online for as long as the process answers.
pub async fn status() -> Json<StatusResponse> {
	Json(StatusResponse::online())
}

/// Lists launchable game packages in catalog order.
pub async fn library(State(state): State<AppState>) -> Json<LibraryResponse> {
	Json(state.service.library())
}

/// Accepts a launch request; responds as soon as the slot is claimed.
pub async fn launch(
	State(state): State<AppState>,
	payload: Result<Json<LaunchRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
	let Json(request) = payload?;
	let launched = state.service.launch(&request.package)?;
	Ok(Json(MessageResponse {
		message: format!("Launching {}", launched.package),
	}))
}

/// Ends a running instance.
pub async fn end(
	State(state): State<AppState>,
	payload: Result<Json<EndRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
	let Json(request) = payload?;
	let ended = state.service.end(&request.package)?;
	Ok(Json(MessageResponse {
		message: format!("Ended {}", ended.package),
	}))
}

/// Wire-facing error: an HTTP status plus the structured `error` body.
///
/// Every failure answers with `{"error": ...}`; nothing unstructured
/// ever reaches a caller.
pub struct ApiError {
	status: StatusCode,
	message: String,
}

impl From<SessionError> for ApiError {
	fn from(err: SessionError) -> Self {
		let status = match err {
			SessionError::MissingPackage | SessionError::NotRunning(_) => StatusCode::BAD_REQUEST,
			SessionError::UnknownPackage(_) => StatusCode::NOT_FOUND,
			SessionError::AlreadyRunning(_) => StatusCode::CONFLICT,
		};
		Self {
			status,
			message: err.to_string(),
		}
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		debug!(target = "vrc.http", error = %rejection, "rejected request body");
		Self {
			status: StatusCode::BAD_REQUEST,
			message: "Invalid request body".to_string(),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorResponse { error: self.message })).into_response()
	}
}
