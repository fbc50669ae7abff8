// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use lms_server_api::{AuthErrorResponse, JoinResponse};
use lms_server_auth::{GatewayError, Rejection};

/// A failed flow, tagged with the route that produced it.
///
/// Each route keeps its own failure body; both carry only the stable code,
/// a fixed message and the diagnostic reference.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error(transparent)]
	Join(GatewayError),

	#[error(transparent)]
	Login(GatewayError),
}

impl ServerError {
	fn gateway_error(&self) -> &GatewayError {
		match self {
			ServerError::Join(e) | ServerError::Login(e) => e,
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let rejection = Rejection::record(self.gateway_error());
		let status =
			StatusCode::from_u16(rejection.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

		match self {
			ServerError::Join(_) => (status, Json(JoinResponse::failure(&rejection))).into_response(),
			ServerError::Login(_) => {
				(status, Json(AuthErrorResponse::from(&rejection))).into_response()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lms_server_auth::{AuthFailure, ProviderError, ProviderErrorKind};

	#[test]
	fn join_failure_uses_classified_status() {
		let response = ServerError::Join(GatewayError::InvalidRequest("email".into())).into_response();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn login_timeout_is_gateway_timeout() {
		let response = ServerError::Login(GatewayError::ProviderAuth {
			failure: AuthFailure::Timeout,
			source: ProviderError::new(ProviderErrorKind::Timeout, "timed out"),
		})
		.into_response();
		assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
	}
}
