// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lms_server_auth::{AuthenticationResult, Rejection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use lms_server_auth::{JoinRequest, LoginRequest};

pub const JOIN_SUCCESS_MESSAGE: &str = "User signed up successfully!";
pub const JOIN_FAILED_MESSAGE: &str = "Failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStatus {
	Success,
	Failure,
}

/// Body of `POST /api/auth/join`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinResponse {
	pub status: JoinStatus,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reference: Option<Uuid>,
}

impl JoinResponse {
	pub fn success() -> Self {
		Self {
			status: JoinStatus::Success,
			message: JOIN_SUCCESS_MESSAGE.to_string(),
			error: None,
			reference: None,
		}
	}

	pub fn failure(rejection: &Rejection) -> Self {
		Self {
			status: JoinStatus::Failure,
			message: format!("{JOIN_FAILED_MESSAGE}: {}", rejection.message),
			error: Some(rejection.code().to_string()),
			reference: Some(rejection.reference),
		}
	}
}

/// Success body of `POST /api/auth/login`. Tokens are passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	pub access_token: String,
	pub id_token: String,
	pub refresh_token: String,
}

impl From<AuthenticationResult> for LoginResponse {
	fn from(result: AuthenticationResult) -> Self {
		Self {
			access_token: result.access_token.into_inner(),
			id_token: result.id_token.into_inner(),
			refresh_token: result.refresh_token.into_inner(),
		}
	}
}

/// Error body for login and any non-join failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthErrorResponse {
	pub error: String,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reference: Option<Uuid>,
}

impl From<&Rejection> for AuthErrorResponse {
	fn from(rejection: &Rejection) -> Self {
		Self {
			error: rejection.code().to_string(),
			message: rejection.message.to_string(),
			reference: Some(rejection.reference),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lms_server_auth::GatewayError;
	use serde_json::json;

	#[test]
	fn join_success_body() {
		let body = serde_json::to_value(JoinResponse::success()).unwrap();
		assert_eq!(
			body,
			json!({"status": "success", "message": "User signed up successfully!"})
		);
	}

	#[test]
	fn join_failure_body_carries_code_and_reference() {
		let rejection = Rejection::record(&GatewayError::InvalidRequest("email".into()));
		let body = serde_json::to_value(JoinResponse::failure(&rejection)).unwrap();

		assert_eq!(body["status"], "failure");
		assert_eq!(body["error"], "invalid_request");
		assert!(body["message"].as_str().unwrap().starts_with("Failed"));
		assert_eq!(body["reference"], rejection.reference.to_string());
	}

	#[test]
	fn login_body_is_camel_case_and_unredacted() {
		let body = serde_json::to_value(LoginResponse::from(AuthenticationResult::new(
			"AT1", "IT1", "RT1",
		)))
		.unwrap();
		assert_eq!(
			body,
			json!({"accessToken": "AT1", "idToken": "IT1", "refreshToken": "RT1"})
		);
	}

	#[test]
	fn error_body_from_rejection() {
		let rejection = Rejection::record(&GatewayError::InvalidRequest("email".into()));
		let body = AuthErrorResponse::from(&rejection);
		assert_eq!(body.error, "invalid_request");
		assert_eq!(body.reference, Some(rejection.reference));
	}
}
