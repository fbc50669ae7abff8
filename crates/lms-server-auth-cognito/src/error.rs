// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cognito failure classification.

use lms_server_auth::{ProviderError, ProviderErrorKind};
use serde::Deserialize;

/// Errors that can occur while building the client.
#[derive(Debug, thiserror::Error)]
pub enum CognitoError {
	/// A configuration value was empty or inconsistent.
	#[error("invalid Cognito configuration: {0}")]
	InvalidConfig(String),

	/// The underlying HTTP client could not be built.
	#[error("failed to build HTTP client: {0}")]
	HttpClient(#[from] reqwest::Error),
}

/// Error body returned by the JSON 1.1 protocol.
#[derive(Debug, Deserialize)]
struct CognitoErrorResponse {
	#[serde(rename = "__type")]
	error_type: Option<String>,
	#[serde(alias = "Message")]
	message: Option<String>,
}

/// Map a Cognito exception name to a provider error kind.
pub fn classify_exception(name: &str) -> ProviderErrorKind {
	match name {
		"UsernameExistsException" | "AliasExistsException" => ProviderErrorKind::UserExists,
		"InvalidPasswordException" => ProviderErrorKind::InvalidPassword,
		"InvalidParameterException" => ProviderErrorKind::InvalidParameter,
		"NotAuthorizedException" => ProviderErrorKind::NotAuthorized,
		"UserNotFoundException" => ProviderErrorKind::UserNotFound,
		"UserNotConfirmedException" => ProviderErrorKind::UserNotConfirmed,
		"PasswordResetRequiredException" => ProviderErrorKind::PasswordResetRequired,
		"TooManyRequestsException" | "LimitExceededException" => ProviderErrorKind::Throttled,
		"InternalErrorException" => ProviderErrorKind::Unavailable,
		"ResourceNotFoundException" | "InvalidUserPoolConfigurationException" => {
			ProviderErrorKind::Misconfigured
		}
		_ => ProviderErrorKind::Unknown,
	}
}

/// Fallback classification when no exception name is recognized.
fn classify_status(status: u16) -> ProviderErrorKind {
	match status {
		429 => ProviderErrorKind::Throttled,
		500..=599 => ProviderErrorKind::Unavailable,
		_ => ProviderErrorKind::Unknown,
	}
}

/// Strip the namespace (`...#Name`) or header suffix (`Name:http://...`).
fn exception_name(raw: &str) -> &str {
	let name = raw.rsplit('#').next().unwrap_or(raw);
	name.split(':').next().unwrap_or(name).trim()
}

/// Build a [`ProviderError`] from a non-2xx response.
pub(crate) fn from_response(status: u16, error_type_header: Option<&str>, body: &[u8]) -> ProviderError {
	let parsed = serde_json::from_slice::<CognitoErrorResponse>(body).ok();
	let (body_type, body_message) = match parsed {
		Some(response) => (response.error_type, response.message),
		None => (None, None),
	};

	let code = body_type
		.as_deref()
		.or(error_type_header)
		.map(exception_name)
		.filter(|name| !name.is_empty())
		.map(str::to_string);

	let kind = match code.as_deref().map(classify_exception) {
		Some(ProviderErrorKind::Unknown) | None => classify_status(status),
		Some(kind) => kind,
	};

	let message = body_message.unwrap_or_else(|| format!("HTTP {status}"));
	let error = ProviderError::new(kind, message);
	match code {
		Some(code) => error.with_code(code),
		None => error,
	}
}

/// Build a [`ProviderError`] from a transport-level failure.
pub(crate) fn from_transport(error: &reqwest::Error) -> ProviderError {
	let kind = if error.is_timeout() {
		ProviderErrorKind::Timeout
	} else if error.is_connect() || error.is_request() {
		ProviderErrorKind::Unavailable
	} else if error.is_decode() || error.is_body() {
		ProviderErrorKind::MalformedResponse
	} else {
		ProviderErrorKind::Unknown
	};
	ProviderError::new(kind, error.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_exceptions_are_classified() {
		assert_eq!(
			classify_exception("UsernameExistsException"),
			ProviderErrorKind::UserExists
		);
		assert_eq!(
			classify_exception("AliasExistsException"),
			ProviderErrorKind::UserExists
		);
		assert_eq!(
			classify_exception("InvalidPasswordException"),
			ProviderErrorKind::InvalidPassword
		);
		assert_eq!(
			classify_exception("NotAuthorizedException"),
			ProviderErrorKind::NotAuthorized
		);
		assert_eq!(
			classify_exception("LimitExceededException"),
			ProviderErrorKind::Throttled
		);
		assert_eq!(
			classify_exception("ResourceNotFoundException"),
			ProviderErrorKind::Misconfigured
		);
		assert_eq!(
			classify_exception("CodeMismatchException"),
			ProviderErrorKind::Unknown
		);
	}

	#[test]
	fn namespaced_type_in_body() {
		let body = br#"{"__type":"com.amazonaws.cognito#NotAuthorizedException","message":"Incorrect username or password."}"#;
		let err = from_response(400, None, body);
		assert_eq!(err.kind, ProviderErrorKind::NotAuthorized);
		assert_eq!(err.code.as_deref(), Some("NotAuthorizedException"));
		assert_eq!(err.message, "Incorrect username or password.");
	}

	#[test]
	fn header_used_when_body_has_no_type() {
		let err = from_response(
			400,
			Some("UserNotFoundException:http://internal.amazon.com/coral/"),
			b"{}",
		);
		assert_eq!(err.kind, ProviderErrorKind::UserNotFound);
		assert_eq!(err.code.as_deref(), Some("UserNotFoundException"));
	}

	#[test]
	fn status_fallbacks() {
		assert_eq!(from_response(429, None, b"").kind, ProviderErrorKind::Throttled);
		assert_eq!(
			from_response(503, None, b"<html>").kind,
			ProviderErrorKind::Unavailable
		);
		assert_eq!(from_response(400, None, b"").kind, ProviderErrorKind::Unknown);
		assert_eq!(from_response(503, None, b"").message, "HTTP 503");
	}

	#[test]
	fn unknown_exception_falls_back_to_status() {
		let body = br#"{"__type":"SomethingNewException","message":"later"}"#;
		let err = from_response(500, None, body);
		assert_eq!(err.kind, ProviderErrorKind::Unavailable);
		assert_eq!(err.code.as_deref(), Some("SomethingNewException"));
	}
}
