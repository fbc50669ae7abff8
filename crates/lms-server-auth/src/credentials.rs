// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential submissions and the token triple returned on login.

use lms_common_secret::SecretString;
use serde::Deserialize;

/// A signup submission. The role stays a raw string until the flow parses it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
	pub email: String,
	pub password: SecretString,
	pub user_name: String,
	pub telephone: String,
	pub role: String,
}

impl JoinRequest {
	/// Shape checks that run before anything leaves the process.
	pub fn validate(&self) -> Result<(), String> {
		if self.email.trim().is_empty() {
			return Err("email is required".to_string());
		}
		if !self.email.contains('@') {
			return Err("email must be a valid address".to_string());
		}
		if self.password.is_empty() {
			return Err("password is required".to_string());
		}
		if self.user_name.trim().is_empty() {
			return Err("userName is required".to_string());
		}
		Ok(())
	}
}

/// A login submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
	pub email: String,
	pub password: SecretString,
}

impl LoginRequest {
	pub fn validate(&self) -> Result<(), String> {
		if self.email.trim().is_empty() {
			return Err("email is required".to_string());
		}
		if !self.email.contains('@') {
			return Err("email must be a valid address".to_string());
		}
		if self.password.is_empty() {
			return Err("password is required".to_string());
		}
		Ok(())
	}
}

/// Tokens issued by the identity provider. Opaque: never decoded or checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
	pub access_token: SecretString,
	pub id_token: SecretString,
	pub refresh_token: SecretString,
}

impl AuthenticationResult {
	pub fn new(
		access_token: impl Into<SecretString>,
		id_token: impl Into<SecretString>,
		refresh_token: impl Into<SecretString>,
	) -> Self {
		Self {
			access_token: access_token.into(),
			id_token: id_token.into(),
			refresh_token: refresh_token.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn join(email: &str, password: &str, user_name: &str) -> JoinRequest {
		JoinRequest {
			email: email.to_string(),
			password: SecretString::from(password),
			user_name: user_name.to_string(),
			telephone: "555-0100".to_string(),
			role: "STUDENT".to_string(),
		}
	}

	#[test]
	fn well_formed_join_passes() {
		assert!(join("a@x.com", "Secret123!", "Alice").validate().is_ok());
	}

	#[test]
	fn join_requires_email_password_and_name() {
		assert!(join("", "Secret123!", "Alice").validate().is_err());
		assert!(join("not-an-email", "Secret123!", "Alice").validate().is_err());
		assert!(join("a@x.com", "", "Alice").validate().is_err());
		assert!(join("a@x.com", "Secret123!", "  ").validate().is_err());
	}

	#[test]
	fn login_requires_email_and_password() {
		let login = |email: &str, password: &str| LoginRequest {
			email: email.to_string(),
			password: SecretString::from(password),
		};
		assert!(login("a@x.com", "Secret123!").validate().is_ok());
		assert_eq!(login("  ", "Secret123!").validate(), Err("email is required".to_string()));
		assert!(login("alice", "Secret123!").validate().is_err());
		assert_eq!(login("a@x.com", "").validate(), Err("password is required".to_string()));
	}

	#[test]
	fn join_request_reads_camel_case() {
		let body = r#"{"email":"a@x.com","password":"Secret123!","userName":"Alice","telephone":"555-0100","role":"STUDENT"}"#;
		let req: JoinRequest = serde_json::from_str(body).unwrap();
		assert_eq!(req.user_name, "Alice");
		assert_eq!(req.role, "STUDENT");
		assert_eq!(req.password.expose(), "Secret123!");
	}

	#[test]
	fn debug_output_hides_password() {
		let req = LoginRequest {
			email: "a@x.com".to_string(),
			password: SecretString::from("Secret123!"),
		};
		let debug = format!("{req:?}");
		assert!(debug.contains("a@x.com"));
		assert!(!debug.contains("Secret123!"));
	}

	#[test]
	fn tokens_are_redacted_in_debug() {
		let result = AuthenticationResult::new("AT1", "IT1", "RT1");
		let debug = format!("{result:?}");
		assert!(!debug.contains("AT1"));
		assert_eq!(result.access_token.expose(), "AT1");
		assert_eq!(result.id_token.expose(), "IT1");
		assert_eq!(result.refresh_token.expose(), "RT1");
	}
}
