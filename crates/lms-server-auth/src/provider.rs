// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The seam between the credential flows and the external identity provider.

use async_trait::async_trait;
use lms_common_secret::SecretString;
use std::fmt;

use crate::credentials::AuthenticationResult;
use crate::role::Role;

/// Custom attribute carrying the user's role. Must match the pool schema.
pub const ROLE_ATTRIBUTE: &str = "custom:role";

/// Standard attribute carrying the display name.
pub const NAME_ATTRIBUTE: &str = "name";

/// A `{name, value}` pair attached to a new identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
	pub name: String,
	pub value: String,
}

impl UserAttribute {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	pub fn role(role: Role) -> Self {
		Self::new(ROLE_ATTRIBUTE, role.as_str())
	}

	pub fn display_name(name: impl Into<String>) -> Self {
		Self::new(NAME_ATTRIBUTE, name)
	}
}

/// What the provider reports after creating an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpReceipt {
	/// Provider-issued subject for the new identity.
	pub user_sub: String,
	pub user_confirmed: bool,
}

/// Provider-level classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
	UserExists,
	InvalidPassword,
	InvalidParameter,
	NotAuthorized,
	UserNotFound,
	UserNotConfirmed,
	PasswordResetRequired,
	Throttled,
	Unavailable,
	Timeout,
	Misconfigured,
	MalformedResponse,
	ChallengeRequired,
	Unknown,
}

impl ProviderErrorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ProviderErrorKind::UserExists => "user_exists",
			ProviderErrorKind::InvalidPassword => "invalid_password",
			ProviderErrorKind::InvalidParameter => "invalid_parameter",
			ProviderErrorKind::NotAuthorized => "not_authorized",
			ProviderErrorKind::UserNotFound => "user_not_found",
			ProviderErrorKind::UserNotConfirmed => "user_not_confirmed",
			ProviderErrorKind::PasswordResetRequired => "password_reset_required",
			ProviderErrorKind::Throttled => "throttled",
			ProviderErrorKind::Unavailable => "unavailable",
			ProviderErrorKind::Timeout => "timeout",
			ProviderErrorKind::Misconfigured => "misconfigured",
			ProviderErrorKind::MalformedResponse => "malformed_response",
			ProviderErrorKind::ChallengeRequired => "challenge_required",
			ProviderErrorKind::Unknown => "unknown",
		}
	}
}

impl fmt::Display for ProviderErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A failed provider call.
///
/// `code` is the provider's own exception name when it sent one. `message` is
/// provider detail for logs only; it is never returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identity provider error ({kind}): {message}")]
pub struct ProviderError {
	pub kind: ProviderErrorKind,
	pub code: Option<String>,
	pub message: String,
}

impl ProviderError {
	pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			code: None,
			message: message.into(),
		}
	}

	pub fn with_code(mut self, code: impl Into<String>) -> Self {
		self.code = Some(code.into());
		self
	}
}

/// Signup and username/password authentication against an external identity provider.
///
/// Each call is exactly one outbound request. Implementations hold no per-call
/// state and are shared across requests.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
	/// Create an identity. Attributes are sent in the order given.
	async fn sign_up(
		&self,
		username: &str,
		password: &SecretString,
		attributes: &[UserAttribute],
	) -> Result<SignUpReceipt, ProviderError>;

	/// Exchange a username and password for the token triple.
	async fn initiate_auth(
		&self,
		username: &str,
		password: &SecretString,
	) -> Result<AuthenticationResult, ProviderError>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn role_attribute_uses_canonical_role() {
		let attr = UserAttribute::role(Role::Instructor);
		assert_eq!(attr.name, "custom:role");
		assert_eq!(attr.value, "INSTRUCTOR");
	}

	#[test]
	fn display_name_attribute() {
		let attr = UserAttribute::display_name("Alice");
		assert_eq!(attr, UserAttribute::new("name", "Alice"));
	}

	#[test]
	fn provider_error_display_includes_kind() {
		let err = ProviderError::new(ProviderErrorKind::NotAuthorized, "Incorrect username or password.")
			.with_code("NotAuthorizedException");
		assert_eq!(err.code.as_deref(), Some("NotAuthorizedException"));
		assert_eq!(
			err.to_string(),
			"identity provider error (not_authorized): Incorrect username or password."
		);
	}
}
