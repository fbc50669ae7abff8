// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gateway error taxonomy.
//!
//! Every failure of the join and login flows ends up as a [`GatewayError`].
//! Its [`ErrorKind`] is the stable, caller-facing code; everything else on the
//! error is diagnostic detail for logs.

use std::fmt;
use thiserror::Error;

use crate::provider::ProviderError;
use crate::role::RoleParseError;

/// Why a provider signup failed, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpFailure {
	/// The identity already exists.
	DuplicateUser,
	/// Password policy or attribute validation refused the request.
	PolicyViolation,
	/// Throttled or unreachable. Safe to retry later.
	Transient,
	/// The call did not complete within the configured timeout.
	Timeout,
	/// Anything else the provider refused.
	Rejected,
}

/// Why an authentication attempt failed, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthFailure {
	/// Wrong password or unknown user. The two are not distinguished.
	InvalidCredentials,
	UserNotConfirmed,
	/// The provider wants another step (MFA, new password) before issuing tokens.
	ChallengeRequired,
	/// The provider refused the shape of the submission.
	InvalidRequest,
	Unavailable,
	Timeout,
	Rejected,
}

/// Stable error code sent to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	InvalidRequest,
	InvalidRole,
	DuplicateUser,
	PolicyViolation,
	ProviderUnavailable,
	ProviderTimeout,
	ProviderRejected,
	InvalidCredentials,
	UserNotConfirmed,
	ChallengeRequired,
	OrphanedIdentity,
	PersistenceFailed,
}

impl ErrorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorKind::InvalidRequest => "invalid_request",
			ErrorKind::InvalidRole => "invalid_role",
			ErrorKind::DuplicateUser => "duplicate_user",
			ErrorKind::PolicyViolation => "policy_violation",
			ErrorKind::ProviderUnavailable => "provider_unavailable",
			ErrorKind::ProviderTimeout => "provider_timeout",
			ErrorKind::ProviderRejected => "provider_rejected",
			ErrorKind::InvalidCredentials => "invalid_credentials",
			ErrorKind::UserNotConfirmed => "user_not_confirmed",
			ErrorKind::ChallengeRequired => "challenge_required",
			ErrorKind::OrphanedIdentity => "orphaned_identity",
			ErrorKind::PersistenceFailed => "persistence_failed",
		}
	}

	/// Returns the HTTP status code for this kind.
	pub fn status_code(&self) -> u16 {
		match self {
			// 400 Bad Request
			ErrorKind::InvalidRequest | ErrorKind::InvalidRole | ErrorKind::PolicyViolation => 400,

			// 401 Unauthorized
			ErrorKind::InvalidCredentials => 401,

			// 403 Forbidden
			ErrorKind::UserNotConfirmed | ErrorKind::ChallengeRequired => 403,

			// 409 Conflict
			ErrorKind::DuplicateUser | ErrorKind::OrphanedIdentity => 409,

			// 500 Internal Server Error
			ErrorKind::PersistenceFailed => 500,

			// 502 Bad Gateway
			ErrorKind::ProviderRejected => 502,

			// 503 Service Unavailable
			ErrorKind::ProviderUnavailable => 503,

			// 504 Gateway Timeout
			ErrorKind::ProviderTimeout => 504,
		}
	}

	/// True when resubmitting the same request later may succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, ErrorKind::ProviderUnavailable | ErrorKind::ProviderTimeout)
	}

	/// Fixed message returned to callers. Never contains provider detail.
	pub fn public_message(&self) -> &'static str {
		match self {
			ErrorKind::InvalidRequest => "The request is missing required fields or is malformed",
			ErrorKind::InvalidRole => "The requested role is not valid",
			ErrorKind::DuplicateUser => "A user with this email already exists",
			ErrorKind::PolicyViolation => "The password or user attributes do not meet requirements",
			ErrorKind::ProviderUnavailable => "The identity provider is temporarily unavailable",
			ErrorKind::ProviderTimeout => "The identity provider did not respond in time",
			ErrorKind::ProviderRejected => "The identity provider rejected the request",
			ErrorKind::InvalidCredentials => "Invalid email or password",
			ErrorKind::UserNotConfirmed => "The account has not been confirmed",
			ErrorKind::ChallengeRequired => "Additional verification is required to sign in",
			ErrorKind::OrphanedIdentity => {
				"The account exists with the identity provider but is not registered here"
			}
			ErrorKind::PersistenceFailed => "The account could not be saved",
		}
	}
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors produced by the join and login flows.
#[derive(Debug, Error)]
pub enum GatewayError {
	// =========================================================================
	// Request Errors
	// =========================================================================
	/// The request failed shape validation.
	#[error("invalid request: {0}")]
	InvalidRequest(String),

	/// The role is outside the closed set.
	#[error(transparent)]
	InvalidRole(#[from] RoleParseError),

	// =========================================================================
	// Provider Errors
	// =========================================================================
	/// Signup failed. `source` is absent when the local duplicate check
	/// rejected the request before the provider was called.
	#[error("sign up failed: {failure:?}")]
	ProviderSignUp {
		failure: SignUpFailure,
		#[source]
		source: Option<ProviderError>,
	},

	/// Authentication failed.
	#[error("authentication failed: {failure:?}")]
	ProviderAuth {
		failure: AuthFailure,
		#[source]
		source: ProviderError,
	},

	/// The provider already holds an identity for this email but no local
	/// record exists.
	#[error("identity exists with provider but not locally: {email}")]
	OrphanedIdentity {
		email: String,
		#[source]
		source: ProviderError,
	},

	// =========================================================================
	// Infrastructure Errors
	// =========================================================================
	/// The provider accepted the signup but the local record could not be saved.
	#[error("failed to persist user {email} (provider subject {provider_subject}): {message}")]
	Persistence {
		email: String,
		provider_subject: String,
		message: String,
	},

	/// The local store could not answer the duplicate check.
	#[error("user store lookup failed for {email}: {message}")]
	Lookup { email: String, message: String },
}

impl GatewayError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			GatewayError::InvalidRequest(_) => ErrorKind::InvalidRequest,
			GatewayError::InvalidRole(_) => ErrorKind::InvalidRole,
			GatewayError::ProviderSignUp { failure, .. } => match failure {
				SignUpFailure::DuplicateUser => ErrorKind::DuplicateUser,
				SignUpFailure::PolicyViolation => ErrorKind::PolicyViolation,
				SignUpFailure::Transient => ErrorKind::ProviderUnavailable,
				SignUpFailure::Timeout => ErrorKind::ProviderTimeout,
				SignUpFailure::Rejected => ErrorKind::ProviderRejected,
			},
			GatewayError::ProviderAuth { failure, .. } => match failure {
				AuthFailure::InvalidCredentials => ErrorKind::InvalidCredentials,
				AuthFailure::UserNotConfirmed => ErrorKind::UserNotConfirmed,
				AuthFailure::ChallengeRequired => ErrorKind::ChallengeRequired,
				AuthFailure::InvalidRequest => ErrorKind::InvalidRequest,
				AuthFailure::Unavailable => ErrorKind::ProviderUnavailable,
				AuthFailure::Timeout => ErrorKind::ProviderTimeout,
				AuthFailure::Rejected => ErrorKind::ProviderRejected,
			},
			GatewayError::OrphanedIdentity { .. } => ErrorKind::OrphanedIdentity,
			GatewayError::Persistence { .. } | GatewayError::Lookup { .. } => {
				ErrorKind::PersistenceFailed
			}
		}
	}

	pub fn status_code(&self) -> u16 {
		self.kind().status_code()
	}

	pub fn is_retryable(&self) -> bool {
		self.kind().is_retryable()
	}

	/// Returns true if this error should be logged at error level.
	pub fn is_internal(&self) -> bool {
		matches!(
			self.kind(),
			ErrorKind::PersistenceFailed | ErrorKind::OrphanedIdentity | ErrorKind::ProviderRejected
		)
	}
}
