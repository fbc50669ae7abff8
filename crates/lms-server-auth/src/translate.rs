// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation of provider failures into the gateway taxonomy, and of gateway
//! errors into caller-safe rejections.

use uuid::Uuid;

use crate::error::{AuthFailure, ErrorKind, GatewayError, SignUpFailure};
use crate::provider::{ProviderError, ProviderErrorKind};

/// Classify a failed signup call.
pub fn classify_sign_up(kind: ProviderErrorKind) -> SignUpFailure {
	match kind {
		ProviderErrorKind::UserExists => SignUpFailure::DuplicateUser,
		ProviderErrorKind::InvalidPassword | ProviderErrorKind::InvalidParameter => {
			SignUpFailure::PolicyViolation
		}
		ProviderErrorKind::Throttled | ProviderErrorKind::Unavailable => SignUpFailure::Transient,
		ProviderErrorKind::Timeout => SignUpFailure::Timeout,
		_ => SignUpFailure::Rejected,
	}
}

/// Classify a failed authentication call.
pub fn classify_auth(kind: ProviderErrorKind) -> AuthFailure {
	match kind {
		ProviderErrorKind::NotAuthorized | ProviderErrorKind::UserNotFound => {
			AuthFailure::InvalidCredentials
		}
		ProviderErrorKind::UserNotConfirmed => AuthFailure::UserNotConfirmed,
		ProviderErrorKind::PasswordResetRequired | ProviderErrorKind::ChallengeRequired => {
			AuthFailure::ChallengeRequired
		}
		ProviderErrorKind::InvalidParameter => AuthFailure::InvalidRequest,
		ProviderErrorKind::Throttled | ProviderErrorKind::Unavailable => AuthFailure::Unavailable,
		ProviderErrorKind::Timeout => AuthFailure::Timeout,
		_ => AuthFailure::Rejected,
	}
}

impl GatewayError {
	/// Wrap a failed provider signup.
	pub fn from_sign_up(source: ProviderError) -> Self {
		GatewayError::ProviderSignUp {
			failure: classify_sign_up(source.kind),
			source: Some(source),
		}
	}

	/// Wrap a failed provider authentication.
	pub fn from_auth(source: ProviderError) -> Self {
		GatewayError::ProviderAuth {
			failure: classify_auth(source.kind),
			source,
		}
	}
}

/// What a caller is told about a failure.
///
/// Only the stable code, a fixed message and an opaque reference leave the
/// gateway. The full error is logged under the same reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
	pub kind: ErrorKind,
	pub message: &'static str,
	pub reference: Uuid,
}

impl Rejection {
	/// Log `error` under a fresh reference and return the caller-safe view of it.
	pub fn record(error: &GatewayError) -> Self {
		let kind = error.kind();
		let reference = Uuid::new_v4();

		if error.is_internal() {
			tracing::error!(
				%reference,
				code = kind.as_str(),
				error = %error,
				detail = ?error,
				"request failed"
			);
		} else {
			tracing::warn!(
				%reference,
				code = kind.as_str(),
				error = %error,
				detail = ?error,
				"request rejected"
			);
		}

		Self {
			kind,
			message: kind.public_message(),
			reference,
		}
	}

	pub fn code(&self) -> &'static str {
		self.kind.as_str()
	}

	pub fn status_code(&self) -> u16 {
		self.kind.status_code()
	}
}

impl From<&GatewayError> for Rejection {
	fn from(error: &GatewayError) -> Self {
		Rejection::record(error)
	}
}
