// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lms_common_secret::SecretString;
use std::time::Duration;

use crate::error::CognitoError;

/// Default upper bound on a single Cognito call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Cognito user-pool client.
///
/// Built once at startup and immutable afterwards. The `client_secret` is only
/// present for app clients created with a secret; when set, every call carries
/// a `SECRET_HASH`.
#[derive(Debug, Clone)]
pub struct CognitoConfig {
	/// AWS region hosting the pool, e.g. `ap-northeast-2`.
	pub region: String,
	/// App client id.
	pub client_id: String,
	/// User pool id, always prefixed with `{region}_`.
	pub user_pool_id: String,
	/// App client secret (wrapped to prevent logging).
	pub client_secret: Option<SecretString>,
	/// Endpoint override for emulators and tests.
	pub endpoint: Option<String>,
	pub timeout: Duration,
}

impl CognitoConfig {
	pub fn new(
		region: impl Into<String>,
		client_id: impl Into<String>,
		user_pool_id: impl Into<String>,
	) -> Self {
		Self {
			region: region.into(),
			client_id: client_id.into(),
			user_pool_id: user_pool_id.into(),
			client_secret: None,
			endpoint: None,
			timeout: DEFAULT_TIMEOUT,
		}
	}

	pub fn with_client_secret(mut self, secret: SecretString) -> Self {
		self.client_secret = Some(secret);
		self
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = Some(endpoint.into());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Validate that all required fields are present and consistent.
	///
	/// # Errors
	///
	/// Returns [`CognitoError::InvalidConfig`] describing the first problem found.
	pub fn validate(&self) -> Result<(), CognitoError> {
		if self.region.trim().is_empty() {
			return Err(CognitoError::InvalidConfig("region cannot be empty".to_string()));
		}
		if self.client_id.trim().is_empty() {
			return Err(CognitoError::InvalidConfig(
				"client_id cannot be empty".to_string(),
			));
		}
		if self.user_pool_id.trim().is_empty() {
			return Err(CognitoError::InvalidConfig(
				"user_pool_id cannot be empty".to_string(),
			));
		}
		if !self.user_pool_id.starts_with(&format!("{}_", self.region)) {
			return Err(CognitoError::InvalidConfig(format!(
				"user_pool_id '{}' does not belong to region '{}'",
				self.user_pool_id, self.region
			)));
		}
		if self.client_secret.as_ref().is_some_and(|s| s.is_empty()) {
			return Err(CognitoError::InvalidConfig(
				"client_secret cannot be empty when set".to_string(),
			));
		}
		if self.timeout.is_zero() {
			return Err(CognitoError::InvalidConfig(
				"timeout must be greater than zero".to_string(),
			));
		}
		Ok(())
	}

	/// URL every operation is POSTed to.
	pub fn endpoint_url(&self) -> String {
		match &self.endpoint {
			Some(endpoint) => format!("{}/", endpoint.trim_end_matches('/')),
			None => format!("https://cognito-idp.{}.amazonaws.com/", self.region),
		}
	}
}
