// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cognito user-pool configuration section.

use lms_common_secret::SecretString;
use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Cognito configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct CognitoConfig {
	pub region: String,
	pub client_id: String,
	pub user_pool_id: String,
	/// App client secret; absent for public app clients.
	pub client_secret: Option<SecretString>,
	/// Endpoint override; `None` means the regional endpoint.
	pub endpoint: Option<String>,
	pub timeout: Duration,
}

/// Configuration layer for Cognito (all fields optional for layering).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CognitoConfigLayer {
	#[serde(default)]
	pub region: Option<String>,
	#[serde(default)]
	pub client_id: Option<String>,
	#[serde(default)]
	pub user_pool_id: Option<String>,
	/// Prefer `LMS_SERVER_COGNITO_CLIENT_SECRET_FILE` over putting this in TOML.
	#[serde(default)]
	pub client_secret: Option<SecretString>,
	#[serde(default)]
	pub endpoint: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl CognitoConfigLayer {
	/// Merge with another layer, preferring values from `other`.
	pub fn merge(&mut self, other: CognitoConfigLayer) {
		if other.region.is_some() {
			self.region = other.region;
		}
		if other.client_id.is_some() {
			self.client_id = other.client_id;
		}
		if other.user_pool_id.is_some() {
			self.user_pool_id = other.user_pool_id;
		}
		if other.client_secret.is_some() {
			self.client_secret = other.client_secret;
		}
		if other.endpoint.is_some() {
			self.endpoint = other.endpoint;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	/// Build the final config.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Validation`] when a required field is missing,
	/// the pool id does not belong to the region, or the timeout is zero.
	pub fn finalize(self) -> Result<CognitoConfig, ConfigError> {
		let region = required(self.region, "cognito.region", "LMS_SERVER_COGNITO_REGION")?;
		let client_id = required(
			self.client_id,
			"cognito.client_id",
			"LMS_SERVER_COGNITO_CLIENT_ID",
		)?;
		let user_pool_id = required(
			self.user_pool_id,
			"cognito.user_pool_id",
			"LMS_SERVER_COGNITO_USER_POOL_ID",
		)?;

		if !user_pool_id.starts_with(&format!("{region}_")) {
			return Err(ConfigError::Validation(format!(
				"cognito.user_pool_id '{user_pool_id}' must start with '{region}_'"
			)));
		}

		let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
		if timeout_secs == 0 {
			return Err(ConfigError::Validation(
				"cognito.timeout_secs must be greater than zero".to_string(),
			));
		}

		Ok(CognitoConfig {
			region,
			client_id,
			user_pool_id,
			client_secret: self.client_secret.filter(|s| !s.is_empty()),
			endpoint: self.endpoint.filter(|s| !s.trim().is_empty()),
			timeout: Duration::from_secs(timeout_secs),
		})
	}
}

fn required(value: Option<String>, key: &str, env: &str) -> Result<String, ConfigError> {
	value
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
		.ok_or_else(|| ConfigError::Validation(format!("{key} is required (set {env})")))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn layer() -> CognitoConfigLayer {
		CognitoConfigLayer {
			region: Some("ap-northeast-2".to_string()),
			client_id: Some("client-id".to_string()),
			user_pool_id: Some("ap-northeast-2_AbCdEf".to_string()),
			..Default::default()
		}
	}

	#[test]
	fn test_finalize_defaults() {
		let config = layer().finalize().unwrap();
		assert_eq!(config.timeout, Duration::from_secs(10));
		assert!(config.client_secret.is_none());
		assert!(config.endpoint.is_none());
	}

	#[test]
	fn test_missing_required_field() {
		let mut l = layer();
		l.client_id = None;
		let err = l.finalize().unwrap_err();
		assert!(err.to_string().contains("LMS_SERVER_COGNITO_CLIENT_ID"));
	}

	#[test]
	fn test_blank_required_field() {
		let mut l = layer();
		l.region = Some("  ".to_string());
		assert!(l.finalize().is_err());
	}

	#[test]
	fn test_pool_region_mismatch() {
		let mut l = layer();
		l.user_pool_id = Some("us-east-1_AbCdEf".to_string());
		let err = l.finalize().unwrap_err();
		assert!(err.to_string().contains("must start with 'ap-northeast-2_'"));
	}

	#[test]
	fn test_zero_timeout() {
		let mut l = layer();
		l.timeout_secs = Some(0);
		assert!(l.finalize().is_err());
	}

	#[test]
	fn test_merge_prefers_other() {
		let mut base = layer();
		base.merge(CognitoConfigLayer {
			client_id: Some("other-client".to_string()),
			timeout_secs: Some(3),
			..Default::default()
		});
		let config = base.finalize().unwrap();
		assert_eq!(config.client_id, "other-client");
		assert_eq!(config.region, "ap-northeast-2");
		assert_eq!(config.timeout, Duration::from_secs(3));
	}

	#[test]
	fn test_deserialize_from_toml() {
		let toml_str = r#"
region = "ap-northeast-2"
client_id = "client-id"
user_pool_id = "ap-northeast-2_AbCdEf"
client_secret = "abc123def456"
timeout_secs = 5
"#;
		let layer: CognitoConfigLayer = toml::from_str(toml_str).unwrap();
		let config = layer.finalize().unwrap();
		assert_eq!(
			config.client_secret.as_ref().map(|s| s.expose().as_str()),
			Some("abc123def456")
		);
		assert!(!format!("{config:?}").contains("abc123def456"));
	}
}
