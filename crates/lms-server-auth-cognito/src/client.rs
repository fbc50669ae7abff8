// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use lms_common_secret::SecretString;
use lms_server_auth::{
	AuthenticationResult, IdentityProvider, ProviderError, ProviderErrorKind, SignUpReceipt,
	UserAttribute,
};
use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::CognitoConfig;
use crate::error::{self, CognitoError};
use crate::secret_hash::secret_hash;
use crate::wire::{
	AttributeType, AuthParameters, InitiateAuthRequest, InitiateAuthResponse, SignUpRequest,
	SignUpResponse, USER_PASSWORD_AUTH,
};

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const AMZ_TARGET: &str = "X-Amz-Target";
const AMZ_ERROR_TYPE: &str = "x-amzn-ErrorType";
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";

/// Cognito user-pool client.
///
/// Holds one pooled `reqwest::Client`; build it once and share it behind an
/// `Arc<dyn IdentityProvider>`. Every operation is a single request with the
/// configured timeout and no retry.
#[derive(Debug, Clone)]
pub struct CognitoClient {
	config: CognitoConfig,
	endpoint: String,
	http_client: reqwest::Client,
}

impl CognitoClient {
	/// Create a new client after validating `config`.
	///
	/// # Errors
	///
	/// - [`CognitoError::InvalidConfig`]: the configuration failed validation.
	/// - [`CognitoError::HttpClient`]: the HTTP client could not be built.
	#[tracing::instrument(skip_all, name = "CognitoClient::new")]
	pub fn new(config: CognitoConfig) -> Result<Self, CognitoError> {
		config.validate()?;

		let http_client = lms_common_http::builder_with_timeout(config.timeout).build()?;
		let endpoint = config.endpoint_url();

		tracing::debug!(
			region = %config.region,
			user_pool_id = %config.user_pool_id,
			endpoint = %endpoint,
			has_client_secret = config.client_secret.is_some(),
			"Cognito client ready"
		);

		Ok(Self {
			config,
			endpoint,
			http_client,
		})
	}

	pub fn config(&self) -> &CognitoConfig {
		&self.config
	}

	fn secret_hash_for(&self, username: &str) -> Option<String> {
		self
			.config
			.client_secret
			.as_ref()
			.map(|secret| secret_hash(secret, username, &self.config.client_id))
	}

	/// POST one operation and decode the success body.
	async fn call<B, R>(&self, operation: &str, body: &B) -> Result<R, ProviderError>
	where
		B: Serialize,
		R: DeserializeOwned,
	{
		let payload = serde_json::to_vec(body).map_err(|e| {
			ProviderError::new(
				ProviderErrorKind::Unknown,
				format!("failed to encode {operation} request: {e}"),
			)
		})?;

		let response = self
			.http_client
			.post(&self.endpoint)
			.header(CONTENT_TYPE, AMZ_JSON)
			.header(AMZ_TARGET, format!("{TARGET_PREFIX}.{operation}"))
			.body(payload)
			.send()
			.await
			.map_err(|e| error::from_transport(&e))?;

		let status = response.status();
		let error_type = response
			.headers()
			.get(AMZ_ERROR_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(str::to_string);
		let bytes = response
			.bytes()
			.await
			.map_err(|e| error::from_transport(&e))?;

		if !status.is_success() {
			let err = error::from_response(status.as_u16(), error_type.as_deref(), &bytes);
			tracing::debug!(
				operation,
				status = status.as_u16(),
				kind = %err.kind,
				code = ?err.code,
				"Cognito returned an error"
			);
			return Err(err);
		}

		serde_json::from_slice(&bytes).map_err(|e| {
			ProviderError::new(
				ProviderErrorKind::MalformedResponse,
				format!("failed to parse {operation} response: {e}"),
			)
		})
	}
}

#[async_trait]
impl IdentityProvider for CognitoClient {
	#[tracing::instrument(skip(self, password, attributes), fields(client_id = %self.config.client_id))]
	async fn sign_up(
		&self,
		username: &str,
		password: &SecretString,
		attributes: &[UserAttribute],
	) -> Result<SignUpReceipt, ProviderError> {
		let request = SignUpRequest {
			client_id: &self.config.client_id,
			username,
			password: password.expose(),
			user_attributes: attributes
				.iter()
				.map(|a| AttributeType {
					name: &a.name,
					value: &a.value,
				})
				.collect(),
			secret_hash: self.secret_hash_for(username),
		};

		let response: SignUpResponse = self.call("SignUp", &request).await?;

		tracing::info!(
			user_sub = %response.user_sub,
			user_confirmed = response.user_confirmed,
			"Cognito sign up succeeded"
		);

		Ok(SignUpReceipt {
			user_sub: response.user_sub,
			user_confirmed: response.user_confirmed,
		})
	}

	#[tracing::instrument(skip(self, password), fields(client_id = %self.config.client_id))]
	async fn initiate_auth(
		&self,
		username: &str,
		password: &SecretString,
	) -> Result<AuthenticationResult, ProviderError> {
		let request = InitiateAuthRequest {
			auth_flow: USER_PASSWORD_AUTH,
			client_id: &self.config.client_id,
			auth_parameters: AuthParameters {
				username,
				password: password.expose(),
				secret_hash: self.secret_hash_for(username),
			},
		};

		let response: InitiateAuthResponse = self.call("InitiateAuth", &request).await?;

		if let Some(challenge) = response.challenge_name {
			return Err(ProviderError::new(
				ProviderErrorKind::ChallengeRequired,
				format!("authentication requires challenge {challenge}"),
			)
			.with_code(challenge));
		}

		let result = response.authentication_result.ok_or_else(|| {
			ProviderError::new(
				ProviderErrorKind::MalformedResponse,
				"response has neither tokens nor a challenge",
			)
		})?;

		match (result.access_token, result.id_token, result.refresh_token) {
			(Some(access), Some(id), Some(refresh)) => {
				tracing::debug!("Cognito authentication succeeded");
				Ok(AuthenticationResult::new(access, id, refresh))
			}
			_ => Err(ProviderError::new(
				ProviderErrorKind::MalformedResponse,
				"authentication result is missing a token",
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_rejects_invalid_config() {
		let config = CognitoConfig::new("us-east-1", "", "us-east-1_abc");
		assert!(matches!(
			CognitoClient::new(config),
			Err(CognitoError::InvalidConfig(_))
		));
	}

	#[test]
	fn secret_hash_only_with_client_secret() {
		let config = CognitoConfig::new("us-east-1", "client-id", "us-east-1_abc");
		let client = CognitoClient::new(config.clone()).unwrap();
		assert!(client.secret_hash_for("a@x.com").is_none());

		let client =
			CognitoClient::new(config.with_client_secret(SecretString::from("client-secret")))
				.unwrap();
		assert_eq!(
			client.secret_hash_for("a@x.com").as_deref(),
			Some("nlsSpzH3loym0tnIrfyA1ggsDNdDzDDrYJCGJYLPbt4=")
		);
	}
}
