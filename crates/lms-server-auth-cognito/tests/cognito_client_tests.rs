// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP contract tests for the Cognito adapter against a mock endpoint.

use std::time::Duration;

use lms_common_secret::SecretString;
use lms_server_auth::{IdentityProvider, ProviderErrorKind, Role, UserAttribute};
use lms_server_auth_cognito::{CognitoClient, CognitoConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLIENT_ID: &str = "7lhlkkfbfb4q5kpp90urffao";

fn client_for(server: &MockServer) -> CognitoClient {
	let config = CognitoConfig::new("ap-northeast-2", CLIENT_ID, "ap-northeast-2_AbCdEf")
		.with_endpoint(server.uri());
	CognitoClient::new(config).unwrap()
}

fn password() -> SecretString {
	SecretString::from("Secret123!")
}

fn attributes() -> Vec<UserAttribute> {
	vec![
		UserAttribute::role(Role::Student),
		UserAttribute::display_name("Alice"),
	]
}

fn error_body(name: &str, message: &str) -> serde_json::Value {
	json!({ "__type": format!("com.amazonaws.cognito#{name}"), "message": message })
}

#[tokio::test]
async fn sign_up_sends_json_1_1_request_with_attributes() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/"))
		.and(header("content-type", "application/x-amz-json-1.1"))
		.and(header(
			"x-amz-target",
			"AWSCognitoIdentityProviderService.SignUp",
		))
		.and(body_partial_json(json!({
			"ClientId": CLIENT_ID,
			"Username": "a@x.com",
			"Password": "Secret123!",
			"UserAttributes": [
				{"Name": "custom:role", "Value": "STUDENT"},
				{"Name": "name", "Value": "Alice"}
			]
		})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"UserConfirmed": false,
			"UserSub": "5f6c1a2e-0000-4000-8000-000000000001"
		})))
		.expect(1)
		.mount(&server)
		.await;

	let receipt = client_for(&server)
		.sign_up("a@x.com", &password(), &attributes())
		.await
		.unwrap();

	assert_eq!(receipt.user_sub, "5f6c1a2e-0000-4000-8000-000000000001");
	assert!(!receipt.user_confirmed);
}

#[tokio::test]
async fn sign_up_includes_secret_hash_when_client_has_secret() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(body_partial_json(json!({
			"SecretHash": "9mZuA6TNCiVI+0zb1/9PtY0xXyGM4lriPArrE8DcvdU="
		})))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(json!({"UserConfirmed": true, "UserSub": "sub"})),
		)
		.expect(1)
		.mount(&server)
		.await;

	let config = CognitoConfig::new("ap-northeast-2", CLIENT_ID, "ap-northeast-2_AbCdEf")
		.with_endpoint(server.uri())
		.with_client_secret(SecretString::from("abc123def456"));
	let client = CognitoClient::new(config).unwrap();

	let receipt = client
		.sign_up("alice@example.com", &password(), &attributes())
		.await
		.unwrap();
	assert!(receipt.user_confirmed);
}

#[tokio::test]
async fn sign_up_duplicate_is_user_exists() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(400).set_body_json(error_body(
			"UsernameExistsException",
			"An account with the given email already exists.",
		)))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.sign_up("a@x.com", &password(), &attributes())
		.await
		.unwrap_err();

	assert_eq!(err.kind, ProviderErrorKind::UserExists);
	assert_eq!(err.code.as_deref(), Some("UsernameExistsException"));
}

#[tokio::test]
async fn sign_up_weak_password_is_invalid_password() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(400).set_body_json(error_body(
			"InvalidPasswordException",
			"Password did not conform with policy",
		)))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.sign_up("a@x.com", &SecretString::from("short"), &attributes())
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::InvalidPassword);
}

#[tokio::test]
async fn initiate_auth_returns_tokens_unmodified() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(header(
			"x-amz-target",
			"AWSCognitoIdentityProviderService.InitiateAuth",
		))
		.and(body_partial_json(json!({
			"AuthFlow": "USER_PASSWORD_AUTH",
			"ClientId": CLIENT_ID,
			"AuthParameters": {"USERNAME": "a@x.com", "PASSWORD": "Secret123!"}
		})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"AuthenticationResult": {
				"AccessToken": "AT1",
				"IdToken": "IT1",
				"RefreshToken": "RT1",
				"ExpiresIn": 3600,
				"TokenType": "Bearer"
			},
			"ChallengeParameters": {}
		})))
		.expect(1)
		.mount(&server)
		.await;

	let tokens = client_for(&server)
		.initiate_auth("a@x.com", &password())
		.await
		.unwrap();

	assert_eq!(tokens.access_token.expose(), "AT1");
	assert_eq!(tokens.id_token.expose(), "IT1");
	assert_eq!(tokens.refresh_token.expose(), "RT1");
}

#[tokio::test]
async fn initiate_auth_wrong_password_is_not_authorized() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(400).set_body_json(error_body(
			"NotAuthorizedException",
			"Incorrect username or password.",
		)))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.initiate_auth("a@x.com", &SecretString::from("wrong"))
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::NotAuthorized);
}

#[tokio::test]
async fn initiate_auth_challenge_is_a_failure() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"ChallengeName": "NEW_PASSWORD_REQUIRED",
			"Session": "opaque-session",
			"ChallengeParameters": {}
		})))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.initiate_auth("a@x.com", &password())
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::ChallengeRequired);
	assert_eq!(err.code.as_deref(), Some("NEW_PASSWORD_REQUIRED"));
}

#[tokio::test]
async fn initiate_auth_missing_token_is_malformed() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"AuthenticationResult": {"AccessToken": "AT1", "IdToken": "IT1"}
		})))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.initiate_auth("a@x.com", &password())
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::MalformedResponse);
}

#[tokio::test]
async fn unparseable_success_body_is_malformed() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_string("not json"))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.sign_up("a@x.com", &password(), &attributes())
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::MalformedResponse);
}

#[tokio::test]
async fn throttling_and_server_errors() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(400).set_body_json(error_body(
			"TooManyRequestsException",
			"Rate exceeded",
		)))
		.up_to_n_times(1)
		.mount(&server)
		.await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(500).set_body_string(""))
		.mount(&server)
		.await;

	let client = client_for(&server);
	let throttled = client.initiate_auth("a@x.com", &password()).await.unwrap_err();
	assert_eq!(throttled.kind, ProviderErrorKind::Throttled);

	let unavailable = client.initiate_auth("a@x.com", &password()).await.unwrap_err();
	assert_eq!(unavailable.kind, ProviderErrorKind::Unavailable);
}

#[tokio::test]
async fn error_type_header_is_honored() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(
			ResponseTemplate::new(400)
				.insert_header("x-amzn-ErrorType", "UserNotConfirmedException:")
				.set_body_string("{}"),
		)
		.mount(&server)
		.await;

	let err = client_for(&server)
		.initiate_auth("a@x.com", &password())
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::UserNotConfirmed);
}

#[tokio::test]
async fn slow_provider_times_out() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_delay(Duration::from_secs(2))
				.set_body_json(json!({"UserConfirmed": false, "UserSub": "sub"})),
		)
		.mount(&server)
		.await;

	let config = CognitoConfig::new("ap-northeast-2", CLIENT_ID, "ap-northeast-2_AbCdEf")
		.with_endpoint(server.uri())
		.with_timeout(Duration::from_millis(200));
	let client = CognitoClient::new(config).unwrap();

	let err = client
		.sign_up("a@x.com", &password(), &attributes())
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::Timeout);
}

#[tokio::test]
async fn unreachable_provider_is_unavailable() {
	let config = CognitoConfig::new("ap-northeast-2", CLIENT_ID, "ap-northeast-2_AbCdEf")
		.with_endpoint("http://127.0.0.1:1")
		.with_timeout(Duration::from_secs(2));
	let client = CognitoClient::new(config).unwrap();

	let err = client
		.initiate_auth("a@x.com", &password())
		.await
		.unwrap_err();
	assert_eq!(err.kind, ProviderErrorKind::Unavailable);
}
