// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response bodies of the Cognito JSON 1.1 protocol.

use serde::{Deserialize, Serialize};

pub(crate) const USER_PASSWORD_AUTH: &str = "USER_PASSWORD_AUTH";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AttributeType<'a> {
	pub name: &'a str,
	pub value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SignUpRequest<'a> {
	pub client_id: &'a str,
	pub username: &'a str,
	pub password: &'a str,
	pub user_attributes: Vec<AttributeType<'a>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secret_hash: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SignUpResponse {
	#[serde(default)]
	pub user_confirmed: bool,
	pub user_sub: String,
}

#[derive(Serialize)]
pub(crate) struct AuthParameters<'a> {
	#[serde(rename = "USERNAME")]
	pub username: &'a str,
	#[serde(rename = "PASSWORD")]
	pub password: &'a str,
	#[serde(rename = "SECRET_HASH", skip_serializing_if = "Option::is_none")]
	pub secret_hash: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthRequest<'a> {
	pub auth_flow: &'static str,
	pub client_id: &'a str,
	pub auth_parameters: AuthParameters<'a>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthResponse {
	pub authentication_result: Option<AuthenticationResultType>,
	pub challenge_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthenticationResultType {
	pub access_token: Option<String>,
	pub id_token: Option<String>,
	pub refresh_token: Option<String>,
}

// Token values must not reach logs.
impl std::fmt::Debug for AuthenticationResultType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthenticationResultType")
			.field("access_token", &self.access_token.is_some())
			.field("id_token", &self.id_token.is_some())
			.field("refresh_token", &self.refresh_token.is_some())
			.finish()
	}
}
