// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Signup and login HTTP handlers.

use axum::{
	extract::{rejection::JsonRejection, State},
	Json,
};
use lms_server_api::{JoinRequest, JoinResponse, LoginRequest, LoginResponse};
use lms_server_auth::GatewayError;

use crate::{api::AppState, error::ServerError};

/// POST /api/auth/join - Register a new user.
pub async fn join(
	State(state): State<AppState>,
	payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<Json<JoinResponse>, ServerError> {
	let Json(request) = payload.map_err(|e| ServerError::Join(unreadable_body(e)))?;
	state
		.credentials
		.join(request)
		.await
		.map_err(ServerError::Join)?;

	Ok(Json(JoinResponse::success()))
}

/// POST /api/auth/login - Exchange email and password for tokens.
pub async fn login(
	State(state): State<AppState>,
	payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ServerError> {
	let Json(request) = payload.map_err(|e| ServerError::Login(unreadable_body(e)))?;
	let tokens = state
		.credentials
		.login(request)
		.await
		.map_err(ServerError::Login)?;

	Ok(Json(LoginResponse::from(tokens)))
}

fn unreadable_body(rejection: JsonRejection) -> GatewayError {
	GatewayError::InvalidRequest(rejection.body_text())
}
