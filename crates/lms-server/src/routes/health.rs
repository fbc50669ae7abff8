// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lms_server_api::{HealthResponse, HealthStatus};

use crate::{api::AppState, health, version::VERSION};

/// GET /health - Database reachability and build version.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let database = health::check_database(&state.users).await;
	let status = database.status;

	let response = HealthResponse {
		status,
		database,
		version: VERSION.to_string(),
	};

	let http_status = match status {
		HealthStatus::Healthy => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	(http_status, Json(response))
}
