// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router.

use std::sync::Arc;

use axum::{
	routing::{get, post},
	Router,
};
use lms_server_auth::IdentityProvider;
use lms_server_auth_cognito::CognitoConfig as CognitoClientConfig;
use lms_server_config::CognitoConfig;
use lms_server_db::UserRepository;
use sqlx::sqlite::SqlitePool;

use crate::{credentials::CredentialService, routes};

/// Shared state for all handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
	pub credentials: Arc<CredentialService>,
	pub users: UserRepository,
}

/// Build the application state around a migrated pool and a provider.
pub fn create_app_state(pool: SqlitePool, provider: Arc<dyn IdentityProvider>) -> AppState {
	let users = UserRepository::new(pool);
	let credentials = CredentialService::new(provider, Arc::new(users.clone()));

	AppState {
		credentials: Arc::new(credentials),
		users,
	}
}

/// Translate the resolved configuration section into the adapter's settings.
pub fn cognito_client_config(config: &CognitoConfig) -> CognitoClientConfig {
	let mut client_config =
		CognitoClientConfig::new(&config.region, &config.client_id, &config.user_pool_id)
			.with_timeout(config.timeout);

	if let Some(secret) = &config.client_secret {
		client_config = client_config.with_client_secret(secret.clone());
	}
	if let Some(endpoint) = &config.endpoint {
		client_config = client_config.with_endpoint(endpoint);
	}

	client_config
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/auth/join", post(routes::auth::join))
		.route("/api/auth/login", post(routes::auth::login))
		.with_state(state)
}
