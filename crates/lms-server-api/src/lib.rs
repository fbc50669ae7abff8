// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod auth;
pub mod health;

pub use auth::{
	AuthErrorResponse, JoinRequest, JoinResponse, JoinStatus, LoginRequest, LoginResponse,
	JOIN_FAILED_MESSAGE, JOIN_SUCCESS_MESSAGE,
};
pub use health::{DatabaseHealth, HealthResponse, HealthStatus};
