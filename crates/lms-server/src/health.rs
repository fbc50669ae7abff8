// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health check components.

use std::time::Duration;

use lms_server_api::{DatabaseHealth, HealthStatus};
use lms_server_db::UserRepository;
use tokio::time::{timeout, Instant};

const DB_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Check database connectivity with a bounded wait.
pub async fn check_database(repo: &UserRepository) -> DatabaseHealth {
	let start = Instant::now();

	let result = timeout(DB_CHECK_TIMEOUT, repo.health_check()).await;
	let latency_ms = start.elapsed().as_millis() as u64;

	match result {
		Ok(Ok(())) => DatabaseHealth {
			status: HealthStatus::Healthy,
			latency_ms,
			error: None,
		},
		Ok(Err(e)) => DatabaseHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			error: Some(e.to_string()),
		},
		Err(_) => DatabaseHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			error: Some("database health check timed out".to_string()),
		},
	}
}
