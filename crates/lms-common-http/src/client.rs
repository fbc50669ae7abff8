// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use reqwest::ClientBuilder;
use std::time::Duration;

/// Client builder preloaded with the gateway User-Agent.
pub fn builder() -> ClientBuilder {
	reqwest::Client::builder().user_agent(user_agent())
}

/// Client builder with the gateway User-Agent and an overall request timeout.
///
/// The timeout covers connect, send and reading the body, so a stalled
/// provider surfaces as `reqwest::Error::is_timeout()`.
///
/// ```ignore
/// let client = lms_common_http::builder_with_timeout(Duration::from_secs(10)).build()?;
/// ```
pub fn builder_with_timeout(timeout: Duration) -> ClientBuilder {
	builder().timeout(timeout).connect_timeout(timeout)
}

/// Format: `lms-auth-gateway/{crate version}`
pub fn user_agent() -> String {
	format!("lms-auth-gateway/{}", env!("CARGO_PKG_VERSION"))
}
