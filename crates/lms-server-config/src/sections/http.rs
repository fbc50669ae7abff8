// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Listener address for the signup and login routes.

use serde::Deserialize;

use crate::error::ConfigError;

/// Resolved listener. Defaults to every interface on 8080.
#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: HttpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
	}

	pub fn finalize(self) -> Result<HttpConfig, ConfigError> {
		let defaults = HttpConfig::default();
		let host = self.host.unwrap_or(defaults.host);
		if host.trim().is_empty() {
			return Err(ConfigError::InvalidValue {
				key: "http.host".to_string(),
				message: "listener host cannot be blank".to_string(),
			});
		}
		Ok(HttpConfig {
			host,
			port: self.port.unwrap_or(defaults.port),
		})
	}
}
