// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where the gateway keeps its local user records.

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_URL: &str = "sqlite:./lms.db";

/// Resolved user store location. Only SQLite URLs are accepted.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
	pub url: String,
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			url: DEFAULT_URL.to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfigLayer {
	#[serde(default)]
	pub url: Option<String>,
}

impl DatabaseConfigLayer {
	pub fn merge(&mut self, other: DatabaseConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
	}

	pub fn finalize(self) -> Result<DatabaseConfig, ConfigError> {
		let url = self.url.unwrap_or_else(|| DEFAULT_URL.to_string());
		if !url.starts_with("sqlite:") {
			return Err(ConfigError::InvalidValue {
				key: "database.url".to_string(),
				message: format!("user store must be a sqlite: URL, got '{url}'"),
			});
		}
		Ok(DatabaseConfig { url })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_local_user_store() {
		let config = DatabaseConfigLayer::default().finalize().unwrap();
		assert_eq!(config.url, "sqlite:./lms.db");
	}

	#[test]
	fn custom_sqlite_path_is_kept() {
		let layer = DatabaseConfigLayer {
			url: Some("sqlite:/var/lib/lms/users.db".to_string()),
		};
		assert_eq!(layer.finalize().unwrap().url, "sqlite:/var/lib/lms/users.db");
	}

	#[test]
	fn non_sqlite_url_is_refused() {
		let layer = DatabaseConfigLayer {
			url: Some("postgres://localhost/lms".to_string()),
		};
		let err = layer.finalize().unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "database.url"));
	}
}
