// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors raised while assembling the gateway's runtime configuration.

use std::path::PathBuf;

/// Why the gateway refused to start with the configuration it was given.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// An environment variable or file key held a value of the wrong shape.
	#[error("{key} has an unusable value: {message}")]
	InvalidValue { key: String, message: String },

	#[error("gateway config {path} is not valid TOML: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("cannot read gateway config {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A required setting is missing or the resolved settings contradict each other.
	#[error("incomplete gateway configuration: {0}")]
	Validation(String),

	/// The Cognito app client secret could not be read from its file or variable.
	#[error("cannot load cognito client secret: {0}")]
	Secret(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_setting() {
		let err = ConfigError::InvalidValue {
			key: "LMS_SERVER_HTTP_PORT".to_string(),
			message: "expected a port number".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"LMS_SERVER_HTTP_PORT has an unusable value: expected a port number"
		);

		let err = ConfigError::Secret("file not found".to_string());
		assert_eq!(err.to_string(), "cannot load cognito client secret: file not found");
	}

	#[test]
	fn file_errors_keep_their_source() {
		use std::error::Error as _;

		let err = ConfigError::FileRead {
			path: PathBuf::from("/etc/lms/server.toml"),
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
		};
		assert!(err.to_string().starts_with("cannot read gateway config /etc/lms/server.toml"));
		assert!(err.source().is_some());
	}
}
