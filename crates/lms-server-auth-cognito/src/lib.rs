// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! AWS Cognito user-pool adapter for the LMS auth gateway.
//!
//! Implements [`lms_server_auth::IdentityProvider`] over the Cognito JSON 1.1
//! protocol:
//!
//! 1. **SignUp** creates the identity with the `custom:role` and `name`
//!    attributes and returns the new user's subject.
//! 2. **InitiateAuth** runs the `USER_PASSWORD_AUTH` flow and returns the
//!    access, ID and refresh tokens unmodified.
//!
//! # Example
//!
//! ```rust,no_run
//! use lms_server_auth::IdentityProvider;
//! use lms_server_auth_cognito::{CognitoClient, CognitoConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CognitoConfig::new("ap-northeast-2", "client-id", "ap-northeast-2_AbCdEf");
//! let client = CognitoClient::new(config)?;
//!
//! let tokens = client.initiate_auth("a@x.com", &"Secret123!".into()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security Considerations
//!
//! - The app client secret is a [`lms_common_secret::SecretString`] and only
//!   leaves the process as an HMAC (`SECRET_HASH`).
//! - Tracing instrumentation skips passwords and tokens.

mod client;
mod config;
mod error;
mod secret_hash;
mod wire;

pub use client::CognitoClient;
pub use config::{CognitoConfig, DEFAULT_TIMEOUT};
pub use error::{classify_exception, CognitoError};
pub use secret_hash::secret_hash;
