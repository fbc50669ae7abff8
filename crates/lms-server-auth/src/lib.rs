// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Domain model for the LMS authentication gateway.
//!
//! This crate provides:
//! - The closed [`Role`] set and the local [`User`] record
//! - Join/login submissions and the provider-issued [`AuthenticationResult`]
//! - The [`IdentityProvider`] seam implemented by provider adapters
//! - The [`GatewayError`] taxonomy and the translation into caller-safe
//!   [`Rejection`]s
//!
//! # Security Considerations
//!
//! - Passwords and tokens use [`lms_common_secret::SecretString`] to prevent accidental logging
//! - Provider error detail is logged under a diagnostic reference and never returned to callers
//! - Login does not distinguish an unknown user from a wrong password

pub mod credentials;
pub mod error;
pub mod provider;
pub mod role;
pub mod translate;
pub mod user;

pub use credentials::{AuthenticationResult, JoinRequest, LoginRequest};
pub use error::{AuthFailure, ErrorKind, GatewayError, SignUpFailure};
pub use provider::{
	IdentityProvider, ProviderError, ProviderErrorKind, SignUpReceipt, UserAttribute,
	NAME_ATTRIBUTE, ROLE_ATTRIBUTE,
};
pub use role::{Role, RoleParseError};
pub use translate::{classify_auth, classify_sign_up, Rejection};
pub use user::{User, UserId};

pub use lms_common_secret::SecretString;
