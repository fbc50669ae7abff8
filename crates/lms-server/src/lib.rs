// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! LMS authentication gateway server.
//!
//! This crate wires the credential flows to an HTTP surface: signup and login
//! are delegated to the configured identity provider, and the local user
//! record is kept in SQLite.

pub mod api;
pub mod credentials;
pub mod error;
pub mod health;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, AppState};
pub use credentials::CredentialService;
pub use error::ServerError;
pub use lms_server_config::ServerConfig;
