// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! # lms-server-db
//!
//! User persistence for the LMS auth gateway using SQLite via sqlx.
//!
//! ## Repository Pattern
//!
//! - **[`UserStore`] trait**: the interface the credential flows depend on
//! - **[`UserRepository`] struct**: concrete implementation holding a `SqlitePool`
//!
//! ## Error Handling
//!
//! | Variant | When to use |
//! |---------|-------------|
//! | `Conflict` | Unique constraint violation (duplicate email) |
//! | `Sqlx` | Unexpected database errors, propagated via `?` |
//! | `Internal` | Invalid stored data (unparseable UUID, role or timestamp) |
//!
//! ## Testing
//!
//! Tests use in-memory SQLite with the embedded migrations applied.

mod error;
pub mod pool;
pub mod user;

#[cfg(test)]
pub mod testing;

pub use error::DbError;
pub use pool::{create_pool, run_migrations};
pub use user::{UserRepository, UserStore};
