// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User repository for database operations.
//!
//! Users are written once, after the identity provider accepted the signup.
//! Rows are never deleted; `is_deleted` marks a soft delete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lms_server_auth::{Role, User, UserId};
use sqlx::{sqlite::SqlitePool, Row};
use uuid::Uuid;

use crate::error::DbError;

#[async_trait]
pub trait UserStore: Send + Sync {
	async fn save(&self, user: &User) -> Result<(), DbError>;
	async fn exists_by_email(&self, email: &str) -> Result<bool, DbError>;
	async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DbError>;
}

/// Repository for user database operations.
///
/// All user IDs are UUIDs stored as strings in SQLite.
#[derive(Clone)]
pub struct UserRepository {
	pool: SqlitePool,
}

impl UserRepository {
	/// Create a new repository with the given connection pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a new user.
	///
	/// # Errors
	/// Returns `DbError::Conflict` if the email (or id) is already taken.
	#[tracing::instrument(skip(self, user), fields(user_id = %user.id, role = %user.role))]
	pub async fn save(&self, user: &User) -> Result<(), DbError> {
		sqlx::query(
			r#"
			INSERT INTO users (
				id, user_name, email, telephone, role,
				provider_subject, created_at, is_deleted
			) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(user.id.to_string())
		.bind(&user.user_name)
		.bind(&user.email)
		.bind(&user.telephone)
		.bind(user.role.as_str())
		.bind(&user.provider_subject)
		.bind(user.created_at.to_rfc3339())
		.bind(user.is_deleted as i32)
		.execute(&self.pool)
		.await
		.map_err(|e| match e {
			sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
				DbError::Conflict("User with this email already exists".to_string())
			}
			_ => DbError::Sqlx(e),
		})?;

		tracing::debug!(user_id = %user.id, "user saved");
		Ok(())
	}

	/// Whether any record, soft-deleted or not, holds this email.
	#[tracing::instrument(skip(self))]
	pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbError> {
		let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS found")
			.bind(email)
			.fetch_one(&self.pool)
			.await?;
		let found: i32 = row.get("found");
		Ok(found != 0)
	}

	/// Get a user by email.
	///
	/// # Returns
	/// `None` if no user has this email or the user is soft-deleted.
	#[tracing::instrument(skip(self))]
	pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT id, user_name, email, telephone, role,
				   provider_subject, created_at, is_deleted
			FROM users
			WHERE email = ? AND is_deleted = 0
			"#,
		)
		.bind(email)
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| self.row_to_user(&r)).transpose()
	}

	/// Cheap round trip used by the health endpoint.
	#[tracing::instrument(skip(self))]
	pub async fn health_check(&self) -> Result<(), DbError> {
		sqlx::query("SELECT 1").execute(&self.pool).await?;
		Ok(())
	}

	fn row_to_user(&self, row: &sqlx::sqlite::SqliteRow) -> Result<User, DbError> {
		let id_str: String = row.get("id");
		let id =
			Uuid::parse_str(&id_str).map_err(|e| DbError::Internal(format!("Invalid user ID: {e}")))?;

		let role_str: String = row.get("role");
		let role = Role::parse(&role_str).map_err(|e| DbError::Internal(format!("Invalid role: {e}")))?;

		let created_at_str: String = row.get("created_at");
		let created_at = DateTime::parse_from_rfc3339(&created_at_str)
			.map_err(|e| DbError::Internal(format!("Invalid created_at: {e}")))?
			.with_timezone(&Utc);

		let is_deleted: i32 = row.get("is_deleted");

		Ok(User {
			id: UserId::new(id),
			user_name: row.get("user_name"),
			email: row.get("email"),
			telephone: row.get("telephone"),
			role,
			provider_subject: row.get("provider_subject"),
			created_at,
			is_deleted: is_deleted != 0,
		})
	}
}

#[async_trait]
impl UserStore for UserRepository {
	async fn save(&self, user: &User) -> Result<(), DbError> {
		self.save(user).await
	}

	async fn exists_by_email(&self, email: &str) -> Result<bool, DbError> {
		self.exists_by_email(email).await
	}

	async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
		self.get_user_by_email(email).await
	}
}
