// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The local user record created after a successful provider signup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::role::Role;

/// Unique identifier for a local user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
	pub fn new(id: Uuid) -> Self {
		Self(id)
	}

	pub fn generate() -> Self {
		Self(Uuid::new_v4())
	}

	pub fn into_inner(self) -> Uuid {
		self.0
	}
}

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<Uuid> for UserId {
	fn from(id: Uuid) -> Self {
		Self(id)
	}
}

/// A registered user.
///
/// `email` doubles as the provider-facing username. Records are soft-deleted
/// through `is_deleted` and never removed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub user_name: String,
	pub email: String,
	pub telephone: String,
	pub role: Role,
	/// Subject the identity provider assigned at signup, if it reported one.
	pub provider_subject: Option<String>,
	pub created_at: DateTime<Utc>,
	pub is_deleted: bool,
}

impl User {
	/// Build a fresh, not-deleted user stamped with the current time.
	///
	/// Taking a parsed [`Role`] keeps the closed-set invariant at construction.
	pub fn new(
		user_name: impl Into<String>,
		email: impl Into<String>,
		telephone: impl Into<String>,
		role: Role,
		provider_subject: Option<String>,
	) -> Self {
		Self {
			id: UserId::generate(),
			user_name: user_name.into(),
			email: email.into(),
			telephone: telephone.into(),
			role,
			provider_subject,
			created_at: Utc::now(),
			is_deleted: false,
		}
	}
}
