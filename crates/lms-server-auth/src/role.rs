// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed set of roles a user can sign up with.
//!
//! Parsing is exact and case-sensitive. There is no fallback role: anything
//! outside the set is rejected before the identity provider is contacted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization category attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	/// Enrolls in and attends courses.
	Student,
	/// Creates and runs courses.
	Instructor,
}

impl Role {
	/// Returns all valid roles.
	pub fn all() -> &'static [Role] {
		&[Role::Student, Role::Instructor]
	}

	/// Canonical form, used on the wire, in storage and as the provider attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Student => "STUDENT",
			Role::Instructor => "INSTRUCTOR",
		}
	}

	/// Parse a raw role string.
	pub fn parse(raw: &str) -> Result<Role, RoleParseError> {
		raw.parse()
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = RoleParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::all()
			.iter()
			.copied()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| RoleParseError {
				value: s.to_string(),
			})
	}
}

/// The submitted role is not one of [`Role::all`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid role")]
pub struct RoleParseError {
	pub value: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn parses_every_member() {
		assert_eq!(Role::parse("STUDENT").unwrap(), Role::Student);
		assert_eq!(Role::parse("INSTRUCTOR").unwrap(), Role::Instructor);
	}

	#[test]
	fn rejects_unknown_role() {
		let err = Role::parse("WIZARD").unwrap_err();
		assert_eq!(err.value, "WIZARD");
		assert_eq!(err.to_string(), "'WIZARD' is not a valid role");
	}

	#[test]
	fn parsing_is_case_sensitive() {
		assert!(Role::parse("student").is_err());
		assert!(Role::parse("Student").is_err());
		assert!(Role::parse(" STUDENT").is_err());
		assert!(Role::parse("").is_err());
	}

	#[test]
	fn serde_uses_canonical_form() {
		assert_eq!(serde_json::to_string(&Role::Instructor).unwrap(), "\"INSTRUCTOR\"");
		let role: Role = serde_json::from_str("\"STUDENT\"").unwrap();
		assert_eq!(role, Role::Student);
	}

	proptest! {
		#[test]
		fn display_roundtrips(idx in 0usize..2) {
			let role = Role::all()[idx];
			prop_assert_eq!(Role::parse(&role.to_string()).unwrap(), role);
		}

		#[test]
		fn strings_outside_the_set_fail(raw in "\\PC{0,24}") {
			prop_assume!(!Role::all().iter().any(|r| r.as_str() == raw));
			prop_assert!(Role::parse(&raw).is_err());
		}
	}
}
