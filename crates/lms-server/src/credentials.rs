// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Signup and login flows.
//!
//! Signup runs validate, role parse, local duplicate check, provider signup
//! and local persist, in that order. Nothing reaches the provider until the
//! request has passed every local check. The provider signup is never rolled
//! back; a failed persist is reported as [`GatewayError::Persistence`] and a
//! later resubmission as [`GatewayError::OrphanedIdentity`].

use std::sync::Arc;

use lms_server_auth::{
	AuthenticationResult, GatewayError, IdentityProvider, JoinRequest, LoginRequest,
	ProviderErrorKind, Role, SignUpFailure, User, UserAttribute,
};
use lms_server_db::UserStore;

/// Orchestrates the join and login flows against a provider and a user store.
#[derive(Clone)]
pub struct CredentialService {
	provider: Arc<dyn IdentityProvider>,
	users: Arc<dyn UserStore>,
}

impl CredentialService {
	pub fn new(provider: Arc<dyn IdentityProvider>, users: Arc<dyn UserStore>) -> Self {
		Self { provider, users }
	}

	/// Register a new user with the provider, then record it locally.
	#[tracing::instrument(skip(self, request), fields(email = %request.email, role = %request.role))]
	pub async fn join(&self, request: JoinRequest) -> Result<User, GatewayError> {
		request.validate().map_err(GatewayError::InvalidRequest)?;
		let role = Role::parse(&request.role)?;

		if self.is_registered(&request.email).await? {
			tracing::debug!("email already registered locally");
			return Err(GatewayError::ProviderSignUp {
				failure: SignUpFailure::DuplicateUser,
				source: None,
			});
		}

		let attributes = [
			UserAttribute::role(role),
			UserAttribute::display_name(request.user_name.clone()),
		];

		let receipt = match self
			.provider
			.sign_up(&request.email, &request.password, &attributes)
			.await
		{
			Ok(receipt) => receipt,
			Err(e) if e.kind == ProviderErrorKind::UserExists => {
				// A concurrent join may have saved the record since the pre-check.
				return if self.is_registered(&request.email).await? {
					Err(GatewayError::from_sign_up(e))
				} else {
					Err(GatewayError::OrphanedIdentity {
						email: request.email,
						source: e,
					})
				};
			}
			Err(e) => return Err(GatewayError::from_sign_up(e)),
		};

		let user = User::new(
			request.user_name,
			request.email,
			request.telephone,
			role,
			Some(receipt.user_sub.clone()),
		);

		if let Err(e) = self.users.save(&user).await {
			tracing::error!(
				email = %user.email,
				provider_subject = %receipt.user_sub,
				error = %e,
				"provider signup succeeded but the local record was not saved"
			);
			return Err(GatewayError::Persistence {
				email: user.email,
				provider_subject: receipt.user_sub,
				message: e.to_string(),
			});
		}

		tracing::info!(
			user_id = %user.id,
			user_confirmed = receipt.user_confirmed,
			"user signed up"
		);
		Ok(user)
	}

	/// Exchange credentials for the provider's token triple.
	#[tracing::instrument(skip(self, request), fields(email = %request.email))]
	pub async fn login(&self, request: LoginRequest) -> Result<AuthenticationResult, GatewayError> {
		request.validate().map_err(GatewayError::InvalidRequest)?;

		let tokens = self
			.provider
			.initiate_auth(&request.email, &request.password)
			.await
			.map_err(GatewayError::from_auth)?;

		tracing::info!("user authenticated");
		Ok(tokens)
	}

	async fn is_registered(&self, email: &str) -> Result<bool, GatewayError> {
		self.users
			.exists_by_email(email)
			.await
			.map_err(|e| GatewayError::Lookup {
				email: email.to_string(),
				message: e.to_string(),
			})
	}
}
