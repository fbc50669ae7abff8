// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use lms_common_secret::SecretString;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// `SECRET_HASH` for an app client with a secret:
/// `Base64(HMAC-SHA256(key = client_secret, message = username + client_id))`.
pub fn secret_hash(client_secret: &SecretString, username: &str, client_id: &str) -> String {
	let mut mac = HmacSha256::new_from_slice(client_secret.expose().as_bytes())
		.expect("HMAC can take key of any size");
	mac.update(username.as_bytes());
	mac.update(client_id.as_bytes());
	STANDARD.encode(mac.finalize().into_bytes())
}
