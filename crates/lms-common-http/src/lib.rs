// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction for the gateway.
//!
//! Every outbound client carries the same User-Agent and, for provider calls,
//! an explicit request timeout. Nothing here retries.

mod client;

pub use client::{builder, builder_with_timeout, user_agent};
