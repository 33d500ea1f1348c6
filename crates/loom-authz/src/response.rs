// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Serialize;

/// Outcome of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationResponse {
	permitted: bool,
	reason: Option<String>,
	handler: Option<String>,
}

impl AuthorizationResponse {
	pub fn new(permitted: bool, reason: Option<String>, handler: Option<String>) -> Self {
		Self {
			permitted,
			reason,
			handler,
		}
	}

	/// A permit decision made by `handler`.
	pub fn permit(reason: impl Into<String>, handler: impl Into<String>) -> Self {
		Self::new(true, Some(reason.into()), Some(handler.into()))
	}

	/// A deny decision made by `handler`.
	pub fn deny(reason: impl Into<String>, handler: impl Into<String>) -> Self {
		Self::new(false, Some(reason.into()), Some(handler.into()))
	}

	pub fn is_permitted(&self) -> bool {
		self.permitted
	}

	pub fn reason(&self) -> Option<&str> {
		self.reason.as_deref()
	}

	/// Name of the component that produced this verdict.
	pub fn handler(&self) -> Option<&str> {
		self.handler.as_deref()
	}
}
