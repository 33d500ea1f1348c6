// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::access_control::AccessControl;
use crate::error::Result;
use crate::pipeline::{grant_or_delegate, AuthorizationHandler, AuthorizationMiddleware};
use crate::request::AuthorizationRequest;
use crate::response::AuthorizationResponse;

/// Pipeline stage backed by a role-based strategy.
pub struct RbacMiddleware {
	rbac: Box<dyn AccessControl>,
}

impl RbacMiddleware {
	pub const NAME: &'static str = "RbacMiddleware";
	pub const REASON: &'static str = "Checked against RBAC";

	pub fn new(rbac: impl AccessControl + 'static) -> Self {
		Self {
			rbac: Box::new(rbac),
		}
	}
}

impl AuthorizationMiddleware for RbacMiddleware {
	fn process(
		&self,
		request: &AuthorizationRequest,
		handler: &dyn AuthorizationHandler,
	) -> Result<AuthorizationResponse> {
		grant_or_delegate(
			self.rbac.as_ref(),
			request,
			handler,
			|| Self::REASON.to_string(),
			Self::NAME,
		)
	}
}
