// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::access_control::AccessControl;
use crate::error::Result;
use crate::pipeline::{grant_or_delegate, AuthorizationHandler, AuthorizationMiddleware};
use crate::request::AuthorizationRequest;
use crate::response::AuthorizationResponse;

/// Pipeline stage backed by an access control list.
pub struct AclMiddleware {
	acl: Box<dyn AccessControl>,
}

impl AclMiddleware {
	pub const NAME: &'static str = "AclMiddleware";
	pub const REASON: &'static str = "Checked against ACL";

	pub fn new(acl: impl AccessControl + 'static) -> Self {
		Self { acl: Box::new(acl) }
	}
}

impl AuthorizationMiddleware for AclMiddleware {
	fn process(
		&self,
		request: &AuthorizationRequest,
		handler: &dyn AuthorizationHandler,
	) -> Result<AuthorizationResponse> {
		grant_or_delegate(
			self.acl.as_ref(),
			request,
			handler,
			|| Self::REASON.to_string(),
			Self::NAME,
		)
	}
}
