// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::access_control::AccessControl;
use crate::error::Result;
use crate::pipeline::{grant_or_delegate, AuthorizationHandler, AuthorizationMiddleware};
use crate::request::AuthorizationRequest;
use crate::response::AuthorizationResponse;

/// Pipeline stage backed by an attribute-based strategy.
pub struct AbacMiddleware {
	abac: Box<dyn AccessControl>,
}

impl AbacMiddleware {
	pub const NAME: &'static str = "AbacMiddleware";
	pub const REASON: &'static str = "Checked against ABAC";

	pub fn new(abac: impl AccessControl + 'static) -> Self {
		Self {
			abac: Box::new(abac),
		}
	}
}

impl AuthorizationMiddleware for AbacMiddleware {
	fn process(
		&self,
		request: &AuthorizationRequest,
		handler: &dyn AuthorizationHandler,
	) -> Result<AuthorizationResponse> {
		grant_or_delegate(
			self.abac.as_ref(),
			request,
			handler,
			|| Self::REASON.to_string(),
			Self::NAME,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::abac::{AttributeBasedAccessControl, BasicPolicy, BasicPolicyProvider};
	use crate::entity::AuthorizationEntity;
	use crate::pipeline::{AuthorizationPipeline, DenyAllMiddleware};
	use crate::request::Context;
	use std::sync::Arc;

	fn request(resource_id: &str, action: &str) -> AuthorizationRequest {
		AuthorizationRequest::new(
			AuthorizationEntity::new("user", "123").unwrap(),
			AuthorizationEntity::new("order", resource_id).unwrap(),
			action,
			Context::new(),
		)
		.unwrap()
	}

	fn pipeline() -> AuthorizationPipeline {
		let policy = BasicPolicy::new(
			|_: &AuthorizationEntity, resource: &AuthorizationEntity, action: &str, _: &Context| {
				resource.id() == "567" && action == "view"
			},
			"view order 567",
		);
		let abac =
			AttributeBasedAccessControl::new(Arc::new(BasicPolicyProvider::from_policies([policy])));

		AuthorizationPipeline::empty()
			.with_handler(AbacMiddleware::new(abac))
			.with_handler(DenyAllMiddleware)
	}

	#[test]
	fn permits_matching_request() {
		let response = pipeline().process(&request("567", "view")).unwrap();

		assert!(response.is_permitted());
		assert_eq!(response.reason(), Some(AbacMiddleware::REASON));
		assert_eq!(response.handler(), Some(AbacMiddleware::NAME));
	}

	#[test]
	fn delegates_non_matching_request() {
		let response = pipeline().process(&request("567", "delete")).unwrap();

		assert!(!response.is_permitted());
		assert_eq!(response.handler(), Some(DenyAllMiddleware::NAME));
	}
}
