// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use tracing::trace;

use crate::abac::PolicyProvider;
use crate::access_control::AccessControl;
use crate::entity::AuthorizationEntity;
use crate::request::Context;

/// Attribute-based strategy: asks the provider for candidate policies once and
/// grants on the first one that evaluates to true.
#[derive(Clone)]
pub struct AttributeBasedAccessControl {
	policy_provider: Arc<dyn PolicyProvider>,
}

impl AttributeBasedAccessControl {
	pub fn new(policy_provider: Arc<dyn PolicyProvider>) -> Self {
		Self { policy_provider }
	}
}

impl AccessControl for AttributeBasedAccessControl {
	fn has_access(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool {
		let policies = self
			.policy_provider
			.policies(actor, resource, action, context);

		let granting = policies
			.iter()
			.find(|policy| policy.evaluate(actor, resource, action, context));

		match granting {
			Some(policy) => {
				trace!(policy = policy.description(), %actor, %resource, action, "ABAC policy matched");
				true
			}
			None => false,
		}
	}

	fn name(&self) -> &str {
		"AttributeBasedAccessControl"
	}
}
