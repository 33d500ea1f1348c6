// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use tracing::trace;

use crate::access_control::AccessControl;
use crate::entity::AuthorizationEntity;
use crate::rbac::RoleProvider;
use crate::request::Context;

/// Role-based strategy: grants when any permission of any of the actor's
/// roles matches. Roles are visited in provider order, then permissions in
/// role order.
#[derive(Clone)]
pub struct RoleBasedAccessControl {
	role_provider: Arc<dyn RoleProvider>,
}

impl RoleBasedAccessControl {
	pub fn new(role_provider: Arc<dyn RoleProvider>) -> Self {
		Self { role_provider }
	}
}

impl AccessControl for RoleBasedAccessControl {
	fn has_access(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool {
		let roles = self.role_provider.roles_for_actor(actor);

		for role in &roles {
			let granted = role.permissions().iter().any(|permission| {
				permission.matches_resource(resource)
					&& permission.matches_action(action)
					&& permission.matches_context(actor, resource, action, context)
			});

			if granted {
				trace!(role = role.name(), %actor, %resource, action, "RBAC permission matched");
				return true;
			}
		}

		false
	}

	fn name(&self) -> &str {
		"RoleBasedAccessControl"
	}
}
