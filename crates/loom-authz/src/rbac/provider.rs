// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use crate::entity::AuthorizationEntity;
use crate::rbac::RolesCollection;

/// Resolves the roles held by an actor.
///
/// Must be total: an unknown actor gets an empty collection, never an error.
pub trait RoleProvider: Send + Sync {
	fn roles_for_actor(&self, actor: &AuthorizationEntity) -> RolesCollection;
}

/// In-memory role map keyed by canonical actor identity (`type::id`).
#[derive(Debug, Clone, Default)]
pub struct BasicRoleProvider {
	role_map: HashMap<String, RolesCollection>,
}

impl BasicRoleProvider {
	pub fn new(role_map: HashMap<String, RolesCollection>) -> Self {
		Self { role_map }
	}
}

impl FromIterator<(String, RolesCollection)> for BasicRoleProvider {
	fn from_iter<I: IntoIterator<Item = (String, RolesCollection)>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl RoleProvider for BasicRoleProvider {
	fn roles_for_actor(&self, actor: &AuthorizationEntity) -> RolesCollection {
		self.role_map
			.get(&actor.identity())
			.cloned()
			.unwrap_or_default()
	}
}
