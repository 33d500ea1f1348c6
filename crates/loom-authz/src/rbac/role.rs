// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use crate::collection::Collection;
use crate::rbac::{Permission, PermissionsCollection};

/// A named set of permissions.
pub trait Role: Send + Sync {
	fn name(&self) -> &str;
	fn permissions(&self) -> &PermissionsCollection;
}

/// Ordered roles of an actor.
pub type RolesCollection = Collection<Arc<dyn Role>>;

#[derive(Debug, Clone)]
pub struct BasicRole {
	name: String,
	permissions: PermissionsCollection,
}

impl BasicRole {
	pub fn new(name: impl Into<String>, permissions: PermissionsCollection) -> Self {
		Self {
			name: name.into(),
			permissions,
		}
	}

	/// Builds a role from concrete permissions.
	pub fn from_permissions<P>(name: impl Into<String>, permissions: impl IntoIterator<Item = P>) -> Self
	where
		P: Permission + 'static,
	{
		Self::new(
			name,
			permissions
				.into_iter()
				.map(|permission| Arc::new(permission) as Arc<dyn Permission>)
				.collect(),
		)
	}
}

impl Role for BasicRole {
	fn name(&self) -> &str {
		&self.name
	}

	fn permissions(&self) -> &PermissionsCollection {
		&self.permissions
	}
}
