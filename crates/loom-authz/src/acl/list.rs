// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use tracing::trace;

use crate::access_control::AccessControl;
use crate::acl::AclEntry;
use crate::collection::Collection;
use crate::entity::{AuthorizationEntity, BasicEntityStringifier, EntityStringifier};
use crate::request::Context;

/// Ordered ACL entries.
pub type AclEntriesCollection = Collection<Arc<dyn AclEntry>>;

/// List-based strategy: grants when any entry matches actor, resource, action
/// and context. Entries are checked in order and the first match wins.
#[derive(Clone)]
pub struct AccessControlList {
	entries: AclEntriesCollection,
	stringifier: Arc<dyn EntityStringifier>,
}

impl AccessControlList {
	pub fn new(entries: AclEntriesCollection) -> Self {
		Self {
			entries,
			stringifier: Arc::new(BasicEntityStringifier),
		}
	}

	/// Builds a list from concrete entries.
	pub fn from_entries<E>(entries: impl IntoIterator<Item = E>) -> Self
	where
		E: AclEntry + 'static,
	{
		Self::new(
			entries
				.into_iter()
				.map(|entry| Arc::new(entry) as Arc<dyn AclEntry>)
				.collect(),
		)
	}

	/// Matches entries against identities rendered by `stringifier` instead of `type::id`.
	pub fn with_stringifier(mut self, stringifier: Arc<dyn EntityStringifier>) -> Self {
		self.stringifier = stringifier;
		self
	}

	pub fn entries(&self) -> &AclEntriesCollection {
		&self.entries
	}
}

impl AccessControl for AccessControlList {
	fn has_access(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool {
		if self.entries.is_empty() {
			return false;
		}

		let actor_id = self.stringifier.stringify(actor);
		let resource_id = self.stringifier.stringify(resource);

		let matched = self.entries.iter().position(|entry| {
			entry.matches_actor(&actor_id)
				&& entry.matches_resource(&resource_id)
				&& entry.matches_action(action)
				&& entry.matches_context(actor, resource, action, context)
		});

		if let Some(index) = matched {
			trace!(index, actor = %actor_id, resource = %resource_id, action, "ACL entry matched");
		}
		matched.is_some()
	}

	fn name(&self) -> &str {
		"AccessControlList"
	}
}

impl std::fmt::Debug for AccessControlList {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AccessControlList")
			.field("entries", &self.entries.len())
			.finish()
	}
}
