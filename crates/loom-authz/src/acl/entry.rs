// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use crate::entity::AuthorizationEntity;
use crate::matching::{self, ContextPredicate};
use crate::request::Context;

/// One rule of an access control list.
///
/// Actor and resource are matched against their stringified identities (see
/// [`EntityStringifier`](crate::EntityStringifier)); the context check sees the
/// full request.
pub trait AclEntry: Send + Sync {
	fn matches_actor(&self, actor: &str) -> bool;
	fn matches_resource(&self, resource: &str) -> bool;
	fn matches_action(&self, action: &str) -> bool;
	fn matches_context(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool;
}

/// ACL entry built from identity/action patterns and an optional predicate.
#[derive(Clone)]
pub struct BasicAclEntry {
	actor: String,
	resource: String,
	action: String,
	context: Option<ContextPredicate>,
}

impl BasicAclEntry {
	pub fn new(
		actor: impl Into<String>,
		resource: impl Into<String>,
		action: impl Into<String>,
	) -> Self {
		Self {
			actor: actor.into(),
			resource: resource.into(),
			action: action.into(),
			context: None,
		}
	}

	/// Restricts the entry to requests for which `predicate` holds.
	pub fn with_context<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&AuthorizationEntity, &AuthorizationEntity, &str, &Context) -> bool
			+ Send
			+ Sync
			+ 'static,
	{
		self.context = Some(std::sync::Arc::new(predicate));
		self
	}

	pub fn actor_pattern(&self) -> &str {
		&self.actor
	}

	pub fn resource_pattern(&self) -> &str {
		&self.resource
	}

	pub fn action_pattern(&self) -> &str {
		&self.action
	}
}

impl AclEntry for BasicAclEntry {
	fn matches_actor(&self, actor: &str) -> bool {
		matching::matches_identifier(&self.actor, actor)
	}

	fn matches_resource(&self, resource: &str) -> bool {
		matching::matches_identifier(&self.resource, resource)
	}

	fn matches_action(&self, action: &str) -> bool {
		matching::matches_action(&self.action, action)
	}

	fn matches_context(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool {
		matching::matches_context(self.context.as_ref(), actor, resource, action, context)
	}
}

impl fmt::Debug for BasicAclEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BasicAclEntry")
			.field("actor", &self.actor)
			.field("resource", &self.resource)
			.field("action", &self.action)
			.field("has_context", &self.context.is_some())
			.finish()
	}
}
