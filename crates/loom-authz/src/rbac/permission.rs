// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::sync::Arc;

use crate::collection::Collection;
use crate::entity::AuthorizationEntity;
use crate::matching::{self, ContextPredicate};
use crate::request::Context;

/// A capability carried by a role: a resource/action pattern pair plus an
/// optional predicate over the request.
pub trait Permission: Send + Sync {
	fn matches_resource(&self, resource: &AuthorizationEntity) -> bool;
	fn matches_action(&self, action: &str) -> bool;
	fn matches_context(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool;
}

/// Ordered permissions of a role.
pub type PermissionsCollection = Collection<Arc<dyn Permission>>;

#[derive(Clone)]
pub struct BasicPermission {
	resource: String,
	action: String,
	context: Option<ContextPredicate>,
}

impl BasicPermission {
	pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
		Self {
			resource: resource.into(),
			action: action.into(),
			context: None,
		}
	}

	pub fn with_context<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&AuthorizationEntity, &AuthorizationEntity, &str, &Context) -> bool
			+ Send
			+ Sync
			+ 'static,
	{
		self.context = Some(Arc::new(predicate));
		self
	}

	pub fn resource_pattern(&self) -> &str {
		&self.resource
	}

	pub fn action_pattern(&self) -> &str {
		&self.action
	}
}

impl Permission for BasicPermission {
	fn matches_resource(&self, resource: &AuthorizationEntity) -> bool {
		matching::matches_identity(&self.resource, resource)
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

impl fmt::Debug for BasicPermission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BasicPermission")
			.field("resource", &self.resource)
			.field("action", &self.action)
			.field("has_context", &self.context.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn entity(entity_type: &str, id: &str) -> AuthorizationEntity {
		AuthorizationEntity::new(entity_type, id).unwrap()
	}

	#[test]
	fn resource_patterns() {
		let order = entity("order", "567");
		assert!(BasicPermission::new("*", "view").matches_resource(&order));
		assert!(BasicPermission::new("order::*", "view").matches_resource(&order));
		assert!(BasicPermission::new("order::567", "view").matches_resource(&order));
		assert!(!BasicPermission::new("order::568", "view").matches_resource(&order));
		assert!(!BasicPermission::new("invoice::*", "view").matches_resource(&order));
	}

	#[test]
	fn action_patterns() {
		assert!(BasicPermission::new("*", "*").matches_action("delete"));
		assert!(BasicPermission::new("*", "view").matches_action("view"));
		assert!(!BasicPermission::new("*", "view").matches_action("edit"));
	}

	#[test]
	fn context_predicate() {
		let permission = BasicPermission::new("*", "*")
			.with_context(|_, _, _, ctx| ctx.get("mfa") == Some(&json!(true)));

		let mut ctx = Context::new();
		assert!(!permission.matches_context(&entity("user", "1"), &entity("order", "2"), "view", &ctx));

		ctx.insert("mfa".to_string(), json!(true));
		assert!(permission.matches_context(&entity("user", "1"), &entity("order", "2"), "view", &ctx));
	}

	#[test]
	fn no_predicate_always_matches_context() {
		let permission = BasicPermission::new("*", "*");
		assert!(permission.matches_context(
			&entity("user", "1"),
			&entity("order", "2"),
			"view",
			&Context::new()
		));
	}
}
