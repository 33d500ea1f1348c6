// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::entity::AuthorizationEntity;
use crate::error::{AuthzError, Result};

/// Auxiliary facts relevant to a decision (time, IP, request metadata).
pub type Context = HashMap<String, Value>;

/// A single authorization question: may `subject` perform `action` on `resource`?
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorizationRequest {
	subject: AuthorizationEntity,
	resource: AuthorizationEntity,
	action: String,
	context: Context,
}

impl AuthorizationRequest {
	/// Creates a request. Fails when the action is blank.
	pub fn new(
		subject: AuthorizationEntity,
		resource: AuthorizationEntity,
		action: impl Into<String>,
		context: Context,
	) -> Result<Self> {
		let action = action.into();
		if action.trim().is_empty() {
			return Err(AuthzError::InvalidRequest(
				"action cannot be empty".to_string(),
			));
		}

		Ok(Self {
			subject,
			resource,
			action,
			context,
		})
	}

	/// Adds a context value, consuming and returning the request.
	pub fn with_context_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.context.insert(key.into(), value.into());
		self
	}

	pub fn subject(&self) -> &AuthorizationEntity {
		&self.subject
	}

	pub fn resource(&self) -> &AuthorizationEntity {
		&self.resource
	}

	pub fn action(&self) -> &str {
		&self.action
	}

	pub fn context(&self) -> &Context {
		&self.context
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
	fn exposes_all_parts() {
		let mut context = Context::new();
		context.insert("ip".to_string(), json!("10.0.0.1"));

		let request =
			AuthorizationRequest::new(entity("user", "123"), entity("order", "567"), "view", context)
				.unwrap();

		assert_eq!(request.subject().identity(), "user::123");
		assert_eq!(request.resource().identity(), "order::567");
		assert_eq!(request.action(), "view");
		assert_eq!(request.context().get("ip"), Some(&json!("10.0.0.1")));
	}

	#[test]
	fn rejects_blank_action() {
		let err = AuthorizationRequest::new(
			entity("user", "123"),
			entity("order", "567"),
			" ",
			Context::new(),
		)
		.unwrap_err();
		assert!(matches!(err, AuthzError::InvalidRequest(_)));
	}

	#[test]
	fn context_values_can_be_added() {
		let request = AuthorizationRequest::new(
			entity("user", "123"),
			entity("order", "567"),
			"view",
			Context::new(),
		)
		.unwrap()
		.with_context_value("hour", 14);

		assert_eq!(request.context().get("hour"), Some(&json!(14)));
	}
}
