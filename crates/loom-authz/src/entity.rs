// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subjects and objects participating in an authorization decision.
//!
//! An [`AuthorizationEntity`] is identified by its `(type, id)` pair, rendered
//! canonically as `type::id`. Attributes are opaque to the pipeline and only
//! consulted by attribute-based policies.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{AuthzError, Result};

/// Separator between type and id in the canonical identity form.
pub const IDENTITY_SEPARATOR: &str = "::";

/// An actor or resource in an authorization request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorizationEntity {
	#[serde(rename = "type")]
	entity_type: String,
	id: String,
	#[serde(skip_serializing_if = "HashMap::is_empty")]
	attributes: HashMap<String, Value>,
}

impl AuthorizationEntity {
	/// Creates an entity with no attributes.
	///
	/// Fails when either field is blank, or when the type contains the `::`
	/// separator (which would make the canonical identity ambiguous).
	pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Result<Self> {
		let entity_type = entity_type.into();
		let id = id.into();

		if entity_type.trim().is_empty() {
			return Err(AuthzError::InvalidEntity {
				field: "type",
				reason: "cannot be empty".to_string(),
			});
		}
		if entity_type.contains(IDENTITY_SEPARATOR) {
			return Err(AuthzError::InvalidEntity {
				field: "type",
				reason: format!("cannot contain '{IDENTITY_SEPARATOR}'"),
			});
		}
		if id.trim().is_empty() {
			return Err(AuthzError::InvalidEntity {
				field: "id",
				reason: "cannot be empty".to_string(),
			});
		}

		Ok(Self {
			entity_type,
			id,
			attributes: HashMap::new(),
		})
	}

	/// Adds an attribute, consuming and returning the entity.
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Replaces all attributes.
	pub fn with_attributes(mut self, attributes: HashMap<String, Value>) -> Self {
		self.attributes = attributes;
		self
	}

	pub fn entity_type(&self) -> &str {
		&self.entity_type
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn attributes(&self) -> &HashMap<String, Value> {
		&self.attributes
	}

	/// Looks up a single attribute.
	pub fn attribute(&self, key: &str) -> Option<&Value> {
		self.attributes.get(key)
	}

	/// The canonical `type::id` identity.
	pub fn identity(&self) -> String {
		format!("{}{}{}", self.entity_type, IDENTITY_SEPARATOR, self.id)
	}
}

impl fmt::Display for AuthorizationEntity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.entity_type, IDENTITY_SEPARATOR, self.id)
	}
}

/// Renders an entity as the string identity that string-keyed ACL entries match against.
pub trait EntityStringifier: Send + Sync {
	fn stringify(&self, entity: &AuthorizationEntity) -> String;
}

/// Renders the canonical `type::id` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEntityStringifier;

impl EntityStringifier for BasicEntityStringifier {
	fn stringify(&self, entity: &AuthorizationEntity) -> String {
		entity.identity()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn builds_canonical_identity() {
		let entity = AuthorizationEntity::new("user", "123").unwrap();
		assert_eq!(entity.entity_type(), "user");
		assert_eq!(entity.id(), "123");
		assert_eq!(entity.identity(), "user::123");
		assert_eq!(entity.to_string(), "user::123");
		assert!(entity.attributes().is_empty());
	}

	#[test]
	fn rejects_blank_type() {
		let err = AuthorizationEntity::new("  ", "123").unwrap_err();
		assert!(matches!(err, AuthzError::InvalidEntity { field: "type", .. }));
	}

	#[test]
	fn rejects_blank_id() {
		let err = AuthorizationEntity::new("user", "").unwrap_err();
		assert!(matches!(err, AuthzError::InvalidEntity { field: "id", .. }));
	}

	#[test]
	fn rejects_separator_in_type() {
		let err = AuthorizationEntity::new("org::team", "1").unwrap_err();
		assert!(matches!(err, AuthzError::InvalidEntity { field: "type", .. }));
	}

	#[test]
	fn id_may_contain_separator() {
		let entity = AuthorizationEntity::new("path", "a::b").unwrap();
		assert_eq!(entity.identity(), "path::a::b");
	}

	#[test]
	fn attributes_are_kept() {
		let entity = AuthorizationEntity::new("user", "123")
			.unwrap()
			.with_attribute("department", "sales")
			.with_attribute("level", 3);

		assert_eq!(entity.attribute("department"), Some(&json!("sales")));
		assert_eq!(entity.attribute("level"), Some(&json!(3)));
		assert_eq!(entity.attribute("missing"), None);
	}

	#[test]
	fn serializes_type_and_id() {
		let entity = AuthorizationEntity::new("order", "567").unwrap();
		let value = serde_json::to_value(&entity).unwrap();
		assert_eq!(value, json!({ "type": "order", "id": "567" }));
	}

	#[test]
	fn basic_stringifier_uses_canonical_form() {
		let entity = AuthorizationEntity::new("order", "567").unwrap();
		assert_eq!(BasicEntityStringifier.stringify(&entity), "order::567");
	}
}
