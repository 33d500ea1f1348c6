// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::sync::Arc;

use crate::collection::Collection;
use crate::entity::AuthorizationEntity;
use crate::request::Context;

/// Boolean predicate over `(actor, resource, action, context)`.
///
/// Implemented for every `Fn(&AuthorizationEntity, &AuthorizationEntity, &str, &Context) -> bool`,
/// so the shape of an ad hoc evaluator is checked by the compiler.
pub trait AccessEvaluator: Send + Sync {
	fn has_access(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool;
}

impl<F> AccessEvaluator for F
where
	F: Fn(&AuthorizationEntity, &AuthorizationEntity, &str, &Context) -> bool + Send + Sync,
{
	fn has_access(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool {
		self(actor, resource, action, context)
	}
}

/// An attribute-based rule.
pub trait Policy: Send + Sync {
	fn evaluate(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool;

	/// Human-readable summary, used in diagnostics.
	fn description(&self) -> &str;
}

/// Ordered candidate policies.
pub type PoliciesCollection = Collection<Arc<dyn Policy>>;

/// A policy made of a description and an evaluator.
#[derive(Clone)]
pub struct BasicPolicy {
	evaluator: Arc<dyn AccessEvaluator>,
	description: String,
}

impl BasicPolicy {
	pub fn new(evaluator: impl AccessEvaluator + 'static, description: impl Into<String>) -> Self {
		Self {
			evaluator: Arc::new(evaluator),
			description: description.into(),
		}
	}
}

impl Policy for BasicPolicy {
	fn evaluate(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool {
		self.evaluator.has_access(actor, resource, action, context)
	}

	fn description(&self) -> &str {
		&self.description
	}
}

impl fmt::Debug for BasicPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BasicPolicy")
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn entity(entity_type: &str, id: &str) -> AuthorizationEntity {
		AuthorizationEntity::new(entity_type, id).unwrap()
	}

	struct DepartmentMatch;

	impl AccessEvaluator for DepartmentMatch {
		fn has_access(
			&self,
			actor: &AuthorizationEntity,
			resource: &AuthorizationEntity,
			_action: &str,
			_context: &Context,
		) -> bool {
			actor.attribute("department").is_some()
				&& actor.attribute("department") == resource.attribute("department")
		}
	}

	#[test]
	fn closure_evaluator() {
		let policy = BasicPolicy::new(
			|_: &AuthorizationEntity, resource: &AuthorizationEntity, action: &str, _: &Context| {
				resource.id() == "567" && action == "view"
			},
			"order 567 is viewable",
		);

		assert_eq!(policy.description(), "order 567 is viewable");
		assert!(policy.evaluate(&entity("user", "1"), &entity("order", "567"), "view", &Context::new()));
		assert!(!policy.evaluate(&entity("user", "1"), &entity("order", "568"), "view", &Context::new()));
		assert!(!policy.evaluate(&entity("user", "1"), &entity("order", "567"), "edit", &Context::new()));
	}

	#[test]
	fn struct_evaluator_reads_attributes() {
		let policy = BasicPolicy::new(DepartmentMatch, "same department");
		let sales_user = entity("user", "1").with_attribute("department", "sales");
		let sales_doc = entity("document", "9").with_attribute("department", "sales");
		let hr_doc = entity("document", "10").with_attribute("department", json!("hr"));

		assert!(policy.evaluate(&sales_user, &sales_doc, "read", &Context::new()));
		assert!(!policy.evaluate(&sales_user, &hr_doc, "read", &Context::new()));
	}

	#[test]
	fn evaluator_sees_context() {
		let policy = BasicPolicy::new(
			|_: &AuthorizationEntity, _: &AuthorizationEntity, _: &str, ctx: &Context| {
				ctx.get("hour").and_then(|h| h.as_u64()).is_some_and(|h| (9..17).contains(&h))
			},
			"office hours only",
		);

		let mut ctx = Context::new();
		ctx.insert("hour".to_string(), json!(10));
		assert!(policy.evaluate(&entity("user", "1"), &entity("order", "1"), "view", &ctx));

		ctx.insert("hour".to_string(), json!(22));
		assert!(!policy.evaluate(&entity("user", "1"), &entity("order", "1"), "view", &ctx));
	}
}
