// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pattern matching primitives shared by all strategies.
//!
//! Identity patterns take one of three forms:
//!
//! | Pattern      | Matches                                 |
//! |--------------|-----------------------------------------|
//! | `*`          | any entity                              |
//! | `<type>::*`  | any entity of `<type>`, whatever its id |
//! | `<type>::id` | exactly that entity                     |
//!
//! Wildcards are always on the pattern side. A pattern that fits none of the
//! forms is compared literally and therefore simply never matches.

use std::sync::Arc;

use crate::entity::{AuthorizationEntity, IDENTITY_SEPARATOR};
use crate::request::Context;

/// Pattern that matches anything.
pub const WILDCARD: &str = "*";

/// Optional predicate over the full request tuple, attached to ACL entries and
/// RBAC permissions.
pub type ContextPredicate =
	Arc<dyn Fn(&AuthorizationEntity, &AuthorizationEntity, &str, &Context) -> bool + Send + Sync>;

/// Returns the `<type>` part of a `<type>::*` pattern.
///
/// The type ends at the first `::`, so `path::a::*` is the exact identity of
/// entity `(path, "a::*")` rather than a wildcard.
fn type_wildcard(pattern: &str) -> Option<&str> {
	pattern
		.split_once(IDENTITY_SEPARATOR)
		.filter(|(_, rest)| *rest == WILDCARD)
		.map(|(entity_type, _)| entity_type)
}

/// Matches an entity against an identity pattern.
pub fn matches_identity(pattern: &str, entity: &AuthorizationEntity) -> bool {
	if pattern == WILDCARD {
		return true;
	}
	if let Some(entity_type) = type_wildcard(pattern) {
		return entity.entity_type() == entity_type;
	}

	pattern
		.strip_prefix(entity.entity_type())
		.and_then(|rest| rest.strip_prefix(IDENTITY_SEPARATOR))
		.is_some_and(|id| id == entity.id())
}

/// Matches an already stringified identity against an identity pattern.
///
/// The type part of `identifier` is everything before the first `::`.
pub fn matches_identifier(pattern: &str, identifier: &str) -> bool {
	if pattern == WILDCARD {
		return true;
	}
	if let Some(entity_type) = type_wildcard(pattern) {
		return identifier
			.split_once(IDENTITY_SEPARATOR)
			.is_some_and(|(identifier_type, _)| identifier_type == entity_type);
	}

	pattern == identifier
}

/// Matches an action against an action pattern: `*` or exact equality.
pub fn matches_action(pattern: &str, action: &str) -> bool {
	pattern == WILDCARD || pattern == action
}

/// Evaluates an optional predicate; an absent predicate always holds.
pub fn matches_context(
	predicate: Option<&ContextPredicate>,
	actor: &AuthorizationEntity,
	resource: &AuthorizationEntity,
	action: &str,
	context: &Context,
) -> bool {
	predicate.map_or(true, |predicate| predicate(actor, resource, action, context))
}
