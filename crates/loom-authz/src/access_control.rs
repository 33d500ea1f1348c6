// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::entity::AuthorizationEntity;
use crate::request::Context;

/// A decision strategy: answers whether `actor` may perform `action` on `resource`.
///
/// Implementations are pure with respect to their rule set and must be safe to
/// call from several threads at once.
pub trait AccessControl: Send + Sync {
	fn has_access(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool;

	/// Short name used in decision reasons: the type name without its module
	/// path or generic arguments.
	fn name(&self) -> &str {
		let full = std::any::type_name::<Self>();
		full.split('<')
			.next()
			.unwrap_or(full)
			.rsplit("::")
			.next()
			.unwrap_or("AccessControl")
	}
}

impl<T: AccessControl + ?Sized> AccessControl for std::sync::Arc<T> {
	fn has_access(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> bool {
		(**self).has_access(actor, resource, action, context)
	}

	fn name(&self) -> &str {
		(**self).name()
	}
}
