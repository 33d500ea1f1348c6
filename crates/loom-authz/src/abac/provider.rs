// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;
use std::sync::Arc;

use crate::abac::{PoliciesCollection, Policy};
use crate::entity::AuthorizationEntity;
use crate::matching::WILDCARD;
use crate::request::Context;

/// Supplies the candidate policies for a request.
///
/// A provider may pre-filter candidates by any logic it owns, but the final
/// decision is always made by evaluating the returned policies.
pub trait PolicyProvider: Send + Sync {
	fn policies(
		&self,
		actor: &AuthorizationEntity,
		resource: &AuthorizationEntity,
		action: &str,
		context: &Context,
	) -> PoliciesCollection;
}

/// Returns the same fixed set of policies for every request.
#[derive(Debug, Clone, Default)]
pub struct BasicPolicyProvider {
	policies: PoliciesCollection,
}

impl BasicPolicyProvider {
	pub fn new(policies: PoliciesCollection) -> Self {
		Self { policies }
	}

	pub fn from_policies<P>(policies: impl IntoIterator<Item = P>) -> Self
	where
		P: Policy + 'static,
	{
		Self::new(
			policies
				.into_iter()
				.map(|policy| Arc::new(policy) as Arc<dyn Policy>)
				.collect(),
		)
	}
}

impl PolicyProvider for BasicPolicyProvider {
	fn policies(
		&self,
		_actor: &AuthorizationEntity,
		_resource: &AuthorizationEntity,
		_action: &str,
		_context: &Context,
	) -> PoliciesCollection {
		self.policies.clone()
	}
}

/// Pre-filters policies by action.
///
/// Candidates are the policies registered for the exact action, followed by
/// those registered under `*`, each group in registration order.
#[derive(Clone, Default)]
pub struct ActionIndexedPolicyProvider {
	by_action: HashMap<String, Vec<Arc<dyn Policy>>>,
}

impl ActionIndexedPolicyProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `policy` for `action` (or `*` for every action).
	pub fn with_policy(mut self, action: impl Into<String>, policy: impl Policy + 'static) -> Self {
		self.by_action
			.entry(action.into())
			.or_default()
			.push(Arc::new(policy));
		self
	}
}

impl std::fmt::Debug for ActionIndexedPolicyProvider {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActionIndexedPolicyProvider")
			.field("actions", &self.by_action.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl PolicyProvider for ActionIndexedPolicyProvider {
	fn policies(
		&self,
		_actor: &AuthorizationEntity,
		_resource: &AuthorizationEntity,
		action: &str,
		_context: &Context,
	) -> PoliciesCollection {
		let exact = (action != WILDCARD)
			.then(|| self.by_action.get(action))
			.flatten()
			.into_iter()
			.flatten();
		let any = self.by_action.get(WILDCARD).into_iter().flatten();

		exact.chain(any).cloned().collect()
	}
}
