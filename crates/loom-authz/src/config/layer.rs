// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::sections::{AclRuleConfig, PipelineConfigLayer, RoleConfig};

/// One partially specified configuration layer, as produced by a single source.
///
/// Rule lists replace rather than append: a layer that sets `acl` discards the
/// entries of every lower-precedence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthzConfigLayer {
	pub pipeline: Option<PipelineConfigLayer>,
	pub acl: Option<Vec<AclRuleConfig>>,
	pub roles: Option<Vec<RoleConfig>>,
	pub role_assignments: Option<HashMap<String, Vec<String>>>,
}

impl AuthzConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(overlay) = other.pipeline {
			self.pipeline
				.get_or_insert_with(PipelineConfigLayer::default)
				.merge(overlay);
		}
		if other.acl.is_some() {
			self.acl = other.acl;
		}
		if other.roles.is_some() {
			self.roles = other.roles;
		}
		if other.role_assignments.is_some() {
			self.role_assignments = other.role_assignments;
		}
	}
}
