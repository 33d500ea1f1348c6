// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthzError;

/// Strategy stages that can be wired from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
	Acl,
	Rbac,
	Abac,
}

impl StageKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Acl => "acl",
			Self::Rbac => "rbac",
			Self::Abac => "abac",
		}
	}
}

impl fmt::Display for StageKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for StageKind {
	type Err = AuthzError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"acl" => Ok(Self::Acl),
			"rbac" => Ok(Self::Rbac),
			"abac" => Ok(Self::Abac),
			other => Err(AuthzError::invalid_configuration(format!(
				"unknown stage '{other}'"
			))),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfigLayer {
	pub stages: Option<Vec<String>>,
	pub log_decisions: Option<bool>,
}

impl PipelineConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.stages.is_some() {
			self.stages = other.stages;
		}
		if other.log_decisions.is_some() {
			self.log_decisions = other.log_decisions;
		}
	}

	pub fn finalize(self) -> PipelineConfig {
		let defaults = PipelineConfig::default();
		PipelineConfig {
			stages: self.stages.unwrap_or(defaults.stages),
			log_decisions: self.log_decisions.unwrap_or(defaults.log_decisions),
		}
	}
}

/// Ordered stage names and decision logging switch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
	pub stages: Vec<String>,
	pub log_decisions: bool,
}

impl Default for PipelineConfig {
	fn default() -> Self {
		Self {
			stages: vec!["acl".to_string(), "rbac".to_string()],
			log_decisions: false,
		}
	}
}

/// A declarative ACL entry. Context predicates are code and cannot be configured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AclRuleConfig {
	pub actor: String,
	pub resource: String,
	pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionConfig {
	pub resource: String,
	pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleConfig {
	pub name: String,
	#[serde(default)]
	pub permissions: Vec<PermissionConfig>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_values() {
		let config = PipelineConfig::default();
		assert_eq!(config.stages, vec!["acl", "rbac"]);
		assert!(!config.log_decisions);
	}

	#[test]
	fn test_layer_finalize_defaults() {
		let config = PipelineConfigLayer::default().finalize();
		assert_eq!(config, PipelineConfig::default());
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = PipelineConfigLayer {
			stages: Some(vec!["acl".to_string()]),
			log_decisions: Some(false),
		};
		let overlay = PipelineConfigLayer {
			stages: None,
			log_decisions: Some(true),
		};
		base.merge(overlay);
		assert_eq!(base.stages, Some(vec!["acl".to_string()]));
		assert_eq!(base.log_decisions, Some(true));
	}

	#[test]
	fn test_stage_parsing() {
		assert_eq!("acl".parse::<StageKind>().unwrap(), StageKind::Acl);
		assert_eq!(" RBAC ".parse::<StageKind>().unwrap(), StageKind::Rbac);
		assert_eq!("abac".parse::<StageKind>().unwrap(), StageKind::Abac);

		let err = "opa".parse::<StageKind>().unwrap_err();
		assert!(err.is_configuration_error());
		assert!(err.to_string().contains("unknown stage 'opa'"));
	}

	#[test]
	fn test_role_permissions_default_to_empty() {
		let role: RoleConfig = toml::from_str(r#"name = "guest""#).unwrap();
		assert_eq!(role.name, "guest");
		assert!(role.permissions.is_empty());
	}
}
