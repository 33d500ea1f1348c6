// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Declarative pipeline configuration.
//!
//! This module provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Validation of stage names and rule patterns
//! - Wiring of a validated configuration into an [`AuthorizationPipeline`]
//!
//! Context predicates and ABAC policies are code, so the declarative form only
//! carries identity and action patterns. ABAC policies come from a
//! [`PolicyProvider`] supplied by the caller.
//!
//! # Usage
//!
//! ```
//! use loom_authz::config::AuthzConfig;
//!
//! let config = AuthzConfig::from_toml_str(
//! 	r#"
//! [pipeline]
//! stages = ["acl"]
//!
//! [[acl]]
//! actor = "user::123"
//! resource = "order::*"
//! action = "view"
//! "#,
//! )?;
//! let pipeline = config.build_pipeline(None)?;
//! assert_eq!(pipeline.len(), 2);
//! # Ok::<(), loom_authz::config::ConfigError>(())
//! ```

mod error;
mod layer;
mod sections;
mod sources;

pub use error::ConfigError;
pub use layer::AuthzConfigLayer;
pub use sections::{
	AclRuleConfig, PermissionConfig, PipelineConfig, PipelineConfigLayer, RoleConfig, StageKind,
};
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, CONFIG_PATH_ENV,
	LOG_DECISIONS_ENV, STAGES_ENV,
};

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::abac::{AbacMiddleware, AttributeBasedAccessControl, PolicyProvider};
use crate::acl::{AccessControlList, AclMiddleware, BasicAclEntry};
use crate::entity::IDENTITY_SEPARATOR;
use crate::error::AuthzError;
use crate::logger::TracingAuthLogger;
use crate::pipeline::{AuthorizationMiddleware, AuthorizationPipeline, DenyAllMiddleware};
use crate::rbac::{
	BasicPermission, BasicRole, BasicRoleProvider, RbacMiddleware, Role, RoleBasedAccessControl,
	RolesCollection,
};

/// Fully resolved authorization configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthzConfig {
	pub pipeline: PipelineConfig,
	pub acl: Vec<AclRuleConfig>,
	pub roles: Vec<RoleConfig>,
	/// Actor identity (`type::id`) to role names, in evaluation order.
	pub role_assignments: HashMap<String, Vec<String>>,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LOOM_AUTHZ_*`)
/// 2. Config file named by `LOOM_AUTHZ_CONFIG`, if set
/// 3. Built-in defaults
pub fn load_config() -> Result<AuthzConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];
	if let Some(path) = sources::env_var(CONFIG_PATH_ENV) {
		sources.push(Box::new(TomlSource::new(path)));
	}
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
///
/// A missing file is not an error; defaults and environment still apply.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<AuthzConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<AuthzConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = AuthzConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	let config = AuthzConfig::try_from(merged)?;

	info!(
		stages = ?config.pipeline.stages,
		log_decisions = config.pipeline.log_decisions,
		acl_entries = config.acl.len(),
		roles = config.roles.len(),
		assigned_actors = config.role_assignments.len(),
		"Authorization configuration loaded"
	);

	Ok(config)
}

impl TryFrom<AuthzConfigLayer> for AuthzConfig {
	type Error = ConfigError;

	/// Fills omitted sections with defaults and validates the result.
	fn try_from(layer: AuthzConfigLayer) -> Result<Self, Self::Error> {
		let config = Self::finalize(layer);
		config.validate()?;
		Ok(config)
	}
}

fn require_non_blank(field: impl FnOnce() -> String, value: &str) -> Result<(), ConfigError> {
	if value.trim().is_empty() {
		return Err(ConfigError::invalid_value(field(), "cannot be empty"));
	}
	Ok(())
}

impl AuthzConfig {
	/// Parses and validates a single TOML document, with defaults for omitted sections.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let layer: AuthzConfigLayer = toml::from_str(content)?;
		Self::try_from(layer)
	}

	fn finalize(layer: AuthzConfigLayer) -> Self {
		Self {
			pipeline: layer.pipeline.unwrap_or_default().finalize(),
			acl: layer.acl.unwrap_or_default(),
			roles: layer.roles.unwrap_or_default(),
			role_assignments: layer.role_assignments.unwrap_or_default(),
		}
	}

	/// Parsed stage list, in pipeline order.
	pub fn stages(&self) -> Result<Vec<StageKind>, ConfigError> {
		let mut seen = HashSet::new();
		let mut stages = Vec::with_capacity(self.pipeline.stages.len());

		for name in &self.pipeline.stages {
			let stage: StageKind = name
				.parse()
				.map_err(|e: AuthzError| ConfigError::invalid_value("pipeline.stages", e.to_string()))?;
			if !seen.insert(stage) {
				return Err(ConfigError::invalid_value(
					"pipeline.stages",
					format!("duplicate stage '{stage}'"),
				));
			}
			stages.push(stage);
		}

		Ok(stages)
	}

	/// Checks stage names, rule patterns and role references.
	pub fn validate(&self) -> Result<(), ConfigError> {
		self.stages()?;

		for (i, rule) in self.acl.iter().enumerate() {
			require_non_blank(|| format!("acl[{i}].actor"), &rule.actor)?;
			require_non_blank(|| format!("acl[{i}].resource"), &rule.resource)?;
			require_non_blank(|| format!("acl[{i}].action"), &rule.action)?;
		}

		let mut role_names = HashSet::new();
		for (i, role) in self.roles.iter().enumerate() {
			require_non_blank(|| format!("roles[{i}].name"), &role.name)?;
			if !role_names.insert(role.name.as_str()) {
				return Err(ConfigError::invalid_value(
					format!("roles[{i}].name"),
					format!("duplicate role '{}'", role.name),
				));
			}
			for (j, permission) in role.permissions.iter().enumerate() {
				require_non_blank(
					|| format!("roles[{i}].permissions[{j}].resource"),
					&permission.resource,
				)?;
				require_non_blank(
					|| format!("roles[{i}].permissions[{j}].action"),
					&permission.action,
				)?;
			}
		}

		for (actor, roles) in &self.role_assignments {
			let valid_identity = actor
				.split_once(IDENTITY_SEPARATOR)
				.is_some_and(|(t, id)| !t.trim().is_empty() && !id.trim().is_empty());
			if !valid_identity {
				return Err(ConfigError::invalid_value(
					format!("role_assignments.{actor}"),
					"actor must be a 'type::id' identity",
				));
			}
			if let Some(role) = roles.iter().find(|r| !role_names.contains(r.as_str())) {
				return Err(ConfigError::UndefinedRole {
					actor: actor.clone(),
					role: role.clone(),
				});
			}
		}

		Ok(())
	}

	/// Wires the configured stages, in order, followed by [`DenyAllMiddleware`].
	///
	/// `policy_provider` is required when the `abac` stage is configured and
	/// ignored otherwise.
	pub fn build_pipeline(
		&self,
		policy_provider: Option<Arc<dyn PolicyProvider>>,
	) -> Result<AuthorizationPipeline, ConfigError> {
		self.validate()?;

		let mut middlewares: Vec<Arc<dyn AuthorizationMiddleware>> = Vec::new();
		for stage in self.stages()? {
			let middleware: Arc<dyn AuthorizationMiddleware> = match stage {
				StageKind::Acl => Arc::new(AclMiddleware::new(self.access_control_list())),
				StageKind::Rbac => Arc::new(RbacMiddleware::new(RoleBasedAccessControl::new(
					Arc::new(self.role_provider()),
				))),
				StageKind::Abac => {
					let provider = policy_provider
						.clone()
						.ok_or(ConfigError::MissingPolicyProvider)?;
					Arc::new(AbacMiddleware::new(AttributeBasedAccessControl::new(provider)))
				}
			};
			middlewares.push(middleware);
		}
		middlewares.push(Arc::new(DenyAllMiddleware));

		let pipeline = AuthorizationPipeline::new(middlewares);
		debug!(stages = pipeline.len(), "built authorization pipeline from configuration");

		if self.pipeline.log_decisions {
			Ok(pipeline.with_logger(Arc::new(TracingAuthLogger)))
		} else {
			Ok(pipeline)
		}
	}

	fn access_control_list(&self) -> AccessControlList {
		AccessControlList::from_entries(
			self.acl
				.iter()
				.map(|rule| BasicAclEntry::new(&rule.actor, &rule.resource, &rule.action)),
		)
	}

	fn role_provider(&self) -> BasicRoleProvider {
		let roles: HashMap<&str, Arc<dyn Role>> = self
			.roles
			.iter()
			.map(|role| {
				let permissions = role
					.permissions
					.iter()
					.map(|p| BasicPermission::new(&p.resource, &p.action));
				let built: Arc<dyn Role> = Arc::new(BasicRole::from_permissions(&role.name, permissions));
				(role.name.as_str(), built)
			})
			.collect();

		self.role_assignments
			.iter()
			.map(|(actor, names)| {
				let assigned: RolesCollection = names
					.iter()
					.filter_map(|name| roles.get(name.as_str()).cloned())
					.collect();
				(actor.clone(), assigned)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::abac::BasicPolicyProvider;
	use crate::entity::AuthorizationEntity;
	use crate::request::{AuthorizationRequest, Context};

	const SAMPLE: &str = r#"
[pipeline]
stages = ["acl", "rbac"]

[[acl]]
actor = "user::123"
resource = "order::*"
action = "view"

[[roles]]
name = "editor"
permissions = [
	{ resource = "document::*", action = "edit" },
	{ resource = "document::*", action = "view" },
]

[role_assignments]
"user::42" = ["editor"]
"#;

	fn request(subject: (&str, &str), resource: (&str, &str), action: &str) -> AuthorizationRequest {
		AuthorizationRequest::new(
			AuthorizationEntity::new(subject.0, subject.1).unwrap(),
			AuthorizationEntity::new(resource.0, resource.1).unwrap(),
			action,
			Context::new(),
		)
		.unwrap()
	}

	mod loading {
		use super::*;

		#[test]
		fn test_defaults() {
			let config = AuthzConfig::from_toml_str("").unwrap();
			assert_eq!(config, AuthzConfig::default());
			assert_eq!(config.stages().unwrap(), vec![StageKind::Acl, StageKind::Rbac]);
		}

		#[test]
		fn test_sample_document() {
			let config = AuthzConfig::from_toml_str(SAMPLE).unwrap();
			assert_eq!(config.acl.len(), 1);
			assert_eq!(config.roles[0].permissions.len(), 2);
			assert_eq!(config.role_assignments["user::42"], vec!["editor"]);
		}

		#[test]
		fn test_parse_error() {
			let err = AuthzConfig::from_toml_str("[pipeline").unwrap_err();
			assert!(matches!(err, ConfigError::Toml(_)));
		}
	}

	mod validation {
		use super::*;

		#[test]
		fn test_unknown_stage() {
			let err = AuthzConfig::from_toml_str("[pipeline]\nstages = [\"opa\"]").unwrap_err();
			assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "pipeline.stages"));
		}

		#[test]
		fn test_duplicate_stage() {
			let err = AuthzConfig::from_toml_str("[pipeline]\nstages = [\"acl\", \"ACL\"]").unwrap_err();
			assert!(err.to_string().contains("duplicate stage 'acl'"));
		}

		#[test]
		fn test_blank_acl_pattern() {
			let err = AuthzConfig::from_toml_str(
				"[[acl]]\nactor = \" \"\nresource = \"*\"\naction = \"*\"",
			)
			.unwrap_err();
			assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "acl[0].actor"));
		}

		#[test]
		fn test_undefined_role() {
			let err = AuthzConfig::from_toml_str("[role_assignments]\n\"user::1\" = [\"admin\"]")
				.unwrap_err();
			match err {
				ConfigError::UndefinedRole { actor, role } => {
					assert_eq!(actor, "user::1");
					assert_eq!(role, "admin");
				}
				other => panic!("unexpected error: {other:?}"),
			}
		}

		#[test]
		fn test_assignment_key_must_be_identity() {
			let err = AuthzConfig::from_toml_str(
				"[[roles]]\nname = \"admin\"\n\n[role_assignments]\n\"alice\" = [\"admin\"]",
			)
			.unwrap_err();
			assert!(matches!(err, ConfigError::InvalidValue { .. }));
		}

		#[test]
		fn test_duplicate_role() {
			let err =
				AuthzConfig::from_toml_str("[[roles]]\nname = \"a\"\n\n[[roles]]\nname = \"a\"").unwrap_err();
			assert!(err.to_string().contains("duplicate role 'a'"));
		}
	}

	mod wiring {
		use super::*;

		#[test]
		fn test_pipeline_ends_in_deny_all() {
			let pipeline = AuthzConfig::from_toml_str(SAMPLE)
				.unwrap()
				.build_pipeline(None)
				.unwrap();
			assert_eq!(pipeline.len(), 3);

			let response = pipeline
				.process(&request(("user", "7"), ("order", "1"), "view"))
				.unwrap();
			assert!(!response.is_permitted());
			assert_eq!(response.handler(), Some(DenyAllMiddleware::NAME));
		}

		#[test]
		fn test_acl_stage_grants() {
			let pipeline = AuthzConfig::from_toml_str(SAMPLE)
				.unwrap()
				.build_pipeline(None)
				.unwrap();
			let response = pipeline
				.process(&request(("user", "123"), ("order", "9"), "view"))
				.unwrap();
			assert!(response.is_permitted());
			assert_eq!(response.handler(), Some(AclMiddleware::NAME));
		}

		#[test]
		fn test_rbac_stage_grants() {
			let pipeline = AuthzConfig::from_toml_str(SAMPLE)
				.unwrap()
				.build_pipeline(None)
				.unwrap();
			let response = pipeline
				.process(&request(("user", "42"), ("document", "1"), "edit"))
				.unwrap();
			assert!(response.is_permitted());
			assert_eq!(response.handler(), Some(RbacMiddleware::NAME));

			let denied = pipeline
				.process(&request(("user", "42"), ("document", "1"), "delete"))
				.unwrap();
			assert!(!denied.is_permitted());
		}

		#[test]
		fn test_abac_requires_provider() {
			let config = AuthzConfig::from_toml_str("[pipeline]\nstages = [\"abac\"]").unwrap();
			assert!(matches!(
				config.build_pipeline(None),
				Err(ConfigError::MissingPolicyProvider)
			));

			let provider: Arc<dyn PolicyProvider> = Arc::new(BasicPolicyProvider::default());
			let pipeline = config.build_pipeline(Some(provider)).unwrap();
			assert_eq!(pipeline.len(), 2);
		}

		#[test]
		fn test_empty_stage_list_denies_everything() {
			let pipeline = AuthzConfig::from_toml_str("[pipeline]\nstages = []")
				.unwrap()
				.build_pipeline(None)
				.unwrap();
			assert_eq!(pipeline.len(), 1);
			let response = pipeline
				.process(&request(("user", "1"), ("order", "1"), "view"))
				.unwrap();
			assert!(!response.is_permitted());
		}
	}
}
