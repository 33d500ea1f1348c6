// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Middleware-style authorization for Loom.
//!
//! A request `(subject, resource, action, context)` is passed through an
//! ordered [`AuthorizationPipeline`] of middlewares. Each stage either grants
//! access or delegates to the rest of the chain; the first decision wins.
//! Three strategies are provided:
//!
//! - [`acl`]: explicit `(actor, resource, action)` entries with wildcards
//! - [`rbac`]: permissions reached through the roles held by the actor
//! - [`abac`]: code-defined policies over entity attributes and context
//!
//! Entities are addressed by canonical identity `type::id`. Patterns accept
//! `*` (anything), `type::*` (any entity of a type) or an exact identity.
//!
//! # Example
//!
//! ```
//! use loom_authz::acl::{AccessControlList, AclMiddleware, BasicAclEntry};
//! use loom_authz::{AuthorizationEntity, AuthorizationPipeline, AuthorizationRequest, Context, DenyAllMiddleware};
//!
//! let acl = AccessControlList::from_entries([BasicAclEntry::new("user::123", "order::*", "view")]);
//! let pipeline = AuthorizationPipeline::empty()
//! 	.with_handler(AclMiddleware::new(acl))
//! 	.with_handler(DenyAllMiddleware);
//!
//! let request = AuthorizationRequest::new(
//! 	AuthorizationEntity::new("user", "123")?,
//! 	AuthorizationEntity::new("order", "456")?,
//! 	"view",
//! 	Context::new(),
//! )?;
//!
//! let response = pipeline.process(&request)?;
//! assert!(response.is_permitted());
//! assert_eq!(response.reason(), Some("Checked against ACL"));
//! # Ok::<(), loom_authz::AuthzError>(())
//! ```

pub mod abac;
pub mod access_control;
pub mod acl;
pub mod collection;
pub mod config;
pub mod entity;
pub mod error;
pub mod logger;
pub mod matching;
pub mod pipeline;
pub mod rbac;
pub mod request;
pub mod response;

pub use access_control::AccessControl;
pub use collection::Collection;
pub use entity::{AuthorizationEntity, BasicEntityStringifier, EntityStringifier};
pub use error::{AuthzError, Result};
pub use logger::{AuthLogger, NullAuthLogger, TracingAuthLogger};
pub use pipeline::{
	AccessControlMiddleware, AuthorizationHandler, AuthorizationMiddleware, AuthorizationPipeline,
	DenyAllMiddleware, PipelineHandler,
};
pub use request::{AuthorizationRequest, Context};
pub use response::AuthorizationResponse;
