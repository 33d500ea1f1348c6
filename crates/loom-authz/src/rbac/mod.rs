// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role-based access control.
//!
//! A [`RoleProvider`] maps an actor to its roles, each role owns an ordered set
//! of permissions, and access is granted by the first permission that matches
//! the resource, action and context.

mod control;
mod middleware;
mod permission;
mod provider;
mod role;

pub use control::RoleBasedAccessControl;
pub use middleware::RbacMiddleware;
pub use permission::{BasicPermission, Permission, PermissionsCollection};
pub use provider::{BasicRoleProvider, RoleProvider};
pub use role::{BasicRole, Role, RolesCollection};
