// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Attribute-based access control.
//!
//! A [`PolicyProvider`] narrows the policy set for a request; each candidate
//! [`Policy`] is then evaluated in order against the actor, resource, action
//! and context until one holds.

mod control;
mod middleware;
mod policy;
mod provider;

pub use control::AttributeBasedAccessControl;
pub use middleware::AbacMiddleware;
pub use policy::{AccessEvaluator, BasicPolicy, PoliciesCollection, Policy};
pub use provider::{ActionIndexedPolicyProvider, BasicPolicyProvider, PolicyProvider};
