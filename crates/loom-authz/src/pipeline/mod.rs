// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Chain-of-responsibility decision pipeline.
//!
//! ```text
//! AuthorizationPipeline::process
//!   └── PipelineHandler[0].handle ── stage 0 ── permit ──────────────▶ response
//!                                       │
//!                                       └─ delegate
//!                                            └── PipelineHandler[1].handle ── stage 1 ...
//! ```
//!
//! Every handler is single-use. Running off the end of the chain is a
//! configuration error, which is why pipelines conventionally end in
//! [`DenyAllMiddleware`].

mod handler;
mod middleware;
#[allow(clippy::module_inception)]
mod pipeline;

pub use handler::{AuthorizationHandler, PipelineHandler};
pub(crate) use middleware::grant_or_delegate;
pub use middleware::{AccessControlMiddleware, AuthorizationMiddleware, DenyAllMiddleware};
pub use pipeline::AuthorizationPipeline;
