// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Optional decision logging sink.
//!
//! The pipeline reports every decision to an [`AuthLogger`]. The default is
//! [`NullAuthLogger`]; [`TracingAuthLogger`] forwards to `tracing` events. Sinks
//! are fire-and-forget and never influence a decision.

use tracing::{debug, info, warn};

use crate::request::Context;

/// Receives human-readable decision messages with optional structured context.
pub trait AuthLogger: Send + Sync {
	fn debug(&self, message: &str, context: Option<&Context>);
	fn info(&self, message: &str, context: Option<&Context>);
	fn warning(&self, message: &str, context: Option<&Context>);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuthLogger;

impl AuthLogger for NullAuthLogger {
	fn debug(&self, _message: &str, _context: Option<&Context>) {}
	fn info(&self, _message: &str, _context: Option<&Context>) {}
	fn warning(&self, _message: &str, _context: Option<&Context>) {}
}

/// Forwards messages to the `tracing` facade under the `loom_authz` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuthLogger;

fn render(context: Option<&Context>) -> String {
	context
		.and_then(|ctx| serde_json::to_string(ctx).ok())
		.unwrap_or_else(|| "{}".to_string())
}

impl AuthLogger for TracingAuthLogger {
	fn debug(&self, message: &str, context: Option<&Context>) {
		debug!(target: "loom_authz", context = %render(context), "{message}");
	}

	fn info(&self, message: &str, context: Option<&Context>) {
		info!(target: "loom_authz", context = %render(context), "{message}");
	}

	fn warning(&self, message: &str, context: Option<&Context>) {
		warn!(target: "loom_authz", context = %render(context), "{message}");
	}
}
