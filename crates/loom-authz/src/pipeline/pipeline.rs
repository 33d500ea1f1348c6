// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use serde_json::json;
use tracing::instrument;

use crate::error::{AuthzError, Result};
use crate::logger::{AuthLogger, NullAuthLogger};
use crate::pipeline::{AuthorizationHandler, AuthorizationMiddleware, PipelineHandler};
use crate::request::{AuthorizationRequest, Context};
use crate::response::AuthorizationResponse;

/// An ordered, immutable chain of middleware.
///
/// Each [`process`](Self::process) call walks the chain through a fresh
/// [`PipelineHandler`], so one pipeline can serve many threads at once.
/// [`with_handler`](Self::with_handler) returns a new pipeline and leaves the
/// receiver untouched.
#[derive(Clone)]
pub struct AuthorizationPipeline {
	stages: Arc<[Arc<dyn AuthorizationMiddleware>]>,
	logger: Arc<dyn AuthLogger>,
}

impl AuthorizationPipeline {
	pub fn new(stages: Vec<Arc<dyn AuthorizationMiddleware>>) -> Self {
		Self {
			stages: stages.into(),
			logger: Arc::new(NullAuthLogger),
		}
	}

	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	/// Returns a copy of this pipeline with `middleware` appended as the last stage.
	pub fn with_handler(&self, middleware: impl AuthorizationMiddleware + 'static) -> Self {
		self.with_shared_handler(Arc::new(middleware))
	}

	/// Like [`with_handler`](Self::with_handler), for an already shared middleware.
	pub fn with_shared_handler(&self, middleware: Arc<dyn AuthorizationMiddleware>) -> Self {
		let mut stages = self.stages.to_vec();
		stages.push(middleware);
		Self {
			stages: stages.into(),
			logger: Arc::clone(&self.logger),
		}
	}

	/// Returns a copy of this pipeline reporting decisions to `logger`.
	pub fn with_logger(&self, logger: Arc<dyn AuthLogger>) -> Self {
		Self {
			stages: Arc::clone(&self.stages),
			logger,
		}
	}

	pub fn len(&self) -> usize {
		self.stages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stages.is_empty()
	}

	/// Runs `request` through the chain and returns the first decision made.
	///
	/// # Errors
	///
	/// - [`AuthzError::EmptyPipeline`] if the pipeline has no stages, or every
	///   stage delegated past the end of the chain
	/// - [`AuthzError::HandlerReuse`] if a middleware invoked its continuation twice
	#[instrument(
		level = "debug",
		skip_all,
		fields(
			subject = %request.subject(),
			resource = %request.resource(),
			action = request.action(),
		)
	)]
	pub fn process(&self, request: &AuthorizationRequest) -> Result<AuthorizationResponse> {
		if self.stages.is_empty() {
			self.logger.warning(
				"Authorization pipeline has no middleware",
				Some(&request_context(request)),
			);
			return Err(AuthzError::EmptyPipeline);
		}

		let handler = PipelineHandler::new(Arc::clone(&self.stages));
		match handler.handle(request) {
			Ok(response) => {
				self.report(request, &response);
				Ok(response)
			}
			Err(err) => {
				let mut ctx = request_context(request);
				ctx.insert("error".to_string(), json!(err.to_string()));
				self.logger
					.warning("Authorization pipeline failed", Some(&ctx));
				Err(err)
			}
		}
	}

	fn report(&self, request: &AuthorizationRequest, response: &AuthorizationResponse) {
		let mut ctx = request_context(request);
		ctx.insert("permitted".to_string(), json!(response.is_permitted()));
		ctx.insert("reason".to_string(), json!(response.reason()));
		ctx.insert("handler".to_string(), json!(response.handler()));

		if response.is_permitted() {
			self.logger.info("Access permitted", Some(&ctx));
		} else {
			self.logger.debug("Access denied", Some(&ctx));
		}
	}
}

impl Default for AuthorizationPipeline {
	fn default() -> Self {
		Self::empty()
	}
}

impl std::fmt::Debug for AuthorizationPipeline {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthorizationPipeline")
			.field("stages", &self.stages.len())
			.finish()
	}
}

fn request_context(request: &AuthorizationRequest) -> Context {
	let mut ctx = Context::new();
	ctx.insert("subject".to_string(), json!(request.subject().identity()));
	ctx.insert("resource".to_string(), json!(request.resource().identity()));
	ctx.insert("action".to_string(), json!(request.action()));
	ctx
}
