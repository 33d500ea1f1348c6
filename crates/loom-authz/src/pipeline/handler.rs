// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{AuthzError, Result};
use crate::pipeline::AuthorizationMiddleware;
use crate::request::AuthorizationRequest;
use crate::response::AuthorizationResponse;

/// The rest of the pipeline, as seen by a middleware.
pub trait AuthorizationHandler: Send + Sync {
	fn handle(&self, request: &AuthorizationRequest) -> Result<AuthorizationResponse>;
}

/// Single-use continuation over the stages not yet visited.
///
/// The stages are shared with the pipeline; a handler only holds its position.
/// Calling [`handle`](AuthorizationHandler::handle) a second time on the same
/// instance fails with [`AuthzError::HandlerReuse`].
pub struct PipelineHandler {
	stages: Arc<[Arc<dyn AuthorizationMiddleware>]>,
	position: usize,
	called: AtomicBool,
}

impl PipelineHandler {
	pub fn new(stages: Arc<[Arc<dyn AuthorizationMiddleware>]>) -> Self {
		Self::at(stages, 0)
	}

	fn at(stages: Arc<[Arc<dyn AuthorizationMiddleware>]>, position: usize) -> Self {
		Self {
			stages,
			position,
			called: AtomicBool::new(false),
		}
	}
}

impl AuthorizationHandler for PipelineHandler {
	fn handle(&self, request: &AuthorizationRequest) -> Result<AuthorizationResponse> {
		let Some(stage) = self.stages.get(self.position) else {
			return Err(AuthzError::EmptyPipeline);
		};
		if self.called.swap(true, Ordering::AcqRel) {
			return Err(AuthzError::HandlerReuse);
		}

		let next = Self::at(Arc::clone(&self.stages), self.position + 1);
		stage.process(request, &next)
	}
}
