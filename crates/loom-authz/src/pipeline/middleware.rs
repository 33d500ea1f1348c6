// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::debug;

use crate::access_control::AccessControl;
use crate::error::Result;
use crate::pipeline::AuthorizationHandler;
use crate::request::AuthorizationRequest;
use crate::response::AuthorizationResponse;

/// A pipeline stage. It either decides the request itself or hands it to
/// `handler`, the rest of the pipeline.
pub trait AuthorizationMiddleware: Send + Sync {
	fn process(
		&self,
		request: &AuthorizationRequest,
		handler: &dyn AuthorizationHandler,
	) -> Result<AuthorizationResponse>;
}

/// Permits when `strategy` grants access, otherwise returns whatever the rest
/// of the pipeline decides.
pub(crate) fn grant_or_delegate(
	strategy: &dyn AccessControl,
	request: &AuthorizationRequest,
	handler: &dyn AuthorizationHandler,
	reason: impl FnOnce() -> String,
	middleware: &'static str,
) -> Result<AuthorizationResponse> {
	let granted = strategy.has_access(
		request.subject(),
		request.resource(),
		request.action(),
		request.context(),
	);

	if granted {
		debug!(middleware, strategy = strategy.name(), "access granted");
		return Ok(AuthorizationResponse::permit(reason(), middleware));
	}

	debug!(middleware, "no match, delegating to next handler");
	handler.handle(request)
}

/// Wraps any [`AccessControl`] strategy as a pipeline stage.
pub struct AccessControlMiddleware {
	access_control: Box<dyn AccessControl>,
}

impl AccessControlMiddleware {
	pub const NAME: &'static str = "AccessControlMiddleware";

	pub fn new(access_control: impl AccessControl + 'static) -> Self {
		Self {
			access_control: Box::new(access_control),
		}
	}
}

impl AuthorizationMiddleware for AccessControlMiddleware {
	fn process(
		&self,
		request: &AuthorizationRequest,
		handler: &dyn AuthorizationHandler,
	) -> Result<AuthorizationResponse> {
		let strategy = self.access_control.as_ref();
		grant_or_delegate(
			strategy,
			request,
			handler,
			|| format!("Access granted by {}", strategy.name()),
			Self::NAME,
		)
	}
}

/// Terminal stage that denies without consulting anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllMiddleware;

impl DenyAllMiddleware {
	pub const NAME: &'static str = "DenyAllMiddleware";
	pub const REASON: &'static str = "No authorization rule matched";
}

impl AuthorizationMiddleware for DenyAllMiddleware {
	fn process(
		&self,
		_request: &AuthorizationRequest,
		_handler: &dyn AuthorizationHandler,
	) -> Result<AuthorizationResponse> {
		Ok(AuthorizationResponse::deny(Self::REASON, Self::NAME))
	}
}
