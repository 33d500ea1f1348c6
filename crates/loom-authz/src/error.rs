// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for authorization operations.
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Errors raised by the authorization pipeline and its building blocks.
///
/// A denied request is never an error: it is an `Ok` response with
/// `permitted == false`. Every variant here indicates invalid input or a
/// wiring bug in the embedding application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthzError {
	#[error("Pipeline is empty, no middleware left to process the request")]
	EmptyPipeline,

	#[error("Handler already processed a request and cannot be run twice")]
	HandlerReuse,

	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	#[error("Invalid entity {field}: {reason}")]
	InvalidEntity { field: &'static str, reason: String },

	#[error("Invalid request: {0}")]
	InvalidRequest(String),
}

impl AuthzError {
	/// Create an invalid configuration error
	pub fn invalid_configuration(msg: impl Into<String>) -> Self {
		Self::InvalidConfiguration(msg.into())
	}

	/// Returns true for errors caused by pipeline wiring rather than input values.
	pub fn is_configuration_error(&self) -> bool {
		matches!(
			self,
			Self::EmptyPipeline | Self::HandlerReuse | Self::InvalidConfiguration(_)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wiring_errors_are_configuration_errors() {
		assert!(AuthzError::EmptyPipeline.is_configuration_error());
		assert!(AuthzError::HandlerReuse.is_configuration_error());
		assert!(AuthzError::invalid_configuration("bad").is_configuration_error());
	}

	#[test]
	fn validation_errors_are_not_configuration_errors() {
		let err = AuthzError::InvalidEntity {
			field: "id",
			reason: "cannot be empty".to_string(),
		};
		assert!(!err.is_configuration_error());
		assert!(!AuthzError::InvalidRequest("x".into()).is_configuration_error());
	}

	#[test]
	fn messages_name_the_problem() {
		assert_eq!(
			AuthzError::invalid_configuration("unknown stage 'foo'").to_string(),
			"Invalid configuration: unknown stage 'foo'"
		);
		let err = AuthzError::InvalidEntity {
			field: "type",
			reason: "cannot be empty".to_string(),
		};
		assert_eq!(err.to_string(), "Invalid entity type: cannot be empty");
	}
}
