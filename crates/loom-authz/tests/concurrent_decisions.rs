// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::thread;

use loom_authz::acl::{AccessControlList, AclMiddleware, BasicAclEntry};
use loom_authz::{
	AuthorizationEntity, AuthorizationPipeline, AuthorizationRequest, Context, DenyAllMiddleware,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn pipeline_is_shareable() {
	assert_send_sync::<AuthorizationPipeline>();
}

#[test]
fn concurrent_process_calls_are_independent() {
	let acl = AccessControlList::from_entries([BasicAclEntry::new("user::*", "order::*", "view")]);
	let pipeline = AuthorizationPipeline::empty()
		.with_handler(AclMiddleware::new(acl))
		.with_handler(DenyAllMiddleware);

	thread::scope(|scope| {
		for worker in 0..8 {
			let pipeline = &pipeline;
			scope.spawn(move || {
				for i in 0..200 {
					let action = if (worker + i) % 2 == 0 { "view" } else { "delete" };
					let request = AuthorizationRequest::new(
						AuthorizationEntity::new("user", worker.to_string()).unwrap(),
						AuthorizationEntity::new("order", i.to_string()).unwrap(),
						action,
						Context::new(),
					)
					.unwrap();

					let response = pipeline.process(&request).unwrap();
					assert_eq!(response.is_permitted(), action == "view");
				}
			});
		}
	});
}
