// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! List-based access control.

mod entry;
mod list;
mod middleware;

pub use entry::{AclEntry, BasicAclEntry};
pub use list::{AccessControlList, AclEntriesCollection};
pub use middleware::AclMiddleware;
