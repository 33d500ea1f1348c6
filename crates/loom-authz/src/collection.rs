// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered, immutable rule collections.
//!
//! Insertion order is preserved and significant: strategies evaluate rules in
//! iteration order and stop at the first match. Cloning a collection shares the
//! underlying storage.

use std::fmt;
use std::sync::Arc;

/// An ordered, immutable sequence of rules.
pub struct Collection<T> {
	items: Arc<[T]>,
}

impl<T> Collection<T> {
	pub fn new(items: Vec<T>) -> Self {
		Self {
			items: items.into(),
		}
	}

	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	/// Number of rules.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}
}

impl<T: Clone> Collection<T> {
	/// Materializes the rules into an owned vector.
	pub fn to_vec(&self) -> Vec<T> {
		self.items.to_vec()
	}
}

impl<T> Clone for Collection<T> {
	fn clone(&self) -> Self {
		Self {
			items: Arc::clone(&self.items),
		}
	}
}

impl<T> Default for Collection<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T> From<Vec<T>> for Collection<T> {
	fn from(items: Vec<T>) -> Self {
		Self::new(items)
	}
}

impl<T> FromIterator<T> for Collection<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a, T> IntoIterator for &'a Collection<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T> fmt::Debug for Collection<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Collection")
			.field("len", &self.items.len())
			.finish()
	}
}
