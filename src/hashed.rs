use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Deref;

use crate::Version;

/// A value paired with the fxhash of its contents and a revision counter.
///
/// The hash is only a fast path: equal hashes fall back to comparing
/// values, since fxhash collides.
pub struct Hashed<T> {
	pub value: T,
	pub hash: u64,
	revision: u64,
}

impl<T: Hash + PartialEq> Hashed<T> {
	pub fn new(value: T) -> Self {
		let hash = fxhash::hash64(&value);
		Self {
			value,
			hash,
			revision: 0,
		}
	}

	/// Store `value`, returning the previous one and whether it differs.
	pub fn replace(&mut self, value: T) -> (T, bool) {
		let hash = fxhash::hash64(&value);
		let changed = hash != self.hash || value != self.value;
		let old = std::mem::replace(&mut self.value, value);
		self.hash = hash;
		if changed {
			self.revision += 1;
		}
		(old, changed)
	}

	/// Recompute the hash after an in-place edit. `before` is the value
	/// prior to the edit. Returns `true` when the value changed.
	pub fn rehash(&mut self, before: &T) -> bool {
		let hash = fxhash::hash64(&self.value);
		let changed = hash != self.hash || self.value != *before;
		self.hash = hash;
		if changed {
			self.revision += 1;
		}
		changed
	}
}

impl<T> Hashed<T> {
	pub fn version(&self) -> Version {
		Version::new(self.hash, self.revision)
	}
}

impl<T> Deref for Hashed<T> {
	type Target = T;
	fn deref(&self) -> &Self::Target {
		&self.value
	}
}

impl<T> Debug for Hashed<T>
where
	T: Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.value.fmt(f)
	}
}
