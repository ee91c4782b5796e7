use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::addr::RcAddr;
use crate::{Derived, Observable, Version};

/// The observables one evaluation read, with the version it saw of each.
#[derive(Default)]
pub struct Dependencies {
	based_on: BTreeMap<RcAddr<dyn Observable>, Version>,
}

impl Dependencies {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn len(&self) -> usize {
		self.based_on.len()
	}

	pub(crate) fn based_on(&mut self, observable: Rc<dyn Observable>, version: Version) {
		self.based_on.insert(RcAddr::new(observable), version);
	}

	/// `true` when every dependency is still at the version we saw.
	pub(crate) fn are_valid(&self) -> bool {
		self.based_on
			.iter()
			.all(|(base, version)| base.update() == *version)
	}

	/// Install the dependencies of a fresh evaluation, unsubscribing
	/// `parent` from everything the previous one read and this one didn't.
	pub(crate) fn replace(&mut self, next: Dependencies, parent: &Weak<dyn Derived>) {
		let prev = std::mem::replace(&mut self.based_on, next.based_on);

		prev.keys()
			.filter(|k| !self.based_on.contains_key(*k))
			.for_each(|k| k.not_used_by(parent));
	}

	pub(crate) fn release(&mut self, parent: &Weak<dyn Derived>) {
		for item in self.based_on.keys() {
			item.not_used_by(parent)
		}
	}
}
