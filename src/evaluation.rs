use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::dependencies::Dependencies;
use crate::{Derived, Observable, Version};

/// A tracked execution. Every observable read through it becomes a
/// dependency of `parent`.
pub struct Evaluation {
	dependencies: RefCell<Dependencies>,
	parent: Weak<dyn Derived>,
}

impl AsRef<Evaluation> for Evaluation {
	fn as_ref(&self) -> &Evaluation {
		self
	}
}

impl Evaluation {
	pub fn new(parent: Weak<dyn Derived>) -> Self {
		Evaluation {
			parent,
			dependencies: RefCell::new(Dependencies::new()),
		}
	}

	pub(crate) fn parent(&self) -> Weak<dyn Derived> {
		self.parent.clone()
	}

	pub(crate) fn based_on(&self, observable: Rc<dyn Observable>, version: Version) {
		self.dependencies
			.borrow_mut()
			.based_on(observable, version);
	}

	pub(crate) fn take(self) -> Dependencies {
		self.dependencies.into_inner()
	}
}
