use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::batch;
use crate::dependencies::Dependencies;
use crate::{Derived, Evaluation, Invalid, State};

pub trait Reactive {
	fn update(&self);
}

/// A tracked side effect. Each run records what it read and is
/// re-run by the enclosing batch when any of it changes.
#[derive(Clone)]
pub struct Reaction {
	body: Rc<ReactionBody>,
}

struct ReactionBody {
	inner: RefCell<ReactionInner>,
	// Set when a write made during the run invalidates this reaction.
	rerun: Cell<bool>,
}

struct ReactionInner {
	state: State,
	name: &'static str,
	func: Box<dyn Fn(&Evaluation)>,
	dependencies: Dependencies,
	this: Weak<ReactionBody>,
}

impl Drop for ReactionInner {
	fn drop(&mut self) {
		let refr = self.this.clone() as Weak<dyn Derived>;
		self.dependencies.release(&refr)
	}
}

impl Reaction {
	#[must_use]
	pub fn new(func: Box<dyn Fn(&Evaluation)>) -> Self {
		Self::new_with_name("<unnamed>", func)
	}

	#[must_use]
	pub fn new_with_name(name: &'static str, func: Box<dyn Fn(&Evaluation)>) -> Self {
		Reaction {
			body: Rc::new_cyclic(|this| ReactionBody {
				inner: RefCell::new(ReactionInner {
					func,
					name,
					state: State::Invalid(Invalid::Definitely),
					dependencies: Dependencies::new(),
					this: this.clone(),
				}),
				rerun: Cell::new(false),
			}),
		}
	}

	pub fn name(&self) -> &'static str {
		self.body.inner.borrow().name
	}

	/// Run only if something this reaction read has changed
	/// (always, on the first call).
	pub fn update(&self) {
		self.body.update();
	}

	/// Run regardless of state.
	pub fn update_unchecked(&self) {
		let mut inner = self.body.inner.borrow_mut();
		if self.body.run(&mut inner) {
			let this = inner.this.clone();
			std::mem::drop(inner);
			ReactionBody::reschedule(this);
		}
	}

	/// Number of observables the last run subscribed to.
	pub fn dependencies(&self) -> usize {
		self.body.inner.borrow().dependencies.len()
	}

	pub fn is_valid(&self) -> bool {
		self.body.inner.borrow().state == State::Valid
	}
}

impl ReactionBody {
	/// Returns `true` when the run invalidated itself and must go again.
	fn run(&self, inner: &mut ReactionInner) -> bool {
		tracing::trace!(reaction = inner.name, "running reaction");

		let this = inner.this.clone() as Weak<dyn Derived>;
		let tracker = Evaluation::new(this.clone());
		(inner.func)(&tracker);

		inner.dependencies.replace(tracker.take(), &this);

		if self.rerun.replace(false) {
			tracing::debug!(reaction = inner.name, "reaction changed its own input, rerunning");
			inner.state = State::Invalid(Invalid::Definitely);
			true
		} else {
			inner.state = State::Valid;
			false
		}
	}

	fn reschedule(this: Weak<ReactionBody>) {
		let reactive = this as Weak<dyn Reactive>;
		batch::batch(|| batch::schedule(reactive));
	}
}

impl Reactive for ReactionBody {
	fn update(&self) {
		let mut inner = self.inner.borrow_mut();

		let state = inner.state;
		let is_valid = match state {
			State::Valid => true,
			State::Invalid(Invalid::Definitely) => false,
			State::Invalid(Invalid::Maybe) => inner.dependencies.are_valid(),
		};

		if is_valid {
			inner.state = State::Valid;
			return;
		}

		if self.run(&mut inner) {
			let this = inner.this.clone();
			std::mem::drop(inner);
			ReactionBody::reschedule(this);
		}
	}
}

impl Derived for ReactionBody {
	fn invalidate(self: Rc<Self>, invalid: Invalid) {
		let Ok(mut inner) = self.inner.try_borrow_mut() else {
			// Borrowed only while running.
			self.rerun.set(true);
			return;
		};

		let state = inner.state;
		match state {
			State::Valid => {
				inner.state = State::Invalid(invalid);
				std::mem::drop(inner);

				let reactive = Rc::downgrade(&self) as Weak<dyn Reactive>;
				batch::batch(|| batch::schedule(reactive));
			}
			State::Invalid(_) if invalid == Invalid::Definitely => {
				inner.state = State::Invalid(Invalid::Definitely);
			}
			State::Invalid(_) => {}
		}
	}
}

impl std::fmt::Debug for Reaction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Reaction")
			.field("name", &self.body.inner.borrow().name)
			.finish()
	}
}
