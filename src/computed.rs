use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use crate::addr::WeakAddr;
use crate::dependencies::Dependencies;
use crate::{Derived, Evaluation, Hashed, Invalid, Observable, State, Version};

/// A cached derivation. Evaluated lazily, invalidated when any value it
/// read is written, and re-validated against dependency versions before
/// being recomputed.
pub struct Computed<T>
where
	T: Hash + PartialEq + 'static,
{
	body: Rc<ComputedBody<T>>,
}

impl<T> Clone for Computed<T>
where
	T: Hash + PartialEq + 'static,
{
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

struct ComputedBody<T>
where
	T: Hash + PartialEq + 'static,
{
	value: RefCell<Option<Hashed<T>>>,
	inner: RefCell<ComputedInner<T>>,
}

struct ComputedInner<T>
where
	T: Hash + PartialEq + 'static,
{
	func: Box<dyn Fn(&Evaluation) -> T>,
	state: State,
	used_by: BTreeSet<WeakAddr<dyn Derived>>,
	dependencies: Dependencies,
	this: Weak<ComputedBody<T>>,
}

impl<T> Drop for ComputedInner<T>
where
	T: Hash + PartialEq + 'static,
{
	fn drop(&mut self) {
		let refr = self.this.clone() as Weak<dyn Derived>;
		self.dependencies.release(&refr);
	}
}

impl<T> Computed<T>
where
	T: Hash + PartialEq + 'static,
{
	pub fn new(func: Box<dyn Fn(&Evaluation) -> T>) -> Self {
		Computed {
			body: Rc::new_cyclic(|this| ComputedBody {
				value: RefCell::new(None),
				inner: RefCell::new(ComputedInner {
					func,
					state: State::Invalid(Invalid::Definitely),
					used_by: BTreeSet::new(),
					dependencies: Dependencies::new(),
					this: this.clone(),
				}),
			}),
		}
	}

	#[inline]
	pub fn get_once(&self) -> Ref<'_, T> {
		self.body.refresh();
		self.body.value()
	}

	pub fn get<'a>(&'a self, cx: &impl AsRef<Evaluation>) -> Ref<'a, T> {
		let eval = cx.as_ref();
		self.body.refresh();
		eval.based_on(self.body.clone(), self.body.version());
		self.body.inner.borrow_mut().used_by.insert(WeakAddr::new(eval.parent()));
		self.body.value()
	}

	/// `true` when the cached value can be returned without recomputing.
	pub fn is_valid(&self) -> bool {
		self.body.inner.borrow().state == State::Valid
	}
}

impl<T> ComputedBody<T>
where
	T: Hash + PartialEq + 'static,
{
	fn value(&self) -> Ref<'_, T> {
		Ref::map(self.value.borrow(), |v| {
			&v.as_ref()
				.expect("computed value is evaluated before it is read")
				.value
		})
	}

	fn refresh(&self) {
		let mut inner = self.inner.borrow_mut();

		let state = inner.state;
		let is_valid = match state {
			State::Valid => return,
			State::Invalid(Invalid::Definitely) => false,
			State::Invalid(Invalid::Maybe) => inner.dependencies.are_valid(),
		};

		if is_valid {
			inner.state = State::Valid;
			return;
		}

		let this = inner.this.clone() as Weak<dyn Derived>;
		let evaluation = Evaluation::new(this.clone());
		let value = (inner.func)(&evaluation);
		inner.dependencies.replace(evaluation.take(), &this);
		inner.state = State::Valid;

		let mut current = self.value.borrow_mut();
		match current.as_mut() {
			Some(hashed) => {
				hashed.replace(value);
			}
			None => *current = Some(Hashed::new(value)),
		}
	}
}

impl<T> Observable for ComputedBody<T>
where
	T: Hash + PartialEq + 'static,
{
	fn update(&self) -> Version {
		self.refresh();
		self.version()
	}

	fn version(&self) -> Version {
		self.value
			.borrow()
			.as_ref()
			.map_or(Version::INITIAL, Hashed::version)
	}

	fn not_used_by(&self, derived: &Weak<dyn Derived>) {
		self.inner
			.borrow_mut()
			.used_by
			.remove(&WeakAddr::new(derived.clone()));
	}
}

impl<T> Derived for ComputedBody<T>
where
	T: Hash + PartialEq + 'static,
{
	fn invalidate(self: Rc<Self>, invalid: Invalid) {
		let dependents: Vec<_> = {
			let mut inner = self.inner.borrow_mut();
			if inner.state != State::Valid {
				return;
			}
			inner.state = State::Invalid(invalid);
			inner.used_by.iter().filter_map(|d| d.upgrade()).collect()
		};

		for item in dependents {
			item.invalidate(Invalid::Maybe);
		}
	}
}
