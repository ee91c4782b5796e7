use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use crate::addr::WeakAddr;
use crate::batch::batch;
use crate::evaluation::Evaluation;
use crate::{Derived, Hashed, Invalid, Observable, Version};

/// A mutable observable cell.
///
/// Reads through [`Var::get`] subscribe the running evaluation to this
/// cell alone; writes that change the value notify exactly the
/// subscribers of this cell.
pub struct Var<T> {
	body: Rc<VarBody<T>>,
}

struct VarBody<T> {
	value: RefCell<Hashed<T>>,
	used_by: RefCell<BTreeSet<WeakAddr<dyn Derived>>>,
}

impl<T> Clone for Var<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

impl<T> Default for Var<T>
where
	T: Default + Hash + PartialEq + 'static,
{
	fn default() -> Self {
		Var::new(Default::default())
	}
}

impl<T> Var<T>
where
	T: 'static,
{
	pub fn new(value: T) -> Self
	where
		T: Hash + PartialEq,
	{
		Var {
			body: Rc::new(VarBody {
				value: RefCell::new(Hashed::new(value)),
				used_by: RefCell::new(BTreeSet::new()),
			}),
		}
	}

	pub fn get(&self, eval: &impl AsRef<Evaluation>) -> Ref<'_, T> {
		let eval = eval.as_ref();
		let value = self.body.value.borrow();
		eval.based_on(self.body.clone(), value.version());
		self.body.used_by(eval.parent());
		Ref::map(value, |v| &v.value)
	}

	/// Read without subscribing. The caller gets a snapshot.
	#[inline]
	pub fn get_once(&self) -> Ref<'_, T> {
		Ref::map(self.body.value.borrow(), |v| &v.value)
	}

	#[inline]
	pub fn set(&self, value: T)
	where
		T: Hash + PartialEq,
	{
		let _ = self.replace(value);
	}

	pub fn replace(&self, value: T) -> T
	where
		T: Hash + PartialEq,
	{
		let (old, changed) = self.body.value.borrow_mut().replace(value);

		if changed {
			self.body.notify();
		}

		old
	}

	/// Edit in place. Subscribers are notified only if the value
	/// differs from a copy taken before `func` ran.
	pub fn update(&self, func: impl FnOnce(&mut T))
	where
		T: Clone + Hash + PartialEq,
	{
		let changed = {
			let mut value = self.body.value.borrow_mut();
			let before = value.value.clone();
			func(&mut value.value);
			value.rehash(&before)
		};

		if changed {
			self.body.notify();
		}
	}

	/// Number of live evaluations currently subscribed to this cell.
	pub fn observers(&self) -> usize {
		self.body
			.used_by
			.borrow()
			.iter()
			.filter(|d| d.strong_count() > 0)
			.count()
	}
}

impl<T> VarBody<T> {
	fn notify(&self) {
		batch(|| {
			let dependents: Vec<_> = {
				let mut used_by = self.used_by.borrow_mut();
				used_by.retain(|d| d.strong_count() > 0);
				used_by.iter().filter_map(|d| d.upgrade()).collect()
			};

			for derived in dependents {
				derived.invalidate(Invalid::Definitely)
			}
		})
	}

	fn used_by(&self, derived: Weak<dyn Derived>) {
		self.used_by.borrow_mut().insert(WeakAddr::new(derived));
	}

	fn not_used_by(&self, derived: &Weak<dyn Derived>) {
		self.used_by
			.borrow_mut()
			.remove(&WeakAddr::new(derived.clone()));
	}
}

impl<T: 'static> Observable for VarBody<T> {
	fn version(&self) -> Version {
		self.value.borrow().version()
	}

	fn update(&self) -> Version {
		self.version()
	}

	fn not_used_by(&self, derived: &Weak<dyn Derived>) {
		VarBody::not_used_by(self, derived)
	}
}

impl<T> Debug for Var<T>
where
	T: 'static + Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.get_once().fmt(f)
	}
}
