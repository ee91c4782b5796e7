use std::cmp::Ordering;
use std::ops::Deref;
use std::rc::{Rc, Weak};

/// Smart pointers that can be identified by the allocation they point at.
pub trait Address {
	fn address(&self) -> *const ();
}

impl<T: ?Sized> Address for Rc<T> {
	fn address(&self) -> *const () {
		Rc::as_ptr(self) as *const ()
	}
}

impl<T: ?Sized> Address for Weak<T> {
	fn address(&self) -> *const () {
		Weak::as_ptr(self) as *const ()
	}
}

/// Keys a pointer by its thin address, so two trait objects
/// over the same allocation compare equal regardless of vtable.
pub struct ByAddr<P> {
	ptr: P,
}

pub type RcAddr<T> = ByAddr<Rc<T>>;
pub type WeakAddr<T> = ByAddr<Weak<T>>;

impl<P> ByAddr<P> {
	pub fn new(ptr: P) -> Self {
		ByAddr { ptr }
	}
}

impl<P> Deref for ByAddr<P> {
	type Target = P;
	fn deref(&self) -> &P {
		&self.ptr
	}
}

impl<P: Address> PartialEq for ByAddr<P> {
	fn eq(&self, other: &Self) -> bool {
		self.ptr.address() == other.ptr.address()
	}
}

impl<P: Address> Eq for ByAddr<P> {}

impl<P: Address> Ord for ByAddr<P> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.ptr.address().cmp(&other.ptr.address())
	}
}

impl<P: Address> PartialOrd for ByAddr<P> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
