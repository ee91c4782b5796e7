//! A single observable user record bound to views that re-render
//! when, and only when, the values they read change.
//!
//! The reactive core ([`Var`], [`Computed`], [`Reaction`]) tracks reads
//! per cell: a [`Reaction`] that only read `last_name` is never re-run
//! by a write to `first_name`.

pub mod macros;

mod addr;
mod batch;
mod computed;
mod context;
mod dependencies;
mod evaluation;
mod hashed;
mod host;
mod reaction;
mod store;
mod var;
pub mod view;

use std::rc::{Rc, Weak};

pub use batch::{batch, in_batch};
pub use computed::Computed;
pub use context::StoreContext;
pub use evaluation::Evaluation;
pub use hashed::Hashed;
pub use host::{Event, Host};
pub use reaction::{Reaction, Reactive};
pub use store::{UserRecord, UserStore};
pub use var::Var;

pub trait Derived: 'static {
	fn invalidate(self: Rc<Self>, invalid: Invalid);
}

pub trait Observable: 'static {
	/// Bring the observable up to date and return
	/// the resulting version.
	fn update(&self) -> Version;

	/// The current version, without recomputing.
	fn version(&self) -> Version;

	/// Notify this observable that `derived` stopped
	/// to listen.
	fn not_used_by(&self, derived: &Weak<dyn Derived>);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
	Valid,
	Invalid(Invalid),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Invalid {
	/// A transitive dependency changed; the direct ones may not have.
	Maybe,
	Definitely,
}

/// Identifies one value of an observable. The revision moves on every
/// change, so two values that share a hash still differ in version.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Version {
	hash: u64,
	revision: u64,
}

impl Version {
	pub(crate) const INITIAL: Version = Version {
		hash: 0,
		revision: 0,
	};

	pub(crate) fn new(hash: u64, revision: u64) -> Self {
		Version { hash, revision }
	}
}
