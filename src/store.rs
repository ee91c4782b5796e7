use std::cell::Ref;
use std::fmt;

use crate::{Computed, Evaluation, Var};

/// Plain, unobserved copy of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRecord {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
}

impl UserRecord {
	pub fn new(
		first_name: impl Into<String>,
		last_name: impl Into<String>,
		email: impl Into<String>,
	) -> Self {
		UserRecord {
			first_name: first_name.into(),
			last_name: last_name.into(),
			email: email.into(),
		}
	}

	pub fn full_name(&self) -> String {
		full_name(&self.first_name, &self.last_name)
	}
}

impl Default for UserRecord {
	fn default() -> Self {
		UserRecord::new("Ben", "Parnell", "ben.parnell@clock.co.uk")
	}
}

fn full_name(first_name: &str, last_name: &str) -> String {
	format!("{} {}", first_name, last_name)
}

/// Owns the user record, one observable cell per field.
///
/// Cloning yields another handle onto the same cells, never a copy of
/// the record. Tracked reads take an [`Evaluation`]; `*_once` reads
/// return a snapshot and subscribe nothing.
#[derive(Clone)]
pub struct UserStore {
	first_name: Var<String>,
	last_name: Var<String>,
	email: Var<String>,
}

impl UserStore {
	pub fn create(initial: UserRecord) -> Self {
		UserStore {
			first_name: Var::new(initial.first_name),
			last_name: Var::new(initial.last_name),
			email: Var::new(initial.email),
		}
	}

	pub fn first_name(&self, cx: &impl AsRef<Evaluation>) -> Ref<'_, String> {
		self.first_name.get(cx)
	}

	pub fn last_name(&self, cx: &impl AsRef<Evaluation>) -> Ref<'_, String> {
		self.last_name.get(cx)
	}

	pub fn email(&self, cx: &impl AsRef<Evaluation>) -> Ref<'_, String> {
		self.email.get(cx)
	}

	/// Derived on every call, so it can never disagree with its inputs.
	/// Subscribes `cx` to both name cells.
	pub fn full_name(&self, cx: &impl AsRef<Evaluation>) -> String {
		full_name(&self.first_name(cx), &self.last_name(cx))
	}

	pub fn first_name_once(&self) -> Ref<'_, String> {
		self.first_name.get_once()
	}

	pub fn last_name_once(&self) -> Ref<'_, String> {
		self.last_name.get_once()
	}

	pub fn email_once(&self) -> Ref<'_, String> {
		self.email.get_once()
	}

	pub fn full_name_once(&self) -> String {
		full_name(&self.first_name_once(), &self.last_name_once())
	}

	/// A memoised `full_name`, recomputed only after one of the
	/// name cells is written.
	pub fn full_name_computed(&self) -> Computed<String> {
		let first_name = self.first_name.clone();
		let last_name = self.last_name.clone();
		crate::computed!(cx => full_name(&first_name.get(cx), &last_name.get(cx)))
	}

	/// The only write path. Readers subscribed to `first_name` (directly
	/// or through `full_name`) re-run before this returns.
	pub fn change_name(&self, first_name: impl Into<String>) {
		let first_name = first_name.into();
		tracing::debug!(%first_name, "changing first name");
		self.first_name.set(first_name);
	}

	pub fn snapshot(&self) -> UserRecord {
		UserRecord {
			first_name: self.first_name_once().clone(),
			last_name: self.last_name_once().clone(),
			email: self.email_once().clone(),
		}
	}
}

impl fmt::Debug for UserStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UserStore")
			.field("first_name", &self.first_name)
			.field("last_name", &self.last_name)
			.field("email", &self.email)
			.finish()
	}
}
