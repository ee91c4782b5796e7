use crate::UserStore;

/// Handed explicitly to every view constructor in the tree, so no
/// view has to receive the store through its parent's arguments.
#[derive(Clone, Debug)]
pub struct StoreContext {
	store: UserStore,
}

impl StoreContext {
	pub fn new(store: UserStore) -> Self {
		StoreContext { store }
	}

	pub fn store(&self) -> &UserStore {
		&self.store
	}
}
