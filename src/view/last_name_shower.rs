use crate::view::Component;
use crate::{Evaluation, UserStore};

/// Depends on `last_name` only, so a first name change never renders it.
pub struct LastNameShower;

impl Component for LastNameShower {
	const NAME: &'static str = "LastNameShower";

	fn render(&self, store: &UserStore, cx: &Evaluation) -> Vec<String> {
		vec![format!("lastName: {}", *store.last_name(cx))]
	}
}
