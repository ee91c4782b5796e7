use crate::view::Component;
use crate::{Evaluation, UserStore};

/// Shows the live name fields.
pub struct NameShower;

impl Component for NameShower {
	const NAME: &'static str = "NameShower";

	fn render(&self, store: &UserStore, cx: &Evaluation) -> Vec<String> {
		vec![
			format!("firstName: {}", *store.first_name(cx)),
			format!("lastName: {}", *store.last_name(cx)),
			format!("fullName: {}", store.full_name(cx)),
		]
	}
}
