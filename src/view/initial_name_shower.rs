use crate::view::{Frame, View};
use crate::StoreContext;

/// Reads `first_name` once, untracked, when constructed. Later writes
/// never reach it; a refresh shows the same frozen value.
pub struct InitialNameShower {
	first_name: String,
	frame: Frame,
}

impl InitialNameShower {
	pub const NAME: &'static str = "InitialNameShower";

	pub fn new(cx: &StoreContext) -> Self {
		InitialNameShower {
			first_name: cx.store().first_name_once().clone(),
			frame: Frame::default(),
		}
	}

	fn render(&self) {
		self.frame
			.present(vec![format!("Initial first name: {}", self.first_name)]);
	}
}

impl View for InitialNameShower {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn mount(&self) {
		self.frame.mounted();
		self.render();
	}

	fn refresh(&self) {
		self.render();
	}

	fn frame(&self) -> &Frame {
		&self.frame
	}
}
