use smallvec::SmallVec;

use crate::macros::enclose;
use crate::view::{InitialNameShower, NameShower, Observer, View};
use crate::{StoreContext, UserStore};

/// The two first names the button alternates between.
pub const TOGGLE_NAMES: [&str; 2] = ["Ben", "Alfie"];

/// Flip `first_name` between the two [`TOGGLE_NAMES`]. Any other
/// current value is replaced by the first of them.
pub fn toggle_name(store: &UserStore) {
	let next = if *store.first_name_once() == TOGGLE_NAMES[0] {
		TOGGLE_NAMES[1]
	} else {
		TOGGLE_NAMES[0]
	};
	store.change_name(next);
}

pub struct Button {
	label: &'static str,
	on_click: Box<dyn Fn()>,
}

impl Button {
	pub fn new(label: &'static str, on_click: impl Fn() + 'static) -> Self {
		Button {
			label,
			on_click: Box::new(on_click),
		}
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn click(&self) {
		tracing::trace!(button = self.label, "clicked");
		(self.on_click)()
	}
}

/// Root of the view tree: the initial-name snapshot, the live name
/// view, any extra children, and the "Change name" button.
pub struct App {
	cx: StoreContext,
	children: SmallVec<[Box<dyn View>; 4]>,
	button: Button,
}

impl App {
	pub fn new(cx: &StoreContext) -> Self {
		let mut children: SmallVec<[Box<dyn View>; 4]> = SmallVec::new();
		children.push(Box::new(InitialNameShower::new(cx)));
		children.push(Box::new(Observer::new(NameShower, cx)));

		let button = Button::new(
			"Change name",
			enclose!((cx) move || toggle_name(cx.store())),
		);

		App {
			cx: cx.clone(),
			children,
			button,
		}
	}

	/// Append a view after the default children. Must be called before
	/// the app is mounted.
	pub fn with_child(mut self, view: impl View + 'static) -> Self {
		self.children.push(Box::new(view));
		self
	}

	pub fn context(&self) -> &StoreContext {
		&self.cx
	}

	pub fn mount(&self) {
		for child in &self.children {
			child.mount();
		}
	}

	pub fn refresh(&self) {
		for child in &self.children {
			child.refresh();
		}
	}

	pub fn button(&self) -> &Button {
		&self.button
	}

	pub fn children(&self) -> impl Iterator<Item = &(dyn View + 'static)> + '_ {
		self.children.iter().map(|child| &**child)
	}

	pub fn child(&self, name: &str) -> Option<&(dyn View + 'static)> {
		self.children().find(|child| child.name() == name)
	}

	pub fn lines(&self) -> Vec<String> {
		let mut lines: Vec<String> = self.children().flat_map(|child| child.lines()).collect();
		lines.push(format!("[{}]", self.button.label()));
		lines
	}
}
