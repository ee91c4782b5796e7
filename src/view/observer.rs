use crate::macros::enclose;
use crate::view::{Frame, View};
use crate::{Evaluation, Reaction, StoreContext, UserStore};

/// A render function that reads the store through a tracked [`Evaluation`].
pub trait Component: 'static {
	const NAME: &'static str;

	fn render(&self, store: &UserStore, cx: &Evaluation) -> Vec<String>;
}

/// Wraps a [`Component`] in a [`Reaction`]: every render subscribes the
/// view to exactly the cells it read, and any write to one of them
/// renders it again.
pub struct Observer {
	name: &'static str,
	frame: Frame,
	reaction: Reaction,
}

impl Observer {
	pub fn new<C: Component>(component: C, cx: &StoreContext) -> Self {
		let frame = Frame::default();
		let reaction = Reaction::new_with_name(
			C::NAME,
			Box::new(enclose!((frame, cx) move |ev: &Evaluation| {
				let lines = component.render(cx.store(), ev);
				frame.present(lines);
				tracing::trace!(view = C::NAME, renders = frame.renders(), "rendered");
			})),
		);

		Observer {
			name: C::NAME,
			frame,
			reaction,
		}
	}

	pub fn reaction(&self) -> &Reaction {
		&self.reaction
	}
}

impl View for Observer {
	fn name(&self) -> &'static str {
		self.name
	}

	fn mount(&self) {
		self.frame.mounted();
		self.reaction.update();
	}

	fn refresh(&self) {
		self.reaction.update_unchecked();
	}

	fn frame(&self) -> &Frame {
		&self.frame
	}
}
