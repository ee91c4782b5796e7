use crate::view::App;
use crate::{StoreContext, UserRecord, UserStore};

/// Input the host delivers to a mounted app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	/// Activate the "Change name" button.
	ChangeName,
	/// Re-render every view for a reason unrelated to the store.
	Refresh,
}

/// The rendering environment: mounts an [`App`] once, then delivers
/// events one at a time, each run to completion before the next.
pub struct Host {
	app: App,
	delivered: usize,
}

impl Host {
	/// Create the store from `initial`, build the default app over it
	/// and mount it.
	pub fn mount(initial: UserRecord) -> Self {
		let cx = StoreContext::new(UserStore::create(initial));
		Host::with_app(App::new(&cx))
	}

	pub fn with_app(app: App) -> Self {
		tracing::info!(user = ?app.context().store(), "mounting app");
		app.mount();
		Host { app, delivered: 0 }
	}

	pub fn dispatch(&mut self, event: Event) {
		tracing::debug!(?event, "dispatching event");
		match event {
			Event::ChangeName => self.app.button().click(),
			Event::Refresh => self.app.refresh(),
		}
		self.delivered += 1;
	}

	pub fn app(&self) -> &App {
		&self.app
	}

	pub fn store(&self) -> &UserStore {
		self.app.context().store()
	}

	/// Events delivered since mount.
	pub fn delivered(&self) -> usize {
		self.delivered
	}

	pub fn screen(&self) -> String {
		self.app.lines().join("\n")
	}
}
