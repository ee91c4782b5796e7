//! Display components bound to a [`UserStore`](crate::UserStore).
//!
//! A view produces lines of text into its [`Frame`]. [`Observer`] views
//! subscribe to what they read and re-render on their own;
//! [`InitialNameShower`] reads once and keeps that snapshot.

mod app;
mod frame;
mod initial_name_shower;
mod last_name_shower;
mod name_shower;
mod observer;

pub use app::{toggle_name, App, Button, TOGGLE_NAMES};
pub use frame::{Frame, Phase};
pub use initial_name_shower::InitialNameShower;
pub use last_name_shower::LastNameShower;
pub use name_shower::NameShower;
pub use observer::{Component, Observer};

pub trait View {
	fn name(&self) -> &'static str;

	/// Render for the first time. Called once by the host.
	fn mount(&self);

	/// Render again for a reason unrelated to store changes.
	fn refresh(&self);

	fn frame(&self) -> &Frame;

	fn lines(&self) -> Vec<String> {
		self.frame().lines()
	}

	fn renders(&self) -> usize {
		self.frame().renders()
	}

	fn phase(&self) -> Phase {
		self.frame().phase()
	}
}
