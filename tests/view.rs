use observable_user::view::{
	App, Component, InitialNameShower, LastNameShower, NameShower, Observer, Phase, View,
	TOGGLE_NAMES,
};
use observable_user::{Evaluation, Event, Host, StoreContext, UserRecord, UserStore};


use mock::Spy;

fn context() -> StoreContext {
	StoreContext::new(UserStore::create(UserRecord::default()))
}

fn lines(view: &(dyn View + 'static)) -> Vec<String> {
	view.lines()
}

#[test]
fn end_to_end_change_name() {
	let mut host = Host::mount(UserRecord::default());

	assert_eq!(
		host.screen(),
		[
			"Initial first name: Ben",
			"firstName: Ben",
			"lastName: Parnell",
			"fullName: Ben Parnell",
			"[Change name]",
		]
		.join("\n")
	);

	host.dispatch(Event::ChangeName);

	assert_eq!(
		host.screen(),
		[
			"Initial first name: Ben",
			"firstName: Alfie",
			"lastName: Parnell",
			"fullName: Alfie Parnell",
			"[Change name]",
		]
		.join("\n")
	);
	assert_eq!(host.delivered(), 1);
}

#[test]
fn toggle_alternates_and_only_the_observer_follows() {
	let mut host = Host::mount(UserRecord::default());

	for click in 1..=10 {
		host.dispatch(Event::ChangeName);

		let expected = TOGGLE_NAMES[click % 2];
		assert_eq!(*host.store().first_name_once(), expected);

		let names = host.app().child(NameShower::NAME).map(lines);
		assert_eq!(
			names,
			Some(vec![
				format!("firstName: {expected}"),
				String::from("lastName: Parnell"),
				format!("fullName: {expected} Parnell"),
			])
		);

		let initial = host.app().child(InitialNameShower::NAME);
		assert_eq!(initial.map(lines), Some(vec![String::from("Initial first name: Ben")]));
		assert_eq!(initial.map(|view| view.renders()), Some(1));
	}

	let renders = host.app().child(NameShower::NAME).map(|view| view.renders());
	assert_eq!(renders, Some(11));
}

#[test]
fn last_name_shower_renders_once() {
	let cx = context();
	let app = App::new(&cx).with_child(Observer::new(LastNameShower, &cx));
	let mut host = Host::with_app(app);

	for _ in 0..6 {
		host.dispatch(Event::ChangeName);
	}

	let last_name = host.app().child(LastNameShower::NAME);
	assert_eq!(last_name.map(|view| view.renders()), Some(1));
	assert_eq!(last_name.map(lines), Some(vec![String::from("lastName: Parnell")]));
}

#[test]
fn refresh_rerenders_the_frozen_snapshot() {
	let mut host = Host::mount(UserRecord::default());
	host.dispatch(Event::ChangeName);
	host.dispatch(Event::Refresh);

	let initial = host.app().child(InitialNameShower::NAME);
	assert_eq!(initial.map(|view| view.renders()), Some(2));
	assert_eq!(initial.map(lines), Some(vec![String::from("Initial first name: Ben")]));

	let names = host.app().child(NameShower::NAME);
	assert_eq!(names.map(|view| view.renders()), Some(3));
	assert!(host.screen().contains("firstName: Alfie"));
}

#[test]
fn views_move_through_mount_phases() {
	let cx = context();
	let observer = Observer::new(NameShower, &cx);
	let snapshot = InitialNameShower::new(&cx);

	assert_eq!(observer.phase(), Phase::Unmounted);
	assert_eq!(snapshot.phase(), Phase::Unmounted);
	assert_eq!(observer.renders(), 0);

	observer.mount();
	snapshot.mount();

	assert_eq!(observer.phase(), Phase::Displaying);
	assert_eq!(snapshot.phase(), Phase::Displaying);
	assert_eq!(observer.reaction().dependencies(), 2);
	assert_eq!(observer.reaction().name(), NameShower::NAME);
}

#[test]
fn snapshot_is_taken_at_construction_not_mount() {
	let cx = context();
	let snapshot = InitialNameShower::new(&cx);

	cx.store().change_name("Alfie");
	snapshot.mount();

	assert_eq!(snapshot.lines(), vec![String::from("Initial first name: Ben")]);
}

struct SpiedFirstName {
	spy: mock::SharedMock,
}

impl Component for SpiedFirstName {
	const NAME: &'static str = "SpiedFirstName";

	fn render(&self, store: &UserStore, cx: &Evaluation) -> Vec<String> {
		let first_name = store.first_name(cx).clone();
		self.spy.get().rendered(first_name.clone());
		vec![first_name]
	}
}

#[test]
fn observer_renders_once_per_change() {
	let cx = context();
	let spy = mock::SharedMock::new();

	let view = Observer::new(SpiedFirstName { spy: spy.clone() }, &cx);

	spy.get()
		.expect_rendered()
		.with(mockall::predicate::eq(String::from("Ben")))
		.times(1)
		.return_const(());
	view.mount();
	spy.get().checkpoint();

	spy.get()
		.expect_rendered()
		.with(mockall::predicate::eq(String::from("Alfie")))
		.times(1)
		.return_const(());
	cx.store().change_name("Alfie");
	spy.get().checkpoint();

	spy.get().expect_rendered().times(0).return_const(());
	cx.store().change_name("Alfie");
	spy.get().checkpoint();
}

#[test]
fn button_resets_unknown_names() {
	let host = Host::mount(UserRecord::new("Carol", "Parnell", "carol@example.com"));
	assert!(host.screen().starts_with("Initial first name: Carol"));

	host.app().button().click();
	assert_eq!(*host.store().first_name_once(), "Ben");
	assert_eq!(host.app().button().label(), "Change name");
}

#[test]
fn observer_follows_a_write_with_a_colliding_hash() {
	let mut host = Host::mount(UserRecord::new(
		"hvbsoyqkX@tP\"gbE",
		"Parnell",
		"ben.parnell@clock.co.uk",
	));

	host.dispatch(Event::ChangeName);

	let names = host.app().child(NameShower::NAME).map(lines);
	assert_eq!(
		names,
		Some(vec![
			String::from("firstName: Ben"),
			String::from("lastName: Parnell"),
			String::from("fullName: Ben Parnell"),
		])
	);
}
