use std::cell::{Cell, RefCell};
use std::rc::Rc;

use observable_user::{reaction, UserRecord, UserStore};

fn store() -> UserStore {
	UserStore::create(UserRecord::default())
}

#[test]
fn default_record_is_the_reference_user() {
	let record = UserRecord::default();
	assert_eq!(record.first_name, "Ben");
	assert_eq!(record.last_name, "Parnell");
	assert_eq!(record.email, "ben.parnell@clock.co.uk");
	assert_eq!(record.full_name(), "Ben Parnell");
}

#[test]
fn full_name_follows_first_and_last_name() {
	let store = store();
	assert_eq!(store.full_name_once(), "Ben Parnell");

	for name in ["Alfie", "Ben", "", "Mary Ann"] {
		store.change_name(name);
		assert_eq!(*store.first_name_once(), name);
		assert_eq!(
			store.full_name_once(),
			format!("{} {}", *store.first_name_once(), *store.last_name_once())
		);
	}
}

#[test]
fn full_name_read_is_idempotent() {
	let store = store();
	assert_eq!(store.full_name_once(), store.full_name_once());

	store.change_name("Alfie");
	let first = store.full_name_once();
	let second = store.full_name_once();
	assert_eq!(first, second);
	assert_eq!(first, "Alfie Parnell");
}

#[test]
fn change_name_leaves_other_fields_alone() {
	let store = store();
	store.change_name("Alfie");

	assert_eq!(
		store.snapshot(),
		UserRecord::new("Alfie", "Parnell", "ben.parnell@clock.co.uk")
	);
}

#[test]
fn first_name_readers_are_notified() {
	let store = store();
	let seen = Rc::new(RefCell::new(Vec::new()));

	let by_full_name = reaction!((store, seen) cx => {
		seen.borrow_mut().push(store.full_name(cx));
	});
	by_full_name.update();

	store.change_name("Alfie");
	store.change_name("Ben");

	assert_eq!(
		*seen.borrow(),
		vec!["Ben Parnell", "Alfie Parnell", "Ben Parnell"]
	);
}

#[test]
fn last_name_and_email_readers_are_not_notified() {
	let store = store();
	let last_name_runs = Rc::new(Cell::new(0));
	let email_runs = Rc::new(Cell::new(0));

	let last_name = reaction!((store, last_name_runs) cx => {
		let _ = store.last_name(cx);
		last_name_runs.set(last_name_runs.get() + 1);
	});
	let email = reaction!((store, email_runs) cx => {
		let _ = store.email(cx);
		email_runs.set(email_runs.get() + 1);
	});
	last_name.update();
	email.update();

	for _ in 0..5 {
		store.change_name("Alfie");
		store.change_name("Ben");
	}

	assert_eq!(last_name_runs.get(), 1);
	assert_eq!(email_runs.get(), 1);
	assert_eq!(last_name.dependencies(), 1);
}

#[test]
fn untracked_snapshot_stays_stale() {
	let store = store();
	let snapshot = store.first_name_once().clone();

	store.change_name("Alfie");

	assert_eq!(snapshot, "Ben");
	assert_eq!(*store.first_name_once(), "Alfie");
}

#[test]
fn same_name_is_not_a_change() {
	let store = store();
	let runs = Rc::new(Cell::new(0));

	let reader = reaction!((store, runs) cx => {
		let _ = store.first_name(cx);
		runs.set(runs.get() + 1);
	});
	reader.update();

	store.change_name("Ben");
	assert_eq!(runs.get(), 1);
}

#[test]
fn computed_full_name_is_invalidated_on_write() {
	let store = store();
	let full_name = store.full_name_computed();

	assert_eq!(*full_name.get_once(), "Ben Parnell");
	assert!(full_name.is_valid());

	store.change_name("Alfie");
	assert!(!full_name.is_valid());
	assert_eq!(*full_name.get_once(), store.full_name_once());
}

// Shares its fxhash with "Ben".
const COLLIDES_WITH_BEN: &str = "hvbsoyqkX@tP\"gbE";

#[test]
fn hash_collision_still_notifies() {
	assert_eq!(
		fxhash::hash64(&String::from(COLLIDES_WITH_BEN)),
		fxhash::hash64(&String::from("Ben"))
	);

	let store = UserStore::create(UserRecord::new(
		COLLIDES_WITH_BEN,
		"Parnell",
		"ben.parnell@clock.co.uk",
	));
	let seen = Rc::new(RefCell::new(Vec::new()));

	let reader = reaction!((store, seen) cx => {
		seen.borrow_mut().push(store.first_name(cx).clone());
	});
	reader.update();

	store.change_name("Ben");

	assert_eq!(*seen.borrow(), vec![COLLIDES_WITH_BEN, "Ben"]);
	assert_eq!(store.full_name_once(), "Ben Parnell");
}

#[test]
fn hash_collision_recomputes_full_name() {
	let store = UserStore::create(UserRecord::new(
		COLLIDES_WITH_BEN,
		"Parnell",
		"ben.parnell@clock.co.uk",
	));
	let full_name = store.full_name_computed();
	let seen = Rc::new(RefCell::new(Vec::new()));

	let reader = reaction!((full_name, seen) cx => {
		seen.borrow_mut().push(full_name.get(cx).clone());
	});
	reader.update();

	store.change_name("Ben");

	assert_eq!(
		*seen.borrow(),
		vec![format!("{COLLIDES_WITH_BEN} Parnell"), String::from("Ben Parnell")]
	);
}
