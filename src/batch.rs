use std::cell::{Cell, RefCell};
use std::rc::Weak;

use crate::reaction::Reactive;

/// Flush rounds after which a batch gives up on reactions that keep
/// invalidating each other.
const MAX_ROUNDS: usize = 100;

thread_local! {
	static STARTED: Cell<bool> = Cell::new(false);
	static PENDING: RefCell<Vec<Weak<dyn Reactive>>> = RefCell::new(Vec::new());
}

pub fn in_batch() -> bool {
	STARTED.with(|s| s.get())
}

/// Runs `func` as one transaction. Reactions invalidated inside it run
/// once the outermost batch finishes, before `batch` returns.
pub fn batch<R>(func: impl FnOnce() -> R) -> R {
	if in_batch() {
		return func();
	}

	let _guard = BatchGuard::start();
	let result = func();
	flush();
	result
}

/// Queue a reaction to be updated when the current batch flushes.
pub(crate) fn schedule(reactive: Weak<dyn Reactive>) {
	PENDING.with(|p| p.borrow_mut().push(reactive));
}

struct BatchGuard;

impl BatchGuard {
	fn start() -> Self {
		STARTED.with(|s| s.set(true));
		BatchGuard
	}
}

impl Drop for BatchGuard {
	fn drop(&mut self) {
		STARTED.with(|s| s.set(false));
	}
}

// Reactions may write during the flush; those writes land in the same queue.
fn flush() {
	let mut round = 0usize;
	loop {
		let pending = PENDING.with(|p| std::mem::take(&mut *p.borrow_mut()));
		if pending.is_empty() {
			break;
		}

		round += 1;
		if round > MAX_ROUNDS {
			tracing::error!(reactions = pending.len(), "batch did not settle, dropping pending reactions");
			break;
		}
		tracing::trace!(round, reactions = pending.len(), "flushing batch");

		for reaction in pending {
			if let Some(reactive) = reaction.upgrade() {
				reactive.update();
			}
		}
	}
}
