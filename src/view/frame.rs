use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
	#[default]
	Unmounted,
	Mounted,
	Displaying,
}

/// The output slot of one view: its last rendered lines and how many
/// times it has rendered. Shared between a view and its render closure.
#[derive(Clone, Default)]
pub struct Frame {
	inner: Rc<RefCell<FrameInner>>,
}

#[derive(Default)]
struct FrameInner {
	lines: Vec<String>,
	renders: usize,
	phase: Phase,
}

impl Frame {
	pub fn mounted(&self) {
		self.inner.borrow_mut().phase = Phase::Mounted;
	}

	pub fn present(&self, lines: Vec<String>) {
		let mut inner = self.inner.borrow_mut();
		inner.lines = lines;
		inner.renders += 1;
		inner.phase = Phase::Displaying;
	}

	pub fn lines(&self) -> Vec<String> {
		self.inner.borrow().lines.clone()
	}

	pub fn renders(&self) -> usize {
		self.inner.borrow().renders
	}

	pub fn phase(&self) -> Phase {
		self.inner.borrow().phase
	}
}
