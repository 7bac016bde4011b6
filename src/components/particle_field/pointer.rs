//! Shared pointer position cell.

use std::cell::Cell;
use std::rc::Rc;

/// Last-writer-wins cell holding the most recent pointer position.
///
/// The input side overwrites it on every pointer event; the stepper reads
/// whatever is current at tick time. Missed intermediate positions are
/// dropped, not queued. Cloned handles share the same cell.
#[derive(Clone, Debug, Default)]
pub struct PointerCell(Rc<Cell<(f64, f64)>>);

impl PointerCell {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&self, x: f64, y: f64) {
		self.0.set((x, y));
	}

	pub fn get(&self) -> (f64, f64) {
		self.0.get()
	}
}
