//! Cancellable `requestAnimationFrame` loop.
//!
//! A self-rescheduling frame callback wrapped in an explicit handle, so
//! teardown is a single `cancel` call with a hard guarantee: once cancelled,
//! no further tick runs and no successor frame is scheduled, even if
//! cancellation lands while a tick is executing. Dropping the handle
//! cancels, so a loop stored in an effect's value ends with the effect.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Handle to a running per-frame callback chain.
///
/// The tick callback returns `true` to keep running; returning `false`
/// ends the loop from the inside (used by finite animations).
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	frame_id: Rc<Cell<Option<i32>>>,
	slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
	/// Schedules `tick` to run once per animation frame, starting with the
	/// next one.
	pub fn start(mut tick: impl FnMut() -> bool + 'static) -> Self {
		let running = Rc::new(Cell::new(true));
		let frame_id = Rc::new(Cell::new(None));
		let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

		let (running_cb, frame_id_cb, slot_cb) = (running.clone(), frame_id.clone(), slot.clone());
		*slot.borrow_mut() = Some(Closure::new(move || {
			if !running_cb.get() {
				return;
			}
			let keep_going = tick();
			// Re-check: the tick itself may have triggered cancellation.
			if keep_going && running_cb.get() {
				if let Some(ref cb) = *slot_cb.borrow() {
					frame_id_cb.set(request_frame(cb));
				}
			}
		}));

		if let Some(ref cb) = *slot.borrow() {
			frame_id.set(request_frame(cb));
		}

		Self {
			running,
			frame_id,
			slot,
		}
	}

	/// Stops the loop: no tick runs after this returns.
	pub fn cancel(&self) {
		self.running.set(false);
		if let Some(id) = self.frame_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		// Release the closure's self-referential cycle.
		self.slot.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	let window: Window = web_sys::window()?;
	window
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}
