//! Animator lifecycle: field ownership and the tick gate.

use super::config::FieldConfig;
use super::field::FieldState;
use super::pointer::PointerCell;
use super::render::{self, Surface};
use super::stepper;

/// Owns the field state and pointer cell for one animation run.
///
/// Constructed when the drawing surface becomes available (Running) and
/// shut down exactly once at teardown (Torn Down). Shutdown is terminal:
/// every later `tick` is a no-op that leaves the surface untouched, so a
/// tick racing teardown cannot draw. A new run gets a fresh `Animator`
/// and therefore a fresh pool.
pub struct Animator {
	field: FieldState,
	pointer: PointerCell,
	torn_down: bool,
}

impl Animator {
	pub fn new(config: &FieldConfig, width: f64, height: f64) -> Self {
		Self {
			field: FieldState::new(config, width, height),
			pointer: PointerCell::new(),
			torn_down: false,
		}
	}

	/// Handle to the shared pointer cell, for wiring up input events.
	pub fn pointer(&self) -> PointerCell {
		self.pointer.clone()
	}

	/// One frame: step the physics against the current pointer snapshot,
	/// then repaint.
	pub fn tick(&mut self, dt: f64, surface: &mut impl Surface) {
		if self.torn_down {
			return;
		}
		stepper::step(&mut self.field, self.pointer.get(), dt);
		render::render(&self.field, surface);
	}

	/// Resize the surface bounds. Particles are not repositioned.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.field.resize(width, height);
	}

	pub fn shutdown(&mut self) {
		self.torn_down = true;
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::RecordingSurface;
	use super::*;

	const DT: f64 = 0.016;

	#[test]
	fn tick_steps_and_repaints() {
		let mut animator = Animator::new(&FieldConfig::default(), 800.0, 400.0);
		let mut surface = RecordingSurface::new();
		animator.tick(DT, &mut surface);
		assert!(!surface.ops.is_empty());
	}

	#[test]
	fn ticks_after_shutdown_leave_the_surface_untouched() {
		let mut animator = Animator::new(&FieldConfig::default(), 800.0, 400.0);
		let mut surface = RecordingSurface::new();
		animator.tick(DT, &mut surface);
		animator.shutdown();

		let mut after = RecordingSurface::new();
		animator.tick(DT, &mut after);
		animator.tick(DT, &mut after);
		assert!(after.ops.is_empty());
	}

	#[test]
	fn pointer_handle_feeds_the_stepper() {
		let config = FieldConfig {
			count: 1,
			..FieldConfig::default()
		};
		let mut animator = Animator::new(&config, 800.0, 400.0);
		let (px, py) = (animator.field.particles[0].x, animator.field.particles[0].y);

		// Park the pointer right next to the only particle
		animator.pointer().set(px + 50.0, py);
		let vx_before = animator.field.particles[0].vx;
		let mut surface = RecordingSurface::new();
		animator.tick(DT, &mut surface);
		assert!(animator.field.particles[0].vx > vx_before);
	}

	#[test]
	fn resize_updates_bounds_only() {
		let mut animator = Animator::new(&FieldConfig::default(), 800.0, 400.0);
		let positions: Vec<(f64, f64)> =
			animator.field.particles.iter().map(|p| (p.x, p.y)).collect();
		animator.resize(1200.0, 700.0);
		assert_eq!(animator.field.width, 1200.0);
		for (p, before) in animator.field.particles.iter().zip(positions) {
			assert_eq!((p.x, p.y), before);
		}
	}
}
