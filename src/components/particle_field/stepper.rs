//! Per-frame physics update.

use super::config::{
	BOB_AMPLITUDE, POINTER_FORCE, POINTER_RADIUS, RELAX_RATE, TRAIL_CAPACITY, VERTICAL_FRICTION,
	WRAP_MARGIN,
};
use super::field::FieldState;

/// Advances every particle by one frame, in place.
///
/// `pointer` is the current pointer snapshot in surface coordinates; `dt`
/// is the frame interval in seconds and only advances the animation clock.
/// The force and relaxation constants are per-frame values.
pub fn step(field: &mut FieldState, pointer: (f64, f64), dt: f64) {
	field.time += dt;
	let (px, py) = pointer;
	let (width, height, time) = (field.width, field.height, field.time);

	for p in &mut field.particles {
		// Pointer attraction, fading linearly to zero at POINTER_RADIUS.
		// A coincident pointer (dist == 0) exerts no force.
		let (dx, dy) = (px - p.x, py - p.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist > 0.0 && dist < POINTER_RADIUS {
			let force = (POINTER_RADIUS - dist) / POINTER_RADIUS;
			p.vx += dx / dist * force * POINTER_FORCE;
			p.vy += dy / dist * force * POINTER_FORCE;
		}

		// Relax back toward cruise speed
		p.vx += (p.base_speed - p.vx) * RELAX_RATE;
		p.vy *= VERTICAL_FRICTION;

		// Integrate, with a desynchronized vertical bob
		p.x += p.vx;
		p.y += p.vy + (time + p.phase).sin() * BOB_AMPLITUDE;

		p.trail.push_back((p.x, p.y));
		if p.trail.len() > TRAIL_CAPACITY {
			p.trail.pop_front();
		}

		// Wrap at the overscan margin. A horizontal wrap clears the trail
		// so no streak is drawn across the full surface width.
		if p.x > width + WRAP_MARGIN {
			p.x = -WRAP_MARGIN;
			p.trail.clear();
		}
		if p.y < -WRAP_MARGIN {
			p.y = height + WRAP_MARGIN;
		} else if p.y > height + WRAP_MARGIN {
			p.y = -WRAP_MARGIN;
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;

	use super::super::config::FieldConfig;
	use super::super::field::Particle;
	use super::super::palette::Color;
	use super::*;

	const DT: f64 = 0.016;

	/// A pointer far enough away to exert no force anywhere on the surface.
	const FAR_POINTER: (f64, f64) = (1.0e6, 1.0e6);

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.8,
			vy: 0.0,
			base_speed: 0.8,
			radius: 2.0,
			color: Color::rgb(196, 32, 32),
			phase: 0.0,
			trail: VecDeque::new(),
		}
	}

	fn field_with(particles: Vec<Particle>) -> FieldState {
		let mut field = FieldState::new(
			&FieldConfig {
				count: 0,
				..FieldConfig::default()
			},
			1000.0,
			600.0,
		);
		field.particles = particles;
		field
	}

	#[test]
	fn advances_by_base_speed_without_pointer_influence() {
		let mut p = particle_at(-20.0, 50.0);
		p.phase = 0.0;
		let mut field = field_with(vec![p]);
		step(&mut field, FAR_POINTER, 0.0);
		// vx == base_speed, so relaxation is a no-op and x moves exactly
		// one base_speed. time stays 0 and phase is 0, so the bob is 0 too.
		let p = &field.particles[0];
		assert!((p.x - -19.2).abs() < 1.0e-9);
		assert_eq!(p.y, 50.0);
	}

	#[test]
	fn horizontal_wrap_resets_x_and_empties_trail() {
		let mut p = particle_at(1005.0, 50.0);
		p.vx = 6.0;
		p.base_speed = 6.0;
		p.trail = VecDeque::from(vec![(1000.0, 50.0), (1002.0, 50.0)]);
		let mut field = field_with(vec![p]);
		step(&mut field, FAR_POINTER, DT);
		let p = &field.particles[0];
		assert_eq!(p.x, -10.0);
		assert!(p.trail.is_empty());
	}

	#[test]
	fn vertical_wrap_keeps_trail() {
		let mut p = particle_at(500.0, 615.0);
		p.vy = 5.0;
		p.trail = VecDeque::from(vec![(500.0, 605.0)]);
		let mut field = field_with(vec![p]);
		step(&mut field, FAR_POINTER, DT);
		let p = &field.particles[0];
		assert_eq!(p.y, -10.0);
		assert!(!p.trail.is_empty());
	}

	#[test]
	fn vertical_wrap_top_to_bottom() {
		let mut p = particle_at(500.0, -15.0);
		p.vy = -5.0;
		let mut field = field_with(vec![p]);
		step(&mut field, FAR_POINTER, DT);
		assert_eq!(field.particles[0].y, 610.0);
	}

	#[test]
	fn trail_never_exceeds_capacity() {
		let field_particles = vec![particle_at(100.0, 300.0)];
		let mut field = field_with(field_particles);
		for tick in 0..40 {
			step(&mut field, FAR_POINTER, DT);
			let len = field.particles[0].trail.len();
			assert!(len <= TRAIL_CAPACITY);
			if tick >= TRAIL_CAPACITY {
				assert_eq!(len, TRAIL_CAPACITY);
			}
		}
	}

	#[test]
	fn coincident_pointer_exerts_no_force() {
		let mut field = field_with(vec![particle_at(400.0, 300.0)]);
		step(&mut field, (400.0, 300.0), DT);
		let p = &field.particles[0];
		assert!(p.vx.is_finite() && p.vy.is_finite());
		assert_eq!(p.vx, 0.8);
	}

	#[test]
	fn distant_pointer_leaves_only_relaxation_and_friction() {
		let mut p = particle_at(400.0, 300.0);
		p.vx = 2.0;
		p.vy = 1.0;
		let mut field = field_with(vec![p]);
		// 201 px away, just past the influence radius
		step(&mut field, (400.0, 501.0), DT);
		let p = &field.particles[0];
		assert!((p.vx - (2.0 + (0.8 - 2.0) * RELAX_RATE)).abs() < 1.0e-12);
		assert!((p.vy - 1.0 * VERTICAL_FRICTION).abs() < 1.0e-12);
	}

	#[test]
	fn nearby_pointer_pulls_toward_it() {
		let mut field = field_with(vec![particle_at(400.0, 300.0)]);
		// 100 px to the right of the particle
		step(&mut field, (500.0, 300.0), DT);
		assert!(field.particles[0].vx > 0.8);
	}

	#[test]
	fn vx_monotonically_approaches_base_speed() {
		for start in [-3.0, 0.0, 0.5, 4.0] {
			let mut p = particle_at(100.0, 300.0);
			p.vx = start;
			let mut field = field_with(vec![p]);
			let mut gap = (start - 0.8_f64).abs();
			for _ in 0..50 {
				step(&mut field, FAR_POINTER, DT);
				let next_gap = (field.particles[0].vx - 0.8).abs();
				if gap != 0.0 {
					assert!(next_gap < gap);
				}
				gap = next_gap;
			}
		}
	}

	#[test]
	fn positions_stay_within_overscan_bounds() {
		let mut field = FieldState::new(&FieldConfig::default(), 300.0, 200.0);
		for _ in 0..2000 {
			step(&mut field, (150.0, 100.0), DT);
			for p in &field.particles {
				assert!(p.x <= 300.0 + WRAP_MARGIN + 1.0e-9);
				assert!(p.y >= -(WRAP_MARGIN + 1.0e-9) && p.y <= 200.0 + WRAP_MARGIN + 1.0e-9);
			}
		}
	}
}
