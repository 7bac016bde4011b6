//! The particle pool and its frame-invariant state.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use super::config::{FieldConfig, TRAIL_CAPACITY};
use super::palette::{Color, FieldPalette};

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Horizontal speed vx relaxes back toward when unperturbed.
	pub base_speed: f64,
	pub radius: f64,
	/// Assigned at creation, immutable afterwards.
	pub color: Color,
	/// Offset desynchronizing this particle's pulse and bob.
	pub phase: f64,
	/// Most recent positions, oldest first. Never longer than
	/// [`TRAIL_CAPACITY`].
	pub trail: VecDeque<(f64, f64)>,
}

/// The particle pool plus the surface bounds and animation clock.
///
/// Created once when the animator starts and dropped at teardown; the pool
/// never grows or shrinks in between.
pub struct FieldState {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	/// Seconds of animation time, advanced by the stepper each tick.
	pub time: f64,
}

impl FieldState {
	pub fn new(config: &FieldConfig, width: f64, height: f64) -> Self {
		let colors = resolve_palette(config);
		let mut particles = Vec::with_capacity(config.count);

		for i in 0..config.count {
			// Deterministic pseudo-random based on index for a consistent look
			let seed = i as f64;
			let base_speed =
				config.speed_min + Self::pseudo_random(seed * 3.1) * (config.speed_max - config.speed_min);

			particles.push(Particle {
				x: Self::pseudo_random(seed * 1.7) * width,
				y: Self::pseudo_random(seed * 2.3) * height,
				vx: base_speed,
				vy: (Self::pseudo_random(seed * 4.7) - 0.5) * config.drift,
				base_speed,
				radius: config.radius_min
					+ Self::pseudo_random(seed * 5.3) * (config.radius_max - config.radius_min),
				color: colors[(Self::pseudo_random(seed * 6.1) * colors.len() as f64) as usize
					% colors.len()],
				phase: Self::pseudo_random(seed * 7.9) * TAU,
				trail: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
			});
		}

		Self {
			particles,
			width,
			height,
			time: 0.0,
		}
	}

	/// Simple pseudo-random function (deterministic)
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Update the surface bounds. Particles keep their coordinates; any now
	/// outside the new bounds re-enter through the wrap logic.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Parsed palette override from the config, or the brand palette when the
/// override is empty or entirely unparseable.
fn resolve_palette(config: &FieldConfig) -> Vec<Color> {
	let parsed: Vec<Color> = config
		.palette
		.iter()
		.filter_map(|entry| Color::parse(entry))
		.collect();
	if parsed.is_empty() {
		FieldPalette::brand().colors
	} else {
		parsed
	}
}
