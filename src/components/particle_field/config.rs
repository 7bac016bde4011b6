//! Field configuration and tuning constants.
//!
//! The constants below are tuned visual values, not derived physical ones.
//! Changing them changes the character of the animation, nothing else.

use serde::Deserialize;

/// Pointer influence reaches this far, in device pixels.
pub const POINTER_RADIUS: f64 = 200.0;
/// Scale applied to the pointer attraction force.
pub const POINTER_FORCE: f64 = 0.3;
/// Per-frame rate at which vx relaxes back toward the particle's base speed.
pub const RELAX_RATE: f64 = 0.02;
/// Per-frame multiplicative decay of vy.
pub const VERTICAL_FRICTION: f64 = 0.98;
/// Amplitude of the sinusoidal vertical bob.
pub const BOB_AMPLITUDE: f64 = 0.15;
/// Overscan past each surface edge before a particle wraps.
pub const WRAP_MARGIN: f64 = 10.0;
/// Maximum positions retained per trail.
pub const TRAIL_CAPACITY: usize = 8;
/// Alpha of the newest trail segment; older segments fade toward zero.
pub const TRAIL_MAX_ALPHA: f64 = 0.3;
/// Body pulse frequency multiplier on the animation clock.
pub const PULSE_SPEED: f64 = 2.0;
/// Body pulse amplitude as a fraction of the base radius.
pub const PULSE_DEPTH: f64 = 0.2;
/// Particles closer than this are joined by a connective line.
pub const LINK_RADIUS: f64 = 100.0;
/// Base alpha of a connective line at zero distance.
pub const LINK_ALPHA: f64 = 0.06;
/// Stroke width of connective lines.
pub const LINK_WIDTH: f64 = 0.5;

/// Frame-invariant field parameters, loadable from embedded JSON.
///
/// Every field has a default, so a partial (or absent) document works.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles in the pool. Fixed for the animator's lifetime.
	pub count: usize,
	/// Lower bound of the base drift speed (px per frame, rightward).
	pub speed_min: f64,
	/// Upper bound of the base drift speed.
	pub speed_max: f64,
	/// Span of the initial vertical velocity, centered on zero.
	pub drift: f64,
	/// Smallest body radius.
	pub radius_min: f64,
	/// Largest body radius.
	pub radius_max: f64,
	/// CSS color overrides for the palette. Empty means the brand palette.
	pub palette: Vec<String>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 120,
			speed_min: 0.3,
			speed_max: 1.5,
			drift: 0.4,
			radius_min: 1.5,
			radius_max: 4.5,
			palette: Vec::new(),
		}
	}
}
