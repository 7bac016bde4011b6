//! Canvas rendering for the particle field.
//!
//! Each frame fully clears the surface, then draws every particle's fading
//! trail, pulsing body, and connective lines to its neighbors.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::{
	LINK_ALPHA, LINK_RADIUS, LINK_WIDTH, PULSE_DEPTH, PULSE_SPEED, TRAIL_MAX_ALPHA,
};
use super::field::{FieldState, Particle};
use super::palette::Color;

/// Connective lines are drawn in brand red regardless of particle color.
const LINK_COLOR: Color = Color::rgb(196, 32, 32);

/// The raster output boundary.
///
/// The animator draws through this trait so the simulation stays
/// independent of the canvas bindings; tests substitute a recording
/// implementation.
pub trait Surface {
	/// Clear the full surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Draw a filled circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Draw a straight stroked line.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Renders the complete field to the surface.
pub fn render(field: &FieldState, surface: &mut impl Surface) {
	surface.clear(field.width, field.height);

	for p in &field.particles {
		draw_trail(p, surface);
		draw_body(p, field.time, surface);
		draw_links(p, &field.particles, surface);
	}
}

/// Trail segments fade in from the oldest (near zero) to the newest.
fn draw_trail(p: &Particle, surface: &mut impl Surface) {
	if p.trail.len() < 2 {
		return;
	}
	let len = p.trail.len();
	for t in 0..len - 1 {
		let alpha = (t as f64 / len as f64) * TRAIL_MAX_ALPHA;
		surface.stroke_line(
			p.trail[t],
			p.trail[t + 1],
			p.radius * 0.5,
			p.color.with_alpha(alpha),
		);
	}
}

fn draw_body(p: &Particle, time: f64, surface: &mut impl Surface) {
	let pulse = 1.0 + (time * PULSE_SPEED + p.phase).sin() * PULSE_DEPTH;
	surface.fill_circle(p.x, p.y, p.radius * pulse, p.color);
}

/// Connective lines to every other particle within LINK_RADIUS, fading with
/// distance. All pairs are scanned each frame; O(n²) is fine at the default
/// count — raising it substantially calls for a spatial grid instead.
fn draw_links(p: &Particle, all: &[Particle], surface: &mut impl Surface) {
	for other in all {
		if std::ptr::eq(p, other) {
			continue;
		}
		let (dx, dy) = (other.x - p.x, other.y - p.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < LINK_RADIUS {
			let alpha = LINK_ALPHA * (1.0 - dist / LINK_RADIUS);
			surface.stroke_line(
				(p.x, p.y),
				(other.x, other.y),
				LINK_WIDTH,
				LINK_COLOR.with_alpha(alpha),
			);
		}
	}
}

/// Records drawing operations instead of rasterizing them.
#[cfg(test)]
pub(crate) struct RecordingSurface {
	pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawOp {
	Clear { width: f64, height: f64 },
	Circle { x: f64, y: f64, radius: f64, color: Color },
	Line { from: (f64, f64), to: (f64, f64), width: f64, color: Color },
}

#[cfg(test)]
impl RecordingSurface {
	pub fn new() -> Self {
		Self { ops: Vec::new() }
	}

	pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
		self.ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Line { .. }))
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(DrawOp::Clear { width, height });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ops.push(DrawOp::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ops.push(DrawOp::Line {
			from,
			to,
			width,
			color,
		});
	}
}
