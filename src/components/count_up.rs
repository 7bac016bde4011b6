//! Eased count-up animation for headline statistics.

use leptos::prelude::*;

use crate::frame_loop::FrameLoop;

/// Default count-up duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Interpolates from zero to a target with an ease-out cubic curve.
///
/// Intermediate values are floor-truncated so the display never shows the
/// target before the animation completes; at or past the duration the exact
/// target is returned.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
	target: u64,
	duration_ms: f64,
}

impl CountUp {
	pub fn new(target: u64, duration_ms: f64) -> Self {
		Self {
			target,
			duration_ms,
		}
	}

	/// Value shown `elapsed_ms` into the animation.
	pub fn value_at(&self, elapsed_ms: f64) -> u64 {
		let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
		if progress >= 1.0 {
			return self.target;
		}
		let eased = 1.0 - (1.0 - progress).powi(3);
		(eased * self.target as f64).floor() as u64
	}

	pub fn finished(&self, elapsed_ms: f64) -> bool {
		elapsed_ms >= self.duration_ms
	}
}

/// A single animated statistic: the number counts up on mount, the label
/// sits underneath.
#[component]
pub fn CountUpStat(
	/// Final value the counter settles on.
	value: u64,
	/// Appended after the number (e.g. "+").
	#[prop(into, default = String::new())]
	suffix: String,
	/// Caption under the number.
	#[prop(into)]
	label: String,
) -> impl IntoView {
	let shown = RwSignal::new(0u64);

	// The loop lives in the effect's value; dropping it (re-run or
	// unmount) cancels any frames still pending.
	Effect::new(move |previous: Option<FrameLoop>| {
		drop(previous);
		let counter = CountUp::new(value, DEFAULT_DURATION_MS);
		let start = js_sys::Date::now();
		FrameLoop::start(move || {
			let elapsed = js_sys::Date::now() - start;
			shown.set(counter.value_at(elapsed));
			!counter.finished(elapsed)
		})
	});

	view! {
		<div class="hero-stat">
			<span class="hero-stat__number">
				{move || format!("{}{}", shown.get(), suffix)}
			</span>
			<span class="hero-stat__label">{label}</span>
		</div>
	}
}
