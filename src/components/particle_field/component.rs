//! Leptos component wrapping the particle-field canvas.
//!
//! The component creates an HTML canvas element, builds the animator once
//! the 2D context is available, and wires up window listeners: `mousemove`
//! feeds the shared pointer cell, `resize` (fullscreen only) re-sizes the
//! surface. A [`FrameLoop`] drives one stepper+renderer pass per animation
//! frame for as long as the run is alive.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::animator::Animator;
use super::config::FieldConfig;
use crate::frame_loop::FrameLoop;

/// Nominal frame interval fed to the animation clock.
const FRAME_DT: f64 = 0.016;

/// Everything owned by one animation run.
///
/// Dropping it is teardown: the loop is cancelled first, so no tick can
/// observe a half-dismantled run, then the animator is shut down and the
/// window listeners are removed. The run lives in the mount effect's
/// value, so a config change replaces it and unmounting ends it.
struct ActiveRun {
	frame_loop: FrameLoop,
	animator: Rc<RefCell<Animator>>,
	pointer_cb: Closure<dyn FnMut(MouseEvent)>,
	resize_cb: Option<Closure<dyn FnMut()>>,
}

impl Drop for ActiveRun {
	fn drop(&mut self) {
		self.frame_loop.cancel();
		self.animator.borrow_mut().shutdown();
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(
				"mousemove",
				self.pointer_cb.as_ref().unchecked_ref(),
			);
			if let Some(ref cb) = self.resize_cb {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	}
}

/// Renders the pointer-reactive particle field on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and track window resizes.
/// Explicit `width`/`height` override automatic sizing. If no 2D context
/// can be obtained the component stays inert: a decorative layer is not
/// worth crashing the page over.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] config: Signal<FieldConfig>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |previous: Option<Option<ActiveRun>>| {
		// A re-run replaces the whole run; end the old one first.
		drop(previous);

		let Some(canvas) = canvas_ref.get() else {
			return None;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(object)) => match object.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("hero-field: unexpected 2d context type, field disabled");
					return None;
				}
			},
			_ => {
				warn!("hero-field: canvas has no 2d context, field disabled");
				return None;
			}
		};

		let animator = Rc::new(RefCell::new(Animator::new(&config.get(), w, h)));

		let pointer = animator.borrow().pointer();
		let canvas_pointer = canvas.clone();
		let pointer_cb: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			let rect = canvas_pointer.get_bounding_client_rect();
			pointer.set(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		});
		let _ = window
			.add_event_listener_with_callback("mousemove", pointer_cb.as_ref().unchecked_ref());

		let resize_cb = fullscreen.then(|| {
			let (animator_resize, canvas_resize) = (animator.clone(), canvas.clone());
			let cb: Closure<dyn FnMut()> = Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				animator_resize.borrow_mut().resize(nw, nh);
			});
			let _ =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			cb
		});

		let animator_anim = animator.clone();
		let mut surface = ctx;
		let frame_loop = FrameLoop::start(move || {
			animator_anim.borrow_mut().tick(FRAME_DT, &mut surface);
			true
		});

		Some(ActiveRun {
			frame_loop,
			animator,
			pointer_cb,
			resize_cb,
		})
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="display: block; position: absolute; inset: 0;"
		/>
	}
}
