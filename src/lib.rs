//! hero-field: pointer-reactive particle hero layer for the marketing site.
//!
//! This crate provides a WASM-based hero experience that renders a field of
//! drifting, pointer-attracted particles on a fullscreen canvas, with eased
//! count-up statistics in the overlay.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod frame_loop;

pub use components::count_up::{CountUp, CountUpStat};
pub use components::particle_field::{FieldConfig, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-field: logging initialized");
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: JSON matching [`FieldConfig`]; every field is optional.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("hero-field: loaded config, {} particles", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("hero-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads field configuration from the DOM and renders the hero layer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="IIMI — We Transform Data Into Intelligence" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero">
			<ParticleFieldCanvas config=config_signal fullscreen=true />
			<div class="hero__overlay">
				<h1>"We Transform Data Into Intelligence"</h1>
				<p class="hero__description">
					"From handwritten records to AI training data, we manage \
					 virtually any labor-intensive data process. 24/7/365."
				</p>
				<div class="hero__stats">
					<CountUpStat value=4200 suffix="+" label="Employees Worldwide" />
					<CountUpStat value=20 label="Languages Supported" />
					<CountUpStat value=29 label="Years of Excellence" />
				</div>
			</div>
		</section>
	}
}
