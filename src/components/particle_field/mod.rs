//! Particle-field hero animation.
//!
//! Renders a pool of drifting particles on an HTML canvas with:
//! - Rightward drift with pointer attraction and relaxation back to a
//!   per-particle base speed
//! - Fading motion trails and pulsing bodies
//! - Proximity lines joining nearby particles
//! - Wrap-around at the surface edges
//!
//! # Example
//!
//! ```ignore
//! use hero_field::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = FieldConfig { count: 80, ..FieldConfig::default() };
//!
//! view! { <ParticleFieldCanvas config=config fullscreen=true /> }
//! ```

mod animator;
mod component;
pub mod config;
mod field;
pub mod palette;
mod pointer;
mod render;
mod stepper;

pub use animator::Animator;
pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use field::{FieldState, Particle};
pub use pointer::PointerCell;
pub use render::{Surface, render};
pub use stepper::step;
