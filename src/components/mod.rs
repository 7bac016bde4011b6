//! UI components for the hero experience.

pub mod count_up;
pub mod particle_field;
