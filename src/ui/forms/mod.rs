//! Form rendering module
//!
//! - `field_renderer`: single input with inline error
//! - `registration_form`: the registration view

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
