//! point_worldtext form model.
//!
//! Everything the dialog needs that does not touch a widget: filename
//! sanitization, size presets, form validation, and the completion request
//! handed to the generator.

pub mod filename;
pub mod form;
pub mod request;

pub use filename::{sanitize_filename, DEFAULT_FILENAME};
pub use form::{FormError, OutputMode, WorldTextForm};
pub use request::{GenerateRequest, OutputTarget, TextureSize, MATERIALS_SUBDIR};
