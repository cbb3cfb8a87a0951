//! Request validation and prompt building.
//!
//! Pure types and functions with no I/O: the closed style and language sets,
//! title validation, template tier selection and prompt rendering.

pub mod error;
pub mod language;
pub mod prompt;
pub mod review;
pub mod style;

pub use error::DomainError;
pub use language::Language;
pub use prompt::{render_prompt, TemplateTier};
pub use review::{BookTitle, ReviewRequest, ReviewResponse};
pub use style::Style;
