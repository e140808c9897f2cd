//! Generation domain module - renders formula templates into artifacts
//!
//! Values flow in as [`FormulaValues`] or a raw [`ValueSet`], are substituted
//! into a [`crate::templates::Template`] by a [`TemplateRenderer`], and leave
//! as an [`Artifact`] that an [`OutputService`] can persist.

pub mod context;
pub mod orchestrator;
pub mod renderer;
pub mod traits;
pub mod types;

pub use context::*;
pub use orchestrator::*;
pub use renderer::*;
pub use traits::*;
pub use types::*;
