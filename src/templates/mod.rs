//! Formula templates: the template type and the built-in Homebrew variants

pub mod channel;
pub mod template;

pub use channel::ReleaseChannel;
pub use template::{Segment, Template};
