//! Tool system
//!
//! Tools are callable capabilities with a declared input schema. Each tool
//! owns whatever state it needs (settings, a shared catalog) and reports
//! failures as error results rather than protocol errors.

mod registry;
mod traits;

pub mod builtin;

pub use registry::ToolRegistry;
pub use traits::{Tool, ToolResult};
