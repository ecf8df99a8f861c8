//! Module lifecycle, registry, and layered settings shared by every Bookhaven crate.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
