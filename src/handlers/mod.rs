//! HTTP handlers: generic list/detail over catalog resources, and endpoint discovery.

pub mod discovery;
pub mod resource;
pub use discovery::*;
pub use resource::*;
