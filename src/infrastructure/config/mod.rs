//! Configuration registry implementation

mod registry;

pub use registry::ConfigRegistry;
