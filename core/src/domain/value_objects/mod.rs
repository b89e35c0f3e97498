//! Value objects.

pub mod resource_id;

pub use resource_id::ResourceId;
