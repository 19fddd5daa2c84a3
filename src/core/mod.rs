//! Core data types and hit projection.

pub mod projection;
pub mod records;

pub use projection::project;
pub use records::{Activity, TriggerPrimitive};
