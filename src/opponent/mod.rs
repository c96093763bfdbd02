//! Computer opponent pick policies.

pub mod policy;

pub use policy::{LowestFirst, PickPolicy, UniformPicks};
