pub mod error;
pub mod ticker;

pub mod deserialization;
pub mod instruments;
