mod error;
mod nullable;

pub use error::EmptyContainerError;
pub use nullable::{to_option, Nullable};
