mod container;
mod dispatch;
mod pipe;

pub use container::Container;
pub use dispatch::{flat_map, foreach, map};
pub use pipe::{pipe, Pipe};
