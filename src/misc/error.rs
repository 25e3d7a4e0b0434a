use thiserror::Error;

/// Raised by [`OptionExt::get`](crate::OptionExt::get) on `None`.
#[derive(Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
#[error("Can't get value of None")]
pub struct EmptyContainerError;
