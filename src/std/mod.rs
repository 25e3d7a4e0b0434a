mod option;
mod result;

pub use option::OptionExt;
pub use result::ResultExt;
