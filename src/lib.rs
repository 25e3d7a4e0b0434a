mod core;
mod iter;
mod misc;
mod retry;
mod std;
mod trap;

pub use self::core::{flat_map, foreach, map, pipe, Container, Pipe};
pub use self::iter::{collect_error, collect_ok, partition, Partition, ResultIterator};
pub use self::misc::{to_option, EmptyContainerError, Nullable};
pub use self::retry::{
    retry, retry_with, NoSleeper, Retry, RetryConfig, Sleeper, ThreadSleeper, DEFAULT_RETRIES,
};
pub use self::std::{OptionExt, ResultExt};
pub use self::trap::{
    raise, try_result, try_result_flat, Fault, Full, Kind, Message, TrapMode, UNKNOWN_KIND,
};
