use std::thread;
use std::time::Duration;

/// Waits between two attempts of a [`Retry`](crate::Retry).
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

/// Does not wait at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl Sleeper for NoSleeper {
    fn sleep(&self, _: Duration) {}
}

impl<S> Sleeper for &S
where
    S: Sleeper + ?Sized,
{
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}
