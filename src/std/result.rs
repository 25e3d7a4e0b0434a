use std::fmt::Display;

use crate::core::Container;
use crate::trap::raise;

impl<T, E> Container for Result<T, E> {
    type Value = T;
    type Residual = E;
    type Rebind<U> = Result<U, E>;

    #[inline]
    fn from_value(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn from_residual(error: E) -> Self {
        Err(error)
    }

    #[inline]
    fn into_result(self) -> Result<T, E> {
        self
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    fn map_value<U, O>(self, operation: O) -> Result<U, E>
    where
        O: FnOnce(T) -> U,
    {
        self.map(operation)
    }

    fn foreach_value<O>(self, operation: O) -> Self
    where
        O: FnOnce(&T),
    {
        self.foreach(operation)
    }
}

/// Combinators for [`Result`] on top of the inherent ones.
pub trait ResultExt<T, E>: Sized {
    fn is_error(&self) -> bool;

    /// Returns the success value, or raises the error itself through
    /// [`raise`](crate::raise).
    fn unwrap_or_raise(self) -> T
    where
        E: Display + Send + 'static;

    /// Recovers from `Err(e)` with the result of `operation(e)`.
    fn fallback<F, O>(self, operation: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>;

    /// Replaces an `Err` with `alternative`.
    fn fallback_to<F>(self, alternative: Result<T, F>) -> Result<T, F>;

    /// Replaces an `Err` with `Ok(value)`.
    fn fallback_ok<F>(self, value: T) -> Result<T, F>;

    fn flat_map<U, O>(self, operation: O) -> Result<U, E>
    where
        O: FnOnce(T) -> Result<U, E>;

    fn foreach<O>(self, operation: O) -> Self
    where
        O: FnOnce(&T);

    /// Keeps the success value and drops the error.
    fn unwrap_option(self) -> Option<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn is_error(&self) -> bool {
        self.is_err()
    }

    fn unwrap_or_raise(self) -> T
    where
        E: Display + Send + 'static,
    {
        match self {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }

    fn fallback<F, O>(self, operation: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        self.or_else(operation)
    }

    fn fallback_to<F>(self, alternative: Result<T, F>) -> Result<T, F> {
        self.or(alternative)
    }

    fn fallback_ok<F>(self, value: T) -> Result<T, F> {
        Ok(self.unwrap_or(value))
    }

    fn flat_map<U, O>(self, operation: O) -> Result<U, E>
    where
        O: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(operation)
    }

    fn foreach<O>(self, operation: O) -> Self
    where
        O: FnOnce(&T),
    {
        if let Ok(value) = &self {
            operation(value);
        }

        self
    }

    fn unwrap_option(self) -> Option<T> {
        self.ok()
    }
}
