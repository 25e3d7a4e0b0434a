use crate::core::Container;
use crate::misc::EmptyContainerError;
use crate::trap::raise;

impl<A> Container for Option<A> {
    type Value = A;
    type Residual = ();
    type Rebind<U> = Option<U>;

    #[inline]
    fn from_value(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn from_residual(_: ()) -> Self {
        None
    }

    #[inline]
    fn into_result(self) -> Result<A, ()> {
        self.ok_or(())
    }

    #[inline]
    fn value(&self) -> Option<&A> {
        self.as_ref()
    }

    fn map_value<U, O>(self, operation: O) -> Option<U>
    where
        O: FnOnce(A) -> U,
    {
        self.map(operation)
    }

    fn foreach_value<O>(self, operation: O) -> Self
    where
        O: FnOnce(&A),
    {
        self.foreach(operation)
    }
}

/// Combinators for [`Option`] on top of the inherent ones.
pub trait OptionExt<A>: Sized {
    /// Returns the value, or raises [`EmptyContainerError`] for `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optres::{try_result, Message, OptionExt};
    ///
    /// assert_eq!(Some(5).get(), 5);
    /// assert_eq!(
    ///     try_result(Message, || None::<i32>.get()),
    ///     Err("Can't get value of None".to_owned())
    /// );
    /// ```
    fn get(self) -> A;

    fn get_or(self, value: A) -> A;

    fn get_or_else<O>(self, producer: O) -> A
    where
        O: FnOnce() -> A;

    /// Returns `self` if it is `Some`, otherwise `Some(value)`.
    fn or_some(self, value: A) -> Option<A>;

    /// Applies `operation` to the value and returns its `Option` as it is.
    fn flat_map<B, O>(self, operation: O) -> Option<B>
    where
        O: FnOnce(A) -> Option<B>;

    /// Calls `operation` with the value, if any, and returns `self`.
    fn foreach<O>(self, operation: O) -> Self
    where
        O: FnOnce(&A);
}

impl<A> OptionExt<A> for Option<A> {
    fn get(self) -> A {
        match self {
            Some(value) => value,
            None => raise(EmptyContainerError),
        }
    }

    fn get_or(self, value: A) -> A {
        self.unwrap_or(value)
    }

    fn get_or_else<O>(self, producer: O) -> A
    where
        O: FnOnce() -> A,
    {
        self.unwrap_or_else(producer)
    }

    fn or_some(self, value: A) -> Option<A> {
        self.or(Some(value))
    }

    fn flat_map<B, O>(self, operation: O) -> Option<B>
    where
        O: FnOnce(A) -> Option<B>,
    {
        self.and_then(operation)
    }

    fn foreach<O>(self, operation: O) -> Self
    where
        O: FnOnce(&A),
    {
        if let Some(value) = &self {
            operation(value);
        }

        self
    }
}
