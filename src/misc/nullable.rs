use std::ptr::NonNull;

/// A type with a designated "absent" value.
///
/// Null raw pointers are absent, every other pointer is present as a
/// [`NonNull`]. An `Option` is already explicit about absence and converts to
/// itself.
pub trait Nullable {
    type Value;

    fn into_option(self) -> Option<Self::Value>;
}

impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;

    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self as *mut T)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;

    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_option(self) -> Option<T> {
        self
    }
}

/// Maps the absent value of `value` to `None` and anything else to `Some`.
///
/// # Examples
///
/// ```
/// use optres::to_option;
///
/// let x = 7;
/// assert!(to_option(&x as *const i32).is_some());
/// assert!(to_option(std::ptr::null::<i32>()).is_none());
/// assert_eq!(to_option(Some("kept")), Some("kept"));
/// ```
pub fn to_option<N>(value: N) -> Option<N::Value>
where
    N: Nullable,
{
    value.into_option()
}
