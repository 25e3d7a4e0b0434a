use std::ops::{BitOr, Shr};

use super::Container;

/* Pipe */

/// Operator sugar over a [`Container`].
///
/// `pipe | operation` is [`map`](crate::map) and `pipe >> operation` is
/// [`flat_map`](crate::flat_map). `>>` binds tighter than `|`, so a map step
/// that follows a flat_map step chains without parentheses, while a flat_map
/// step after a map step needs them.
///
/// # Examples
///
/// ```
/// use optres::pipe;
///
/// let x = (pipe(Some(3)) | (|x: i32| x + 1)) >> (|x: i32| x.checked_mul(2));
/// assert_eq!(x.into_inner(), Some(8));
///
/// let y = pipe(Ok::<i32, &str>(3)) >> (|_: i32| Err::<i32, &str>("stop")) | (|x: i32| x + 1);
/// assert_eq!(y.into_inner(), Err("stop"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pipe<C>(C);

pub fn pipe<C>(container: C) -> Pipe<C>
where
    C: Container,
{
    Pipe(container)
}

impl<C> Pipe<C> {
    pub fn into_inner(self) -> C {
        self.0
    }

    pub fn as_inner(&self) -> &C {
        &self.0
    }
}

impl<C> From<C> for Pipe<C>
where
    C: Container,
{
    fn from(container: C) -> Self {
        Self(container)
    }
}

impl<C, O, U> BitOr<O> for Pipe<C>
where
    C: Container,
    O: FnOnce(C::Value) -> U,
{
    type Output = Pipe<C::Rebind<U>>;

    fn bitor(self, operation: O) -> Self::Output {
        Pipe(self.0.map_value(operation))
    }
}

impl<C, O, D> Shr<O> for Pipe<C>
where
    C: Container,
    O: FnOnce(C::Value) -> D,
    D: Container<Residual = C::Residual>,
{
    type Output = Pipe<D>;

    fn shr(self, operation: O) -> Self::Output {
        Pipe(self.0.flat_map_value(operation))
    }
}
