#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success and error values of a sequence of results, split in one pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Partition<T, E> {
    pub ok: Vec<T>,
    pub error: Vec<E>,
}

impl<T, E> Partition<T, E> {
    pub fn new() -> Self {
        Self {
            ok: Vec::new(),
            error: Vec::new(),
        }
    }

    pub fn push(&mut self, result: Result<T, E>) {
        match result {
            Ok(value) => self.ok.push(value),
            Err(error) => self.error.push(error),
        }
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<E>) {
        (self.ok, self.error)
    }
}

impl<T, E> Default for Partition<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Extend<Result<T, E>> for Partition<T, E> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        for result in iter {
            self.push(result);
        }
    }
}

impl<T, E> FromIterator<Result<T, E>> for Partition<T, E> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut partition = Self::new();
        partition.extend(iter);

        partition
    }
}

/// Splits `results` into their success and error values.
///
/// Both lists keep the original relative order, so this equals calling
/// [`collect_ok`](crate::collect_ok) and
/// [`collect_error`](crate::collect_error) on the same input.
///
/// # Examples
///
/// ```
/// use optres::partition;
///
/// let parts = partition(vec![Ok(1), Ok(2), Err("e")]);
///
/// assert_eq!(parts.ok, vec![1, 2]);
/// assert_eq!(parts.error, vec!["e"]);
/// ```
pub fn partition<I, T, E>(results: I) -> Partition<T, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().collect()
}
