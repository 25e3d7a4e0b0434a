mod collect;
mod partition;

pub use collect::{collect_error, collect_ok};
pub use partition::{partition, Partition};

/// Bulk operations on iterators over results.
///
/// # Examples
///
/// ```
/// use optres::ResultIterator;
///
/// let parts = ["4", "four", "2"]
///     .iter()
///     .map(|s| s.parse::<u8>())
///     .partition_results();
///
/// assert_eq!(parts.ok, vec![4, 2]);
/// assert_eq!(parts.error.len(), 1);
/// ```
pub trait ResultIterator<T, E>: Iterator<Item = Result<T, E>> + Sized {
    fn collect_ok(self) -> Vec<T> {
        collect_ok(self)
    }

    fn collect_error(self) -> Vec<E> {
        collect_error(self)
    }

    /// Named apart from [`Iterator::partition`], which takes a predicate.
    fn partition_results(self) -> Partition<T, E> {
        partition(self)
    }
}

impl<I, T, E> ResultIterator<T, E> for I where I: Iterator<Item = Result<T, E>> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_iterator() {
        let results = || vec![Ok::<_, &str>(1), Err("x"), Ok(2)].into_iter();

        assert_eq!(results().collect_ok(), vec![1, 2]);
        assert_eq!(results().collect_error(), vec!["x"]);
        assert_eq!(results().partition_results(), partition(results()));
    }
}
