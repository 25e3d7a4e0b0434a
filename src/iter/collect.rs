/// Collects the success values, in their original order.
pub fn collect_ok<I, T, E>(results: I) -> Vec<T>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().filter_map(Result::ok).collect()
}

/// Collects the error values, in their original order.
pub fn collect_error<I, T, E>(results: I) -> Vec<E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().filter_map(Result::err).collect()
}
