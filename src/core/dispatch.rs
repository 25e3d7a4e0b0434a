use super::Container;

/// Applies `operation` to the value of an [`Option`] or [`Result`].
pub fn map<C, U, O>(container: C, operation: O) -> C::Rebind<U>
where
    C: Container,
    O: FnOnce(C::Value) -> U,
{
    container.map_value(operation)
}

/// Applies `operation` to the value and returns its container without
/// wrapping it a second time.
///
/// # Examples
///
/// ```
/// use optres::flat_map;
///
/// let parse = |s: &str| s.parse::<i32>().map_err(|_| "not a number");
///
/// assert_eq!(flat_map(Ok("12"), parse), Ok(12));
/// assert_eq!(flat_map(Ok("twelve"), parse), Err("not a number"));
/// assert_eq!(flat_map(Some(4), |x: i32| x.checked_sub(5)), Some(-1));
/// ```
pub fn flat_map<C, D, O>(container: C, operation: O) -> D
where
    C: Container,
    D: Container<Residual = C::Residual>,
    O: FnOnce(C::Value) -> D,
{
    container.flat_map_value(operation)
}

/// Calls `operation` for its side effect and returns `container` unchanged.
pub fn foreach<C, O>(container: C, operation: O) -> C
where
    C: Container,
    O: FnOnce(&C::Value),
{
    container.foreach_value(operation)
}
