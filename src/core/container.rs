/// Common ground of [`Option`] and [`Result`]: a value variant and a
/// residual variant (`()` for `None`, the error for `Err`).
pub trait Container: Sized {
    type Value;
    type Residual;

    /// The same kind of container holding a `U` instead of a `Value`.
    type Rebind<U>: Container<Value = U, Residual = Self::Residual>;

    fn from_value(value: Self::Value) -> Self;

    fn from_residual(residual: Self::Residual) -> Self;

    fn into_result(self) -> Result<Self::Value, Self::Residual>;

    fn value(&self) -> Option<&Self::Value>;

    fn is_value(&self) -> bool {
        self.value().is_some()
    }

    fn map_value<U, O>(self, operation: O) -> Self::Rebind<U>
    where
        O: FnOnce(Self::Value) -> U,
    {
        match self.into_result() {
            Ok(value) => <Self::Rebind<U> as Container>::from_value(operation(value)),
            Err(residual) => <Self::Rebind<U> as Container>::from_residual(residual),
        }
    }

    /// The returned container has to carry the same residual.
    fn flat_map_value<D, O>(self, operation: O) -> D
    where
        O: FnOnce(Self::Value) -> D,
        D: Container<Residual = Self::Residual>,
    {
        match self.into_result() {
            Ok(value) => operation(value),
            Err(residual) => D::from_residual(residual),
        }
    }

    fn foreach_value<O>(self, operation: O) -> Self
    where
        O: FnOnce(&Self::Value),
    {
        if let Some(value) = self.value() {
            operation(value);
        }

        self
    }
}
