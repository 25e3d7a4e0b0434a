mod fault;
mod mode;

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use fault::TrapScope;

pub use fault::{raise, Fault, UNKNOWN_KIND};
pub use mode::{Full, Kind, Message, TrapMode};

/// Runs `work` and turns a panic into an `Err` shaped by `mode`.
///
/// Only unwinding panics are trapped: with `panic = "abort"` the process still
/// aborts. State that `work` mutates may be left half-updated when it panics.
///
/// The panic hook still runs for trapped panics, so the default hook prints
/// each one to stderr. Callers that want quiet traps install their own hook
/// with [`std::panic::set_hook`].
///
/// # Examples
///
/// ```
/// use optres::{raise, try_result, Full, Kind, Message};
///
/// #[derive(Debug)]
/// struct ArithmeticFault(&'static str);
///
/// impl std::fmt::Display for ArithmeticFault {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(self.0)
///     }
/// }
///
/// let divide = || -> i32 { raise(ArithmeticFault("boom")) };
///
/// assert_eq!(try_result(Full, || 1 + 1).ok(), Some(2));
/// assert!(try_result(Full, divide).unwrap_err().is::<ArithmeticFault>());
/// assert_eq!(try_result(Message, divide), Err("boom".to_owned()));
/// assert_eq!(
///     try_result(Kind, divide),
///     Err(std::any::type_name::<ArithmeticFault>())
/// );
/// ```
pub fn try_result<M, T, O>(mode: M, work: O) -> Result<T, M::Shape>
where
    M: TrapMode,
    O: FnOnce() -> T,
{
    let _scope = TrapScope::enter();

    catch_unwind(AssertUnwindSafe(work)).map_err(|payload| trap(&mode, payload))
}

/// Like [`try_result`], but for work that already returns a [`Result`].
///
/// The result of `work` is returned as it is instead of being wrapped into
/// another `Ok`. A trapped panic is converted into the work's error type.
/// The panic hook runs as it does for [`try_result`].
///
/// ```
/// use optres::{try_result_flat, Message};
///
/// assert_eq!(try_result_flat(Message, || Ok::<_, String>(10)), Ok(10));
/// assert_eq!(
///     try_result_flat(Message, || -> Result<i32, String> { panic!("lost") }),
///     Err("lost".to_owned())
/// );
/// ```
pub fn try_result_flat<M, T, E, O>(mode: M, work: O) -> Result<T, E>
where
    M: TrapMode,
    O: FnOnce() -> Result<T, E>,
    E: From<M::Shape>,
{
    let _scope = TrapScope::enter();

    match catch_unwind(AssertUnwindSafe(work)) {
        Ok(result) => result,
        Err(payload) => Err(E::from(trap(&mode, payload))),
    }
}

fn trap<M>(mode: &M, payload: Box<dyn Any + Send>) -> M::Shape
where
    M: TrapMode,
{
    let fault = Fault::from_panic(payload);

    tracing::debug!(kind = fault.kind(), message = fault.message(), "trapped panic");

    mode.shape(fault)
}

#[cfg(test)]
mod tests {
    use ::std::any::type_name;
    use ::std::cell::Cell;
    use ::std::fmt;

    use super::*;
    use crate::*;

    #[derive(Debug, PartialEq)]
    struct ArithmeticFault {
        message: &'static str,
    }

    impl fmt::Display for ArithmeticFault {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    fn boom() -> i32 {
        raise(ArithmeticFault { message: "boom" })
    }

    #[test]
    fn test_plain_value_is_wrapped() {
        assert_eq!(try_result(Message, || 10), Ok(10));
    }

    #[test]
    fn test_full_keeps_fault() {
        let fault = try_result(Full, boom).unwrap_err();

        assert_eq!(fault.kind(), type_name::<ArithmeticFault>());
        assert_eq!(fault.message(), "boom");
        assert_eq!(
            fault.downcast_ref(),
            Some(&ArithmeticFault { message: "boom" })
        );
    }

    #[test]
    fn test_message_mode() {
        assert_eq!(try_result(Message, boom), Err("boom".to_owned()));
    }

    #[test]
    fn test_kind_mode() {
        assert_eq!(try_result(Kind, boom), Err(type_name::<ArithmeticFault>()));
    }

    #[test]
    fn test_plain_panic() {
        let x = try_result(Message, || -> i32 { panic!("index {} out of range", 4) });

        assert_eq!(x, Err("index 4 out of range".to_owned()));
    }

    #[test]
    fn test_flat_does_not_rewrap() {
        let x = try_result_flat(Full, || Ok::<_, Fault>(10));
        assert!(matches!(x, Ok(10)));

        let x = try_result_flat(Message, || Err::<i32, _>("kept".to_owned()));
        assert_eq!(x, Err("kept".to_owned()));
    }

    #[test]
    fn test_flat_traps_panic() {
        let x = try_result_flat(Kind, || -> Result<i32, &'static str> { Ok(boom()) });

        assert_eq!(x, Err(type_name::<ArithmeticFault>()));
    }

    #[test]
    fn test_partial_accessors() {
        let fault = try_result(Full, || None::<i32>.get()).unwrap_err();
        assert!(fault.is::<EmptyContainerError>());
        assert_eq!(fault.message(), "Can't get value of None");

        let x = try_result(Message, || Err::<i32, _>("bad input".to_owned()).unwrap_or_raise());
        assert_eq!(x, Err("bad input".to_owned()));
    }

    #[test]
    fn test_nested_resume() {
        let outer = try_result(Kind, || {
            let inner = try_result(Full, boom);
            match inner {
                Ok(value) => value,
                Err(fault) => fault.resume(),
            }
        });

        assert_eq!(outer, Err(type_name::<ArithmeticFault>()));
    }

    #[test]
    fn test_raise_after_trap_is_plain_panic() {
        assert!(try_result(Full, boom).is_err());

        let payload = ::std::panic::catch_unwind(boom).unwrap_err();

        assert!(payload.downcast_ref::<Fault>().is_none());
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("boom")
        );
    }

    #[test]
    fn test_work_runs_once() {
        let calls = Cell::new(0);

        let x = try_result(Full, || calls.set(calls.get() + 1));

        assert!(x.is_ok());
        assert_eq!(calls.get(), 1);
    }
}
