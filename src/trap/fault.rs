use std::any::{type_name, Any};
use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::panic::{panic_any, resume_unwind};

/// Kind reported for panic payloads that are neither a [`Fault`] nor a string.
pub const UNKNOWN_KIND: &str = "unknown";

const UNKNOWN_MESSAGE: &str = "Box<dyn Any>";

thread_local! {
    static TRAP_DEPTH: Cell<usize> = Cell::new(0);
}

/// Marks the current thread as running inside a trap while alive.
pub(crate) struct TrapScope(());

impl TrapScope {
    pub(crate) fn enter() -> Self {
        TRAP_DEPTH.with(|depth| depth.set(depth.get() + 1));

        Self(())
    }

    fn is_active() -> bool {
        TRAP_DEPTH.with(|depth| depth.get() > 0)
    }
}

impl Drop for TrapScope {
    fn drop(&mut self) {
        TRAP_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// A failure signaled by panicking, captured as a value.
///
/// A fault remembers the type name of what was raised (its *kind*), a
/// human-readable message and the raised value itself. Faults are created by
/// [`raise`] and by [`try_result`](crate::try_result) when it traps a panic.
pub struct Fault {
    kind: &'static str,
    message: String,
    payload: Box<dyn Any + Send>,
}

impl Fault {
    pub fn new<E>(error: E) -> Self
    where
        E: fmt::Display + Send + 'static,
    {
        Self {
            kind: type_name::<E>(),
            message: error.to_string(),
            payload: Box::new(error),
        }
    }

    /// Converts the payload of a caught panic.
    ///
    /// Payloads raised through [`raise`] are unpacked again, the `&str` and
    /// `String` payloads of `panic!` keep their text as message.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Fault>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };

        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => {
                return Self {
                    kind: type_name::<&'static str>(),
                    message: (*message).to_owned(),
                    payload: message,
                }
            }
            Err(payload) => payload,
        };

        match payload.downcast::<String>() {
            Ok(message) => Self {
                kind: type_name::<String>(),
                message: message.as_str().to_owned(),
                payload: message,
            },
            Err(payload) => Self {
                kind: UNKNOWN_KIND,
                message: UNKNOWN_MESSAGE.to_owned(),
                payload,
            },
        }
    }

    /// The type name of the raised value.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }

    pub fn is<E>(&self) -> bool
    where
        E: Any,
    {
        self.payload.is::<E>()
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Any,
    {
        self.payload.downcast_ref()
    }

    /// Takes the raised value back out, or returns the fault if it holds
    /// something else.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Any,
    {
        let Self {
            kind,
            message,
            payload,
        } = self;

        match payload.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(payload) => Err(Self {
                kind,
                message,
                payload,
            }),
        }
    }

    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continues unwinding with this fault as the panic payload.
    ///
    /// Outside of a trap only the message is carried on.
    pub fn resume(self) -> ! {
        if TrapScope::is_active() {
            resume_unwind(Box::new(self))
        } else {
            resume_unwind(Box::new(self.message))
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Fault {}

/// Signals `error` as a failure by panicking.
///
/// Inside [`try_result`](crate::try_result) the panic payload is a [`Fault`]
/// carrying `error`, so the trap gives back the value and its type name.
/// Outside of any trap this is a plain `panic!` with the `Display` text.
pub fn raise<E>(error: E) -> !
where
    E: fmt::Display + Send + 'static,
{
    tracing::trace!(kind = type_name::<E>(), "raising fault");

    if TrapScope::is_active() {
        panic_any(Fault::new(error))
    } else {
        panic!("{}", error)
    }
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Overheated(u32);

    impl fmt::Display for Overheated {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "overheated at {} degrees", self.0)
        }
    }

    #[test]
    fn test_new() {
        let fault = Fault::new(Overheated(90));

        assert_eq!(fault.kind(), type_name::<Overheated>());
        assert_eq!(fault.message(), "overheated at 90 degrees");
        assert!(fault.is::<Overheated>());
        assert_eq!(fault.downcast_ref(), Some(&Overheated(90)));
        assert_eq!(fault.to_string(), "overheated at 90 degrees");
    }

    #[test]
    fn test_downcast() {
        let fault = Fault::new(Overheated(70));
        let fault = fault.downcast::<String>().unwrap_err();

        assert_eq!(fault.downcast::<Overheated>().unwrap(), Overheated(70));
    }

    #[test]
    fn test_raise_round_trip() {
        let _scope = TrapScope::enter();
        let payload = catch_unwind(|| raise(Overheated(120))).unwrap_err();
        let fault = Fault::from_panic(payload);

        assert_eq!(fault.kind(), type_name::<Overheated>());
        assert_eq!(fault.downcast_ref(), Some(&Overheated(120)));
    }

    #[test]
    fn test_from_panic_strings() {
        let fault = Fault::from_panic(Box::new("static text"));
        assert_eq!(fault.kind(), type_name::<&str>());
        assert_eq!(fault.message(), "static text");

        let fault = Fault::from_panic(Box::new(format!("formatted {}", 1)));
        assert_eq!(fault.kind(), type_name::<String>());
        assert_eq!(fault.message(), "formatted 1");
    }

    #[test]
    fn test_from_panic_unknown() {
        let fault = Fault::from_panic(Box::new(17u8));

        assert_eq!(fault.kind(), UNKNOWN_KIND);
        assert_eq!(fault.message(), "Box<dyn Any>");
        assert_eq!(fault.downcast_ref::<u8>(), Some(&17));
    }

    #[test]
    fn test_resume() {
        let _scope = TrapScope::enter();
        let payload = catch_unwind(|| Fault::new(Overheated(1)).resume()).unwrap_err();

        assert!(Fault::from_panic(payload).is::<Overheated>());
    }

    #[test]
    fn test_resume_outside_trap_keeps_message() {
        let payload = catch_unwind(|| Fault::new(Overheated(2)).resume()).unwrap_err();

        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("overheated at 2 degrees")
        );
    }

    #[test]
    fn test_raise_outside_trap_keeps_message() {
        let payload = catch_unwind(|| raise(Overheated(5))).unwrap_err();
        let fault = Fault::from_panic(payload);

        assert_eq!(fault.kind(), type_name::<String>());
        assert_eq!(fault.message(), "overheated at 5 degrees");
    }

    #[test]
    #[should_panic(expected = "overheated at 7 degrees")]
    fn test_raise_outside_trap_panics_with_message() {
        raise(Overheated(7));
    }

    #[test]
    fn test_scope_nesting() {
        assert!(!TrapScope::is_active());
        {
            let _outer = TrapScope::enter();
            {
                let _inner = TrapScope::enter();
                assert!(TrapScope::is_active());
            }
            assert!(TrapScope::is_active());
        }
        assert!(!TrapScope::is_active());
    }
}
