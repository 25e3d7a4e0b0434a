use super::Fault;

/// Decides what a trapped [`Fault`] turns into.
///
/// The mode is picked by type, so the error type of
/// [`try_result`](crate::try_result) is known at compile time.
pub trait TrapMode {
    type Shape;

    fn shape(&self, fault: Fault) -> Self::Shape;
}

/// Keeps the whole [`Fault`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Full;

/// Keeps only the human-readable message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Message;

/// Keeps only the type name of what was raised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Kind;

impl TrapMode for Full {
    type Shape = Fault;

    fn shape(&self, fault: Fault) -> Fault {
        fault
    }
}

impl TrapMode for Message {
    type Shape = String;

    fn shape(&self, fault: Fault) -> String {
        fault.into_message()
    }
}

impl TrapMode for Kind {
    type Shape = &'static str;

    fn shape(&self, fault: Fault) -> &'static str {
        fault.kind()
    }
}
