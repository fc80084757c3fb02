use crate::message::Messages;

/// Receives whatever diagnostics a phase produced. Drivers decide how (and
/// whether) they are shown.
pub trait Driver {
    fn report(&mut self, messages: Messages);
}
