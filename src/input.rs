use crossterm::event::Event;
use std::io;
use std::time::Duration;

/// A source of terminal input events
pub(crate) trait EventSource {
    /// Wait up to `timeout` for an event to become available.  Returns `true`
    /// if [`EventSource::read()`] will return without blocking.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Block until the next event arrives and return it
    fn read(&mut self) -> io::Result<Event>;
}

/// Events read from the real terminal via crossterm
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }
}

#[cfg(test)]
pub(crate) use self::scripted::{ScriptStep, ScriptedEvents};
