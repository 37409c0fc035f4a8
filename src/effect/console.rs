//! Console sinks for the `println` effect.
//!
//! [`IO::println_to`](super::IO::println_to) writes through a [`Console`],
//! so tests can substitute a [`RecordingConsole`] for standard output.

use std::cell::RefCell;

/// A line-oriented output sink.
pub trait Console {
    /// Writes one line.
    fn write_line(&self, line: &str);
}

/// Writes lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Records lines in memory instead of printing them.
///
/// # Examples
///
/// ```rust
/// use funcore::effect::{Console, RecordingConsole};
///
/// let console = RecordingConsole::new();
/// console.write_line("first");
/// console.write_line("second");
/// assert_eq!(console.lines(), vec!["first", "second"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    /// Creates a console with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every line written so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl Console for RecordingConsole {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
