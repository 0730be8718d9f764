use crate::error::Error;
use crate::interactive::{select_with_io, ChoiceItem, Chooser};
use std::io::{BufRead, Write};

/// Line-oriented terminal access, abstracted so prompts can be tested.
#[cfg_attr(test, mockall::automock)]
pub trait InputOutput {
    /// Print text without a trailing newline
    fn print(&self, text: &str) -> Result<(), Error>;

    fn println(&self, text: &str) -> Result<(), Error>;

    fn flush(&self) -> Result<(), Error>;

    /// Read one line; an empty string means end of input.
    fn read_line(&self) -> Result<String, Error>;
}

/// Menus go to stderr so stdout stays clean for response output.
pub struct StdTerminal;

impl InputOutput for StdTerminal {
    fn print(&self, text: &str) -> Result<(), Error> {
        eprint!("{text}");
        Ok(())
    }

    fn println(&self, text: &str) -> Result<(), Error> {
        eprintln!("{text}");
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stderr().flush().map_err(Error::Io)
    }

    fn read_line(&self) -> Result<String, Error> {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// [`Chooser`] that shows a numbered menu on a terminal.
pub struct TerminalChooser<T: InputOutput = StdTerminal> {
    io: T,
}

impl TerminalChooser<StdTerminal> {
    #[must_use]
    pub const fn new() -> Self {
        Self { io: StdTerminal }
    }
}

impl Default for TerminalChooser<StdTerminal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InputOutput> TerminalChooser<T> {
    pub const fn with_io(io: T) -> Self {
        Self { io }
    }

    pub const fn io(&self) -> &T {
        &self.io
    }
}

impl<T: InputOutput> Chooser for TerminalChooser<T> {
    fn choose(&self, prompt: &str, items: &[ChoiceItem]) -> Result<Option<String>, Error> {
        select_with_io(prompt, items, &self.io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_terminal_chooser_delegates_to_io() {
        let mut mock = MockInputOutput::new();
        mock.expect_println().returning(|_| Ok(()));
        mock.expect_print()
            .with(eq(crate::interactive::SELECTION_PROMPT))
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_flush().times(1).returning(|| Ok(()));
        mock.expect_read_line()
            .times(1)
            .returning(|| Ok("2\n".to_string()));

        let chooser = TerminalChooser::with_io(mock);
        let items = vec![ChoiceItem::new("a", "Alpha"), ChoiceItem::new("b", "Beta")];
        assert_eq!(chooser.choose("app_id", &items).unwrap().as_deref(), Some("b"));
    }
}
