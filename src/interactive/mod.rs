//! Interactive selection of a value from a list of choices.

use crate::error::Error;

pub mod terminal;

pub use terminal::{InputOutput, StdTerminal, TerminalChooser};

/// Maximum allowed input length to prevent memory exhaustion
const MAX_INPUT_LENGTH: usize = 1024;

/// Maximum number of retry attempts for invalid input
const MAX_RETRIES: usize = 3;

pub const SELECTION_PROMPT: &str = "Enter your choice (number, id or name; empty to cancel): ";

/// One selectable entry: the value returned on selection and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub id: String,
    pub label: String,
}

impl ChoiceItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Lets the user pick one item. `Ok(None)` means the user cancelled.
pub trait Chooser {
    /// # Errors
    /// Returns an error if the terminal cannot be read or written.
    fn choose(&self, prompt: &str, items: &[ChoiceItem]) -> Result<Option<String>, Error>;
}

/// Reads one trimmed line of input after printing `prompt`.
///
/// # Errors
/// Returns an error if I/O fails, the input is too long, or it contains
/// control characters.
pub fn prompt_with_io<T: InputOutput + ?Sized>(prompt: &str, io: &T) -> Result<String, Error> {
    io.print(prompt)?;
    io.flush()?;

    let input = io.read_line()?;
    let trimmed_input = input.trim();

    if trimmed_input.len() > MAX_INPUT_LENGTH {
        return Err(Error::Interactive(format!(
            "Input too long: {} characters (maximum: {MAX_INPUT_LENGTH})",
            trimmed_input.len()
        )));
    }

    if trimmed_input.chars().any(|c| c.is_control() && c != '\t') {
        return Err(Error::Interactive(
            "Input contains invalid control characters".to_string(),
        ));
    }

    Ok(trimmed_input.to_string())
}

fn match_selection<'a>(selection: &str, items: &'a [ChoiceItem]) -> Option<&'a ChoiceItem> {
    if let Ok(num) = selection.parse::<usize>() {
        if (1..=items.len()).contains(&num) {
            return Some(&items[num - 1]);
        }
    }
    items.iter().find(|item| item.id == selection).or_else(|| {
        items
            .iter()
            .find(|item| item.label.eq_ignore_ascii_case(selection))
    })
}

/// Presents a numbered menu and returns the chosen item's id.
///
/// Empty input, end of input, or an empty item list cancel the selection.
///
/// # Errors
/// Returns an error if I/O fails or the maximum number of invalid attempts
/// is exceeded.
pub fn select_with_io<T: InputOutput + ?Sized>(
    prompt: &str,
    items: &[ChoiceItem],
    io: &T,
) -> Result<Option<String>, Error> {
    if items.is_empty() {
        io.println(&format!("No options available for {prompt}."))?;
        return Ok(None);
    }

    io.println(&format!("Select {prompt}:"))?;
    for (i, item) in items.iter().enumerate() {
        let line = if item.label == item.id {
            format!("  {}: {}", i + 1, item.id)
        } else {
            format!("  {}: {} ({})", i + 1, item.label, item.id)
        };
        io.println(&line)?;
    }

    for attempt in 1..=MAX_RETRIES {
        let selection = prompt_with_io(SELECTION_PROMPT, io)?;
        if selection.is_empty() {
            return Ok(None);
        }

        if let Some(item) = match_selection(&selection, items) {
            return Ok(Some(item.id.clone()));
        }

        if attempt < MAX_RETRIES {
            io.println(&format!(
                "Invalid selection. Please enter a number (1-{}), an id or a name. (Attempt {attempt} of {MAX_RETRIES})",
                items.len()
            ))?;
        }
    }

    Err(Error::Interactive(format!(
        "Maximum retry attempts ({MAX_RETRIES}) exceeded"
    )))
}
