use apictl::error::Error;
use apictl::interactive::{select_with_io, ChoiceItem, Chooser, InputOutput, TerminalChooser};
use mockall::mock;
use mockall::predicate::*;
use mockall::Sequence;

// The library's automock is only compiled for its own unit tests.
mock! {
    pub Terminal {}

    impl InputOutput for Terminal {
        fn print(&self, text: &str) -> Result<(), Error>;
        fn println(&self, text: &str) -> Result<(), Error>;
        fn flush(&self) -> Result<(), Error>;
        fn read_line(&self) -> Result<String, Error>;
    }
}

fn items() -> Vec<ChoiceItem> {
    vec![ChoiceItem::new("1", "alpha"), ChoiceItem::new("2", "Beta")]
}

fn answering(lines: &[&'static str]) -> MockTerminal {
    let mut mock = MockTerminal::new();
    mock.expect_println().returning(|_| Ok(()));
    mock.expect_print().returning(|_| Ok(()));
    mock.expect_flush().returning(|| Ok(()));

    let mut seq = Sequence::new();
    for &line in lines {
        mock.expect_read_line()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(format!("{line}\n")));
    }
    mock
}

#[test]
fn test_menu_lists_items_in_order() {
    let mut mock = MockTerminal::new();
    let mut seq = Sequence::new();
    mock.expect_println()
        .with(eq("Select app_id:"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mock.expect_println()
        .with(eq("  1: alpha (1)"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mock.expect_println()
        .with(eq("  2: Beta (2)"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mock.expect_print().times(1).returning(|_| Ok(()));
    mock.expect_flush().times(1).returning(|| Ok(()));
    mock.expect_read_line()
        .times(1)
        .returning(|| Ok("1\n".to_string()));

    let choice = select_with_io("app_id", &items(), &mock).unwrap();
    assert_eq!(choice.as_deref(), Some("1"));
}

#[test]
fn test_select_by_number() {
    let chooser = TerminalChooser::with_io(answering(&["2"]));
    assert_eq!(
        chooser.choose("app_id", &items()).unwrap().as_deref(),
        Some("2")
    );
}

#[test]
fn test_select_by_label_ignores_case() {
    let chooser = TerminalChooser::with_io(answering(&["beta"]));
    assert_eq!(
        chooser.choose("app_id", &items()).unwrap().as_deref(),
        Some("2")
    );
}

#[test]
fn test_select_by_id() {
    let list = vec![ChoiceItem::new("app-x", "x"), ChoiceItem::new("app-y", "y")];
    let chooser = TerminalChooser::with_io(answering(&["app-y"]));
    assert_eq!(
        chooser.choose("app_id", &list).unwrap().as_deref(),
        Some("app-y")
    );
}

#[test]
fn test_empty_input_cancels() {
    let chooser = TerminalChooser::with_io(answering(&[""]));
    assert_eq!(chooser.choose("app_id", &items()).unwrap(), None);
}

#[test]
fn test_invalid_input_is_retried() {
    let chooser = TerminalChooser::with_io(answering(&["9", "nope", "alpha"]));
    assert_eq!(
        chooser.choose("app_id", &items()).unwrap().as_deref(),
        Some("1")
    );
}

#[test]
fn test_retries_are_bounded() {
    let chooser = TerminalChooser::with_io(answering(&["9", "nope", "zzz"]));
    let err = chooser.choose("app_id", &items()).unwrap_err();
    assert!(matches!(err, Error::Interactive(ref msg) if msg.contains("Maximum retry attempts")));
}

#[test]
fn test_empty_item_list_cancels_without_prompting() {
    let mut mock = MockTerminal::new();
    mock.expect_println()
        .with(eq("No options available for app_id."))
        .times(1)
        .returning(|_| Ok(()));
    mock.expect_read_line().never();

    assert_eq!(select_with_io("app_id", &[], &mock).unwrap(), None);
}
