// Clipboard (OSC 52) tests
use crate::action::Action;
use crate::interpreter::OscInterpreter;

fn clipboard_copy(selection: &str, data: &str) -> Action {
    Action::ClipboardCopy {
        selection: selection.to_string(),
        data: data.to_string(),
    }
}

#[test]
fn test_clipboard_write_base64() {
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, "c;SGVsbG8gV29ybGQ=", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("c", "Hello World")]);
}

#[test]
fn test_clipboard_write_base64_with_punctuation() {
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, "c;SGVsbG8sIFdvcmxkIQ==", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("c", "Hello, World!")]);
}

#[test]
fn test_clipboard_missing_separator_rejected() {
    let mut interp = OscInterpreter::new();
    assert!(interp.parse(52, "SGVsbG8=", 0, 0, 80).is_empty());
}

#[test]
fn test_clipboard_read_request_refused() {
    let mut interp = OscInterpreter::new();
    assert!(interp.parse(52, "c;?", 0, 0, 80).is_empty());
}

#[test]
fn test_clipboard_empty_data() {
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, "c;", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("c", "")]);
}

#[test]
fn test_clipboard_empty_selection_is_distinct() {
    // An empty selection is a valid selection identifier, not an alias for c
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, ";SGVsbG8=", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("", "Hello")]);
}

#[test]
fn test_clipboard_primary_selection() {
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, "p;SGVsbG8=", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("p", "Hello")]);
}

#[test]
fn test_clipboard_non_base64_passes_through() {
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, "c;not base64!!", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("c", "not base64!!")]);
}

#[test]
fn test_clipboard_base64_decoding_to_invalid_utf8_passes_through() {
    // /w== decodes to 0xFF, which is not valid UTF-8
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, "c;/w==", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("c", "/w==")]);
}

#[test]
fn test_clipboard_data_may_contain_separator() {
    // Only the first semicolon separates selection from data
    let mut interp = OscInterpreter::new();
    let actions = interp.parse(52, "c;raw;text", 0, 0, 80);
    assert_eq!(actions, vec![clipboard_copy("c", "raw;text")]);
}

#[test]
fn test_clipboard_write_disabled() {
    let mut interp = OscInterpreter::new();
    interp.set_allow_clipboard_write(false);
    assert!(interp.parse(52, "c;SGVsbG8=", 0, 0, 80).is_empty());

    interp.set_allow_clipboard_write(true);
    assert_eq!(
        interp.parse(52, "c;SGVsbG8=", 0, 0, 80),
        vec![clipboard_copy("c", "Hello")]
    );
}
