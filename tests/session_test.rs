use secret_code::{Session, SessionSummary, ShiftCipher};
use std::io::Cursor;

fn run(script: &str) -> (SessionSummary, String) {
    let mut session = Session::new(ShiftCipher, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let summary = session.run().unwrap();
    (summary, String::from_utf8(session.into_output()).unwrap())
}

#[test]
fn test_full_transcript() {
    let (summary, output) = run("e\nattack AT DAWN!\n5\nx\n");

    let expected = "\n=== Secret Code Generator ===\n\
[E] Encode a message\n\
[D] Decode a message\n\
[X] Exit\n\
Choose an option (E/D/X): \
Enter your message: \
Enter shift (integer, e.g., 3 or -2): \
Encoded message: fyyfhp FY IFBS!\n\
\n=== Secret Code Generator ===\n\
[E] Encode a message\n\
[D] Decode a message\n\
[X] Exit\n\
Choose an option (E/D/X): Goodbye!\n";

    assert_eq!(output, expected);
    assert_eq!(
        summary,
        SessionSummary {
            encoded: 1,
            decoded: 0,
            invalid_inputs: 0
        }
    );
}

#[test]
fn test_invalid_choice_reprompts() {
    let (summary, output) = run("q\n\nencode\nD\nKhoor, Zruog!\n3\nX\n");

    assert_eq!(
        output
            .matches("Invalid choice. Please enter E, D, or X.")
            .count(),
        3
    );
    assert!(output.contains("Decoded message: Hello, World!"));
    assert_eq!(summary.invalid_inputs, 3);
    assert_eq!(summary.decoded, 1);
}

#[test]
fn test_invalid_shift_reprompts() {
    let (summary, output) = run("e\nXYZ\nthree\n2.5\n 2 \nx\n");

    assert_eq!(
        output
            .matches("Invalid number. Please enter an integer (e.g., 3 or -1).")
            .count(),
        2
    );
    assert_eq!(
        output
            .matches("Enter shift (integer, e.g., 3 or -2): ")
            .count(),
        3
    );
    assert!(output.contains("Encoded message: ZAB\n"));
    assert_eq!(summary.invalid_inputs, 2);
}

#[test]
fn test_negative_and_large_shifts() {
    let (summary, output) = run("e\nabc\n-1\nd\nzab\n-1\ne\nabc\n27\nx\n");

    assert!(output.contains("Encoded message: zab\n"));
    assert!(output.contains("Decoded message: abc\n"));
    assert!(output.contains("Encoded message: bcd\n"));
    assert_eq!(summary.encoded, 2);
    assert_eq!(summary.decoded, 1);
}

#[test]
fn test_empty_message_is_allowed() {
    let (_, output) = run("e\n\n7\nx\n");
    assert!(output.contains("Encoded message: \n"));
}

#[test]
fn test_eof_during_shift_prompt_ends_session() {
    let (summary, output) = run("e\nHello\nnot-a-number\n");

    assert!(output.ends_with("Enter shift (integer, e.g., 3 or -2): "));
    assert!(!output.contains("Goodbye!"));
    assert_eq!(summary.encoded, 0);
    assert_eq!(summary.invalid_inputs, 1);
}

#[test]
fn test_empty_input_shows_menu_once() {
    let (summary, output) = run("");
    assert_eq!(output.matches("=== Secret Code Generator ===").count(), 1);
    assert_eq!(summary, SessionSummary::default());
}

#[test]
fn test_shift_beyond_i64_is_reduced() {
    let (summary, output) = run("e\nabc\n99999999999999999999\nx\n");

    assert!(output.contains("Encoded message: vwx\n"));
    assert!(!output.contains("Invalid number"));
    assert_eq!(summary.encoded, 1);
    assert_eq!(summary.invalid_inputs, 0);
}
