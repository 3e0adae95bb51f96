use super::*;

fn typed(s: &str) -> Input {
    let mut input = Input::default();
    for c in s.chars() {
        input.insert_char(c);
    }
    input
}

#[test]
fn editing_multibyte_text_keeps_char_boundaries() {
    let mut input = typed("sub 서울 용산구");
    input.backspace();
    assert_eq!(input.buf, "sub 서울 용산");

    input.move_left();
    input.move_left();
    input.insert_char('x');
    assert_eq!(input.buf, "sub 서울 x용산");

    input.move_right();
    input.delete();
    assert_eq!(input.buf, "sub 서울 x용");
    assert_eq!(input.cursor, input.buf.len());
}

#[test]
fn backspace_at_start_is_noop() {
    let mut input = Input::default();
    input.backspace();
    input.move_left();
    assert_eq!(input.buf, "");
    assert_eq!(input.cursor, 0);
}

#[test]
fn submit_records_history_without_repeats() {
    let mut input = typed("  reload ");
    assert_eq!(input.submit(), "reload");
    assert!(input.buf.is_empty());

    input.set("reload".to_string());
    input.submit();
    input.set("logout".to_string());
    input.submit();
    assert_eq!(input.history, vec!["reload", "logout"]);

    input.history_up();
    assert_eq!(input.buf, "logout");
    input.history_up();
    assert_eq!(input.buf, "reload");
    input.history_down();
    assert_eq!(input.buf, "logout");
    input.history_down();
    assert_eq!(input.buf, "");
}
