use super::*;

#[test]
fn region_commands_take_two_names() {
    assert_eq!(
        parse("unsub 서울 용산구"),
        Ok(Command::Unsubscribe {
            region: "서울".to_string(),
            sub_region: "용산구".to_string(),
        })
    );
    assert_eq!(
        parse("/subscribe 대구 달서구"),
        Ok(Command::Subscribe {
            region: "대구".to_string(),
            sub_region: "달서구".to_string(),
        })
    );
    assert!(parse("sub 서울").unwrap_err().starts_with("usage: sub"));
}

#[test]
fn simple_commands() {
    assert_eq!(parse("notify off"), Ok(Command::Notify(false)));
    assert_eq!(parse("reload"), Ok(Command::Reload));
    assert_eq!(parse(" logout "), Ok(Command::Logout));
    assert_eq!(parse("delete-account"), Ok(Command::DeleteAccount));
    assert!(parse("notify maybe").is_err());
    assert!(parse("reload now").is_err());
}

#[test]
fn unknown_and_empty_lines_are_rejected() {
    assert!(parse("").is_err());
    assert!(parse("frobnicate").unwrap_err().contains("unknown command"));
}
