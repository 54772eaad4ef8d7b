use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}
#[test]
fn it_parse_plain_question() {
    let text = "Where is my parcel?";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_is_quit() {
    let cmd = SlashCommand::parse("/mode").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_mode_toggle() {
    let cmd = SlashCommand::parse("/m").unwrap();
    assert!(cmd.is_mode_toggle());
}
#[test]
fn it_is_mode_toggle() {
    let cmd = SlashCommand::parse("/mode").unwrap();
    assert!(cmd.is_mode_toggle());
}
#[test]
fn it_is_not_mode_toggle() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(!cmd.is_mode_toggle());
}

#[test]
fn it_is_short_help() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_not_help() {
    let cmd = SlashCommand::parse("/mode").unwrap();
    assert!(!cmd.is_help());
}
