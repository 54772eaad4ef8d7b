use test_utils::history_fixture;

use super::Mode;
use super::Reply;
use super::Session;
use super::ANSWER_ERROR;

fn conversational_session() -> Session {
    let mut session = Session::new(Mode::Conversational);
    session.history = history_fixture().to_string();
    session.answer = "It shipped yesterday and should arrive Friday.".to_string();

    return session;
}

#[test]
fn it_starts_empty() {
    let session = Session::new(Mode::Single);
    assert_eq!(session.mode, Mode::Single);
    assert_eq!(session.history, "");
    assert_eq!(session.answer, "");
}

#[test]
fn it_toggles_single_to_conversational() {
    let session = Session::new(Mode::Single).toggle_mode();
    assert_eq!(session.mode, Mode::Conversational);
}

#[test]
fn it_clears_history_and_answer_on_toggle() {
    let session = conversational_session().toggle_mode();

    assert_eq!(session.mode, Mode::Single);
    assert_eq!(session.history, "");
    assert_eq!(session.answer, "");
}

#[test]
fn it_applies_single_answers_without_touching_history() {
    let session = Session::new(Mode::Single).apply_answer(&Reply {
        answer: "Hello!".to_string(),
        history: None,
    });

    assert_eq!(session.answer, "Hello!");
    assert_eq!(session.history, "");
}

#[test]
fn it_replaces_history_wholesale_on_conversation_answers() {
    let mut session = Session::new(Mode::Conversational);
    session.history = "prior".to_string();

    let next = session.apply_answer(&Reply {
        answer: "See ya".to_string(),
        history: Some("prior\nBye\nSee ya".to_string()),
    });

    assert_eq!(next.answer, "See ya");
    assert_eq!(next.history, "prior\nBye\nSee ya");
}

#[test]
fn it_applies_failures_without_touching_history_or_mode() {
    let session = conversational_session();
    let next = session.apply_failure();

    assert_eq!(next.answer, ANSWER_ERROR);
    insta::assert_snapshot!(next.answer, @"Error: Could not get a response.");
    assert_eq!(next.history, session.history);
    assert_eq!(next.mode, Mode::Conversational);
}

#[test]
fn it_never_sends_history_in_single_mode() {
    let mut session = Session::new(Mode::Single);
    session.history = history_fixture().to_string();

    let ask = session.ask("Hi");

    assert_eq!(ask.question, "Hi");
    assert_eq!(ask.mode, Mode::Single);
    assert_eq!(ask.history, "");
}

#[test]
fn it_carries_history_in_conversational_mode() {
    let session = conversational_session();
    let ask = session.ask("Where is it now?");

    assert_eq!(ask.question, "Where is it now?");
    assert_eq!(ask.mode, Mode::Conversational);
    assert_eq!(ask.history, history_fixture());
}
