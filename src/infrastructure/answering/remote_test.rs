use anyhow::Result;
use test_utils::history_fixture;

use super::ConversationRequest;
use super::ConversationResponse;
use super::Remote;
use super::SingleQuestionRequest;
use super::SingleQuestionResponse;
use crate::domain::models::AnsweringService;

impl Remote {
    fn with_url(url: String) -> Remote {
        return Remote { url };
    }
}

#[tokio::test]
async fn it_answers_single_questions_without_sending_history() -> Result<()> {
    let req_body = serde_json::to_string(&SingleQuestionRequest {
        question: "Hi".to_string(),
    })?;
    let res_body = serde_json::to_string(&SingleQuestionResponse {
        answer: "Hello!".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/single-question")
        .match_body(mockito::Matcher::JsonString(req_body))
        .with_status(200)
        .with_body(res_body)
        .create();

    let service = Remote::with_url(server.url());
    let reply = service.ask_single("Hi").await?;

    assert_eq!(reply.answer, "Hello!");
    assert_eq!(reply.history, None);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_sends_question_and_history_in_conversations() -> Result<()> {
    let req_body = serde_json::to_string(&ConversationRequest {
        question: "Bye".to_string(),
        history: "prior".to_string(),
    })?;
    let res_body = serde_json::to_string(&ConversationResponse {
        answer: "See ya".to_string(),
        history: "prior\nBye\nSee ya".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/conversation")
        .match_body(mockito::Matcher::JsonString(req_body))
        .with_status(200)
        .with_body(res_body)
        .create();

    let service = Remote::with_url(server.url());
    let reply = service.ask_conversation("Bye", "prior").await?;

    assert_eq!(reply.answer, "See ya");
    assert_eq!(reply.history, Some("prior\nBye\nSee ya".to_string()));
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_carries_multi_line_history() -> Result<()> {
    let res_body = serde_json::to_string(&ConversationResponse {
        answer: "It is on the truck.".to_string(),
        history: format!("{}Human: Where is it now?\nAI: It is on the truck.\n", history_fixture()),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/conversation")
        .with_status(200)
        .with_body(res_body)
        .create();

    let service = Remote::with_url(server.url());
    let reply = service
        .ask_conversation("Where is it now?", history_fixture())
        .await?;

    assert!(reply.history.unwrap().contains("on the truck"));
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_server_errors() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/single-question")
        .with_status(500)
        .create();

    let service = Remote::with_url(server.url());
    let res = service.ask_single("Hi").await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_fails_when_the_service_is_unreachable() {
    let service = Remote::with_url("http://127.0.0.1:1".to_string());
    let res = service.ask_single("Hi").await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_on_malformed_response_bodies() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/single-question")
        .with_status(200)
        .with_body("not json")
        .create();

    let service = Remote::with_url(server.url());
    let res = service.ask_single("Hi").await;

    assert!(res.is_err());
    mock.assert();
}
