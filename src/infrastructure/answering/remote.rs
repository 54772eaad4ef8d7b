#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnsweringService;
use crate::domain::models::Reply;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SingleQuestionRequest {
    question: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SingleQuestionResponse {
    answer: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ConversationRequest {
    question: String,
    history: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ConversationResponse {
    answer: String,
    history: String,
}

pub struct Remote {
    url: String,
}

impl Default for Remote {
    fn default() -> Remote {
        return Remote {
            url: Config::get(ConfigKey::ServiceUrl),
        };
    }
}

#[async_trait]
impl AnsweringService for Remote {
    #[allow(clippy::implicit_return)]
    async fn ask_single(&self, question: &str) -> Result<Reply> {
        let req = SingleQuestionRequest {
            question: question.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/single-question", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make single question request to the answering service"
            );
            bail!("Failed to make single question request to the answering service");
        }

        let body = res.json::<SingleQuestionResponse>().await?;
        tracing::debug!(body = ?body, "Single question response");

        return Ok(Reply {
            answer: body.answer,
            history: None,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn ask_conversation(&self, question: &str, history: &str) -> Result<Reply> {
        let req = ConversationRequest {
            question: question.to_string(),
            history: history.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/conversation", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make conversation request to the answering service"
            );
            bail!("Failed to make conversation request to the answering service");
        }

        let body = res.json::<ConversationResponse>().await?;
        tracing::debug!(body = ?body, "Conversation response");

        return Ok(Reply {
            answer: body.answer,
            history: Some(body.history),
        });
    }
}
