use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::Mode;

/// An outgoing request, snapshotted from the session at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ask {
    pub question: String,
    pub mode: Mode,
    pub history: String,
}

/// An answer from the desk. `history` is present only on conversation
/// replies, where it replaces the client's copy wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub answer: String,
    pub history: Option<String>,
}

/// What the UI pattern-matches on when a request completes. There is exactly
/// one failure kind: network errors, timeouts, and non-2xx statuses all land
/// on `Failed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Answered(Reply),
    Failed,
}

#[async_trait]
pub trait AnsweringService {
    /// Sends a standalone question to the desk.
    async fn ask_single(&self, question: &str) -> Result<Reply>;

    /// Sends a question along with the prior transcript. The desk folds the
    /// turn into the transcript and echoes the updated copy back.
    async fn ask_conversation(&self, question: &str, history: &str) -> Result<Reply>;
}

pub type ServiceBox = Arc<dyn AnsweringService + Send + Sync>;
