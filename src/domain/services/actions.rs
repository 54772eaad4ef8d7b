#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Mode;
use crate::domain::models::Outcome;
use crate::domain::models::ServiceBox;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /mode (/m) - Switches between single-question and conversational mode. Switching discards the running transcript.
- /quit /exit (/q) - Exit Crumpet.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+T - Toggle conversational mode.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tracing::error!(err = ?err, "request to the answering service failed");
    tx.send(Event::ServiceOutcome(Outcome::Failed))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs the worker loop. Every submit spawns its own request task, so
    /// overlapping submissions are allowed and whichever reply lands last
    /// wins. Nothing is retried and nothing is aborted.
    pub async fn start(
        service: ServiceBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            match action.unwrap() {
                Action::SubmitQuestion(ask) => {
                    let worker_service = service.clone();
                    tokio::spawn(async move {
                        let res = match ask.mode {
                            Mode::Single => worker_service.ask_single(&ask.question).await,
                            Mode::Conversational => {
                                worker_service
                                    .ask_conversation(&ask.question, &ask.history)
                                    .await
                            }
                        };

                        match res {
                            Ok(reply) => {
                                worker_tx.send(Event::ServiceOutcome(Outcome::Answered(reply)))?;
                            }
                            Err(err) => {
                                worker_error(err, &worker_tx)?;
                            }
                        }

                        return Ok::<(), anyhow::Error>(());
                    });
                }
            }
        }
    }
}
