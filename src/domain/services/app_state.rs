#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::prelude::Rect;

use super::actions::help_text;
use super::Scroll;
use super::Transcript;
use crate::domain::models::Ask;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Mode;
use crate::domain::models::Outcome;
use crate::domain::models::Session;
use crate::domain::models::SlashCommand;
use crate::domain::models::ANSWER_ERROR;

fn mode_notice(mode: Mode) -> Message {
    let text = match mode {
        Mode::Single => "Single question mode. Each question stands alone.",
        Mode::Conversational => {
            "Conversational mode. The desk will remember this conversation until you switch back."
        }
    };

    return Message::new(Author::Crumpet, text);
}

pub struct AppState {
    pub session: Session,
    pub messages: Vec<Message>,
    pub transcript: Transcript,
    pub scroll: Scroll,
    pub last_known_width: u16,
    pub last_known_height: u16,
    pub pending_requests: usize,
}

impl AppState {
    pub fn new(mode: Mode) -> AppState {
        let mut app_state = AppState {
            session: Session::new(mode),
            messages: vec![],
            transcript: Transcript::default(),
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
            pending_requests: 0,
        };

        app_state.add_message(Message::new(
            Author::Desk,
            "Hey there! Ask me a question and I'll do my best to help.",
        ));
        if mode == Mode::Conversational {
            app_state.add_message(mode_notice(mode));
        }

        return app_state;
    }

    /// Returns (should_break, handled). A command that is not recognized at
    /// all is left for the caller to treat as a plain question.
    pub fn handle_slash_commands(&mut self, input_str: &str) -> (bool, bool) {
        if let Some(command) = SlashCommand::parse(input_str) {
            if command.is_quit() {
                return (true, true);
            }

            if command.is_mode_toggle() {
                self.toggle_mode();
                return (false, true);
            }

            if command.is_help() {
                self.add_message(Message::new(Author::Crumpet, &help_text()));
                return (false, true);
            }
        }

        return (false, false);
    }

    /// Snapshots an Ask from the session and puts the question on screen.
    pub fn submit_question(&mut self, question: &str) -> Ask {
        self.add_message(Message::new(Author::User, question));
        self.pending_requests += 1;

        return self.session.ask(question);
    }

    pub fn handle_outcome(&mut self, outcome: Outcome) {
        self.pending_requests = self.pending_requests.saturating_sub(1);

        match outcome {
            Outcome::Answered(reply) => {
                self.session = self.session.apply_answer(&reply);
                self.add_message(Message::new(Author::Desk, &reply.answer));
            }
            Outcome::Failed => {
                self.session = self.session.apply_failure();
                self.add_message(Message::new_with_type(
                    Author::Crumpet,
                    MessageType::Error,
                    ANSWER_ERROR,
                ));
            }
        }
    }

    /// Switching modes discards the visible transcript along with the
    /// session history.
    pub fn toggle_mode(&mut self) {
        self.session = self.session.toggle_mode();
        self.messages.clear();
        self.add_message(mode_notice(self.session.mode));
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.transcript
            .set_messages(&self.messages, self.last_known_width);

        self.scroll
            .set_state(self.transcript.len() as u16, self.last_known_height);

        if self.pending_requests > 0 {
            self.scroll.last();
        }
    }
}
