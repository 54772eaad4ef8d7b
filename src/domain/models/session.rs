#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use strum::Display;
use strum::EnumString;
use strum::EnumVariantNames;

use super::Ask;
use super::Reply;

/// Shown in place of an answer whenever a request fails, whatever the cause.
pub const ANSWER_ERROR: &str = "Error: Could not get a response.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    Single,
    Conversational,
}

/// Client-held state for one run of the program. Reducers return new values
/// rather than mutating, so mode and transcript rules are testable without a
/// terminal or a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub mode: Mode,
    pub history: String,
    pub answer: String,
}

impl Session {
    pub fn new(mode: Mode) -> Session {
        return Session {
            mode,
            history: "".to_string(),
            answer: "".to_string(),
        };
    }

    /// Flips the mode and unconditionally drops the running transcript.
    pub fn toggle_mode(&self) -> Session {
        let mode = match self.mode {
            Mode::Single => Mode::Conversational,
            Mode::Conversational => Mode::Single,
        };

        return Session::new(mode);
    }

    /// The desk is authoritative for the transcript. The history is replaced
    /// wholesale when a reply carries one, never appended to locally.
    pub fn apply_answer(&self, reply: &Reply) -> Session {
        let mut next = self.clone();
        next.answer = reply.answer.to_string();
        if let Some(history) = &reply.history {
            next.history = history.to_string();
        }

        return next;
    }

    /// All failures collapse to one fixed answer. The history and mode are
    /// left untouched.
    pub fn apply_failure(&self) -> Session {
        let mut next = self.clone();
        next.answer = ANSWER_ERROR.to_string();

        return next;
    }

    /// Builds the outgoing request for the current mode. In single mode the
    /// history is never sent.
    pub fn ask(&self, question: &str) -> Ask {
        let history = match self.mode {
            Mode::Single => "".to_string(),
            Mode::Conversational => self.history.to_string(),
        };

        return Ask {
            question: question.to_string(),
            mode: self.mode,
            history,
        };
    }
}
