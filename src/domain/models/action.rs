use super::Ask;

pub enum Action {
    SubmitQuestion(Ask),
}
