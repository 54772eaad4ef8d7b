use tui_textarea::Input;

use super::Outcome;

pub enum Event {
    ServiceOutcome(Outcome),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLT(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
