//! Chat turn state machine
//!
//! ```text
//! Idle --Echo--> UserEchoed --Send--> AwaitingResponse --Reply--> Rendered --Settle--> Idle
//!                                                     \--Fail---> Errored  --Settle--> Idle
//! ```

use std::fmt;

/// Where a chat turn currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    /// The user bubble is in the transcript and the input is cleared
    UserEchoed,
    /// The loading placeholder is shown and `/ask` is in flight
    AwaitingResponse,
    /// The bot reply replaced the placeholder
    Rendered,
    /// The error bubble replaced the placeholder
    Errored,
}

/// Inputs that move a turn forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Echo,
    Send,
    Reply,
    Fail,
    Settle,
}

/// Attempted an event that the current state does not accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid chat turn transition: {event:?} while {from}")]
pub struct InvalidTransition {
    pub from: TurnState,
    pub event: TurnEvent,
}

impl TurnState {
    /// Apply an event, returning the next state
    pub fn advance(self, event: TurnEvent) -> Result<TurnState, InvalidTransition> {
        use TurnEvent::*;
        use TurnState::*;

        match (self, event) {
            (Idle, Echo) => Ok(UserEchoed),
            (UserEchoed, Send) => Ok(AwaitingResponse),
            (AwaitingResponse, Reply) => Ok(Rendered),
            (AwaitingResponse, Fail) => Ok(Errored),
            (Rendered, Settle) | (Errored, Settle) => Ok(Idle),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::Rendered | TurnState::Errored)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TurnState::Idle => "idle",
            TurnState::UserEchoed => "user_echoed",
            TurnState::AwaitingResponse => "awaiting_response",
            TurnState::Rendered => "rendered",
            TurnState::Errored => "errored",
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
