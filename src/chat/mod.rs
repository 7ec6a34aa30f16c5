//! Chat widget
//!
//! A chat turn takes the typed text, echoes it, shows a loading placeholder
//! while `/ask` is in flight and then renders the reply or one fixed error
//! bubble. See [`ChatController`] for the exact sequence.

mod controller;
mod turn;

pub use controller::{ChatController, TurnOutcome};
pub use turn::{InvalidTransition, TurnEvent, TurnState};

use serde::{Deserialize, Serialize};

use crate::html::escape_text;

/// Text of the error bubble shown when a request fails
pub const ERROR_REPLY: &str = "Sorry, I'm having trouble responding. Please try again.";

/// Text of the loading placeholder
pub const LOADING_TEXT: &str = "Thinking";

/// Who a transcript entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Bot,
}

/// Display status of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Normal,
    Loading,
    Error,
}

/// One transcript entry
///
/// `text` is always the literal text; renderers must treat it as text
/// content, never as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub origin: Origin,
    pub status: MessageStatus,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::User,
            status: MessageStatus::Normal,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Bot,
            status: MessageStatus::Normal,
        }
    }

    pub fn loading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Bot,
            status: MessageStatus::Loading,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Bot,
            status: MessageStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == MessageStatus::Loading
    }

    /// CSS classes of the bubble, e.g. `"message bot loading"`
    pub fn css_class(&self) -> &'static str {
        match (self.origin, self.status) {
            (Origin::User, _) => "message user",
            (Origin::Bot, MessageStatus::Normal) => "message bot",
            (Origin::Bot, MessageStatus::Loading) => "message bot loading",
            (Origin::Bot, MessageStatus::Error) => "message bot error",
        }
    }

    /// Render the bubble as an HTML fragment with the text escaped
    pub fn to_html(&self) -> String {
        let paragraph = if self.is_loading() {
            r#"<p class="loading-dots">"#
        } else {
            "<p>"
        };
        format!(
            r#"<div class="{}">{}{}</p></div>"#,
            self.css_class(),
            paragraph,
            escape_text(&self.text)
        )
    }
}

/// Fixed texts used by the chat controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub error_message: String,
    pub loading_text: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            error_message: ERROR_REPLY.to_string(),
            loading_text: LOADING_TEXT.to_string(),
        }
    }
}
