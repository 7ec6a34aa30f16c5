//! Chat controller
//!
//! Drives one chat turn against a [`ChatSurface`] and a [`Backend`].

use super::{ChatMessage, ChatSettings, TurnEvent, TurnState};
use crate::error::ClientError;
use crate::surface::ChatSurface;
use crate::transport::Backend;

/// How a call to [`ChatController::send_message`] ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was empty or whitespace; nothing happened
    Ignored,
    /// The send control was disabled by a turn still in flight; nothing happened
    Busy,
    /// The backend reply was rendered
    Rendered { reply: String },
    /// The request failed and the error bubble was rendered
    Errored(ClientError),
}

/// Chat widget controller
///
/// Holds the UI surface and the backend capability. Hosts create one per
/// widget (or per submission when the surface is a cheap handle).
pub struct ChatController<B, S> {
    backend: B,
    surface: S,
    settings: ChatSettings,
    state: TurnState,
}

impl<B: Backend, S: ChatSurface> ChatController<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self {
            backend,
            surface,
            settings: ChatSettings::default(),
            state: TurnState::Idle,
        }
    }

    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Submit whatever is in the input field
    ///
    /// 1. echo the trimmed text as a user bubble and clear the input
    /// 2. show the loading placeholder and `POST /ask`
    /// 3. replace the placeholder with the reply, or drop every placeholder
    ///    and show the error bubble
    /// 4. scroll to the end
    ///
    /// The send control stays disabled for the whole turn, so a second
    /// submission arriving meanwhile is reported as [`TurnOutcome::Busy`].
    pub async fn send_message(&mut self) -> TurnOutcome {
        let message = self.surface.input().trim().to_string();
        if message.is_empty() {
            return TurnOutcome::Ignored;
        }

        if !self.surface.send_enabled() || self.state != TurnState::Idle {
            tracing::debug!(state = %self.state, "Send control busy, dropping submission");
            return TurnOutcome::Busy;
        }

        self.surface.set_send_enabled(false);
        let outcome = self.run_turn(message).await;
        self.surface.set_send_enabled(true);

        outcome
    }

    async fn run_turn(&mut self, message: String) -> TurnOutcome {
        self.surface.append(ChatMessage::user(message.as_str()));
        self.surface.clear_input();
        self.transition(TurnEvent::Echo);

        let placeholder = self
            .surface
            .append(ChatMessage::loading(self.settings.loading_text.as_str()));
        self.transition(TurnEvent::Send);

        tracing::debug!(
            backend = %self.backend.name(),
            chars = message.chars().count(),
            "Sending chat message"
        );

        let outcome = match self.backend.ask(&message).await {
            Ok(reply) => {
                self.surface.remove(placeholder);
                self.surface.append(ChatMessage::bot(reply.response.as_str()));
                self.transition(TurnEvent::Reply);
                TurnOutcome::Rendered {
                    reply: reply.response,
                }
            }
            Err(err) => {
                tracing::error!(
                    backend = %self.backend.name(),
                    kind = err.kind().as_str(),
                    error = %err,
                    "Chat error"
                );
                self.surface.remove_loading();
                self.surface
                    .append(ChatMessage::error(self.settings.error_message.as_str()));
                self.transition(TurnEvent::Fail);
                TurnOutcome::Errored(err)
            }
        };

        self.surface.scroll_to_end();
        self.transition(TurnEvent::Settle);

        outcome
    }

    fn transition(&mut self, event: TurnEvent) {
        match self.state.advance(event) {
            Ok(next) => {
                tracing::trace!(from = %self.state, to = %next, "Chat turn transition");
                self.state = next;
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }
}
