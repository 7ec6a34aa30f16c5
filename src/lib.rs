//! # HotelPulse
//!
//! Client for the hotel bookings analytics backend: a chat widget that asks
//! the backend questions and a dashboard loader that places pre-rendered
//! chart images and the cancellation rate.
//!
//! ## Modules
//!
//! - [`chat`]: chat turn state machine and [`ChatController`]
//! - [`dashboard`]: chart slots, analytics snapshots and [`DashboardController`]
//! - [`surface`]: UI abstraction the controllers write to
//! - [`transport`]: [`Backend`] trait with HTTP and offline implementations
//! - [`api`]: wire types of `GET /analytics` and `POST /ask`
//!
//! The controller core has no platform dependencies; the `native` feature
//! (on by default) adds the reqwest backend, configuration and logging used
//! by the `hotelpulse` terminal host.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotelpulse::{ChatController, MemoryTranscript, CannedBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut transcript = MemoryTranscript::new();
//!     transcript.set_input("Do you have rooms with breakfast?");
//!
//!     let mut chat = ChatController::new(CannedBackend::new(), transcript);
//!     chat.send_message().await;
//!
//!     for message in chat.surface().messages() {
//!         println!("{:?}: {}", message.origin, message.text);
//!     }
//! }
//! ```

pub mod api;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod html;
pub mod surface;
pub mod transport;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

pub use api::{AnalyticsPayload, AskRequest, AskResponse};

pub use chat::{
    ChatController, ChatMessage, ChatSettings, MessageStatus, Origin, TurnOutcome, TurnState,
};

pub use dashboard::{
    AnalyticsSnapshot, ChartImage, ChartSlot, DashboardController, FetchReport,
};

pub use error::{ClientError, ClientResult, FailureKind};

pub use surface::{ChatSurface, DashboardSurface, EntryId, MemoryDashboard, MemoryTranscript};

pub use transport::{Backend, CannedBackend};

#[cfg(feature = "native")]
pub use transport::HttpBackend;

#[cfg(feature = "native")]
pub use config::{BackendConfig, ChatConfig, Config, ConfigError, DefaultConfig, LoggingConfig};
