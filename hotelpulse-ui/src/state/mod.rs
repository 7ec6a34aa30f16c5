//! State Management
//!
//! Reactive dashboard and chat state. Both types double as the surfaces the
//! `hotelpulse` controllers write to.

pub mod global;

pub use global::{provide_state, ChatState, DashboardState};
