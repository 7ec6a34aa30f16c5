//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::collections::HashMap;

use hotelpulse::{ChartSlot, ChatMessage, ChatSurface, DashboardSurface, EntryId};

/// Dashboard header, charts and cancellation rate
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Long-form date in the header
    pub date_label: RwSignal<Option<String>>,
    /// `data:` URIs keyed by chart slot
    pub charts: RwSignal<HashMap<ChartSlot, String>>,
    /// Text of the gauge label
    pub cancellation_rate: RwSignal<Option<String>>,
    /// Number of analytics fetches in flight
    pub refreshing: RwSignal<u32>,
}

/// Chat transcript, input field and send button
#[derive(Clone, Copy)]
pub struct ChatState {
    pub entries: RwSignal<Vec<(EntryId, ChatMessage)>>,
    pub input: RwSignal<String>,
    pub send_enabled: RwSignal<bool>,
    /// Bumped whenever the transcript should scroll to its end
    pub scroll_tick: RwSignal<u64>,
    next_id: StoredValue<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            date_label: create_rw_signal(None),
            charts: create_rw_signal(HashMap::new()),
            cancellation_rate: create_rw_signal(None),
            refreshing: create_rw_signal(0),
        }
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            input: create_rw_signal(String::new()),
            send_enabled: create_rw_signal(true),
            scroll_tick: create_rw_signal(0),
            next_id: store_value(1),
        }
    }
}

/// Provide dashboard and chat state to the component tree
pub fn provide_state() {
    provide_context(DashboardState::new());
    provide_context(ChatState::new());
}

// Every element is always rendered, so no setter ever reports a missing target.
impl DashboardSurface for DashboardState {
    fn set_date_label(&mut self, text: &str) -> bool {
        self.date_label.set(Some(text.to_string()));
        true
    }

    fn set_chart_image(&mut self, slot: ChartSlot, data_uri: &str) -> bool {
        self.charts.update(|charts| {
            charts.insert(slot, data_uri.to_string());
        });
        true
    }

    fn set_cancellation_rate(&mut self, text: &str) -> bool {
        self.cancellation_rate.set(Some(text.to_string()));
        true
    }
}

impl ChatSurface for ChatState {
    fn input(&self) -> String {
        self.input.get_untracked()
    }

    fn clear_input(&mut self) {
        self.input.set(String::new());
    }

    fn append(&mut self, message: ChatMessage) -> EntryId {
        let id = EntryId::new(self.next_id.get_value());
        self.next_id.update_value(|n| *n += 1);
        self.entries.update(|entries| entries.push((id, message)));
        id
    }

    fn remove(&mut self, id: EntryId) -> bool {
        let mut removed = false;
        self.entries.update(|entries| {
            let before = entries.len();
            entries.retain(|(entry, _)| *entry != id);
            removed = entries.len() != before;
        });
        removed
    }

    fn remove_loading(&mut self) -> usize {
        let mut removed = 0;
        self.entries.update(|entries| {
            let before = entries.len();
            entries.retain(|(_, message)| !message.is_loading());
            removed = before - entries.len();
        });
        removed
    }

    fn scroll_to_end(&mut self) {
        self.scroll_tick.update(|tick| *tick += 1);
    }

    fn send_enabled(&self) -> bool {
        self.send_enabled.get_untracked()
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled.set(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_state_surface() {
        let runtime = create_runtime();

        let mut chat = ChatState::new();
        let user = chat.append(ChatMessage::user("<img src=x>"));
        let loading = chat.append(ChatMessage::loading("Thinking"));
        assert_ne!(user, loading);

        assert!(chat.remove(loading));
        assert!(!chat.remove(loading));
        assert_eq!(chat.entries.get_untracked().len(), 1);
        assert_eq!(chat.entries.get_untracked()[0].1.text, "<img src=x>");

        chat.set_send_enabled(false);
        assert!(!chat.send_enabled());

        runtime.dispose();
    }

    #[test]
    fn test_dashboard_state_surface() {
        let runtime = create_runtime();

        let mut dashboard = DashboardState::new();
        assert!(dashboard.set_chart_image(ChartSlot::Gauge, "data:image/png;base64,AAAA"));
        assert!(dashboard.set_cancellation_rate("37.0%"));

        assert_eq!(
            dashboard.charts.get_untracked().get(&ChartSlot::Gauge).map(String::as_str),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(dashboard.cancellation_rate.get_untracked().as_deref(), Some("37.0%"));

        runtime.dispose();
    }
}
