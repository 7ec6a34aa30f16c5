//! In-memory surfaces
//!
//! Back the terminal host and the test suite.

use std::collections::{BTreeSet, HashMap};

use super::{ChatSurface, DashboardSurface, EntryId};
use crate::chat::ChatMessage;
use crate::dashboard::ChartSlot;

/// Transcript held in a vector
#[derive(Debug, Clone)]
pub struct MemoryTranscript {
    entries: Vec<(EntryId, ChatMessage)>,
    next_id: u64,
    input: String,
    send_enabled: bool,
    /// Number of entries visible when the view was last scrolled to the end
    scrolled_through: usize,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            input: String::new(),
            send_enabled: true,
            scrolled_through: 0,
        }
    }

    /// Simulate typing into the input field
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn entries(&self) -> &[(EntryId, ChatMessage)] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter().map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the last scroll happened after the newest entry was added
    pub fn is_scrolled_to_end(&self) -> bool {
        self.scrolled_through == self.entries.len()
    }

    /// Whole transcript as escaped HTML, one bubble per line
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"chat-messages\">\n");
        for message in self.messages() {
            html.push_str("  ");
            html.push_str(&message.to_html());
            html.push('\n');
        }
        html.push_str("</div>\n");
        html
    }
}

impl Default for MemoryTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSurface for MemoryTranscript {
    fn input(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append(&mut self, message: ChatMessage) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, message));
        id
    }

    fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    fn remove_loading(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, message)| !message.is_loading());
        before - self.entries.len()
    }

    fn scroll_to_end(&mut self) {
        self.scrolled_through = self.entries.len();
    }

    fn send_enabled(&self) -> bool {
        self.send_enabled
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }
}

/// Dashboard elements held in maps
///
/// Starts with every element present; `without_*` builders remove elements
/// to mimic a page that lacks them.
#[derive(Debug, Clone)]
pub struct MemoryDashboard {
    present: BTreeSet<ChartSlot>,
    images: HashMap<ChartSlot, String>,
    has_date: bool,
    date_label: Option<String>,
    has_rate: bool,
    cancellation_rate: Option<String>,
}

impl MemoryDashboard {
    pub fn new() -> Self {
        Self {
            present: ChartSlot::ALL.into_iter().collect(),
            images: HashMap::new(),
            has_date: true,
            date_label: None,
            has_rate: true,
            cancellation_rate: None,
        }
    }

    pub fn without_chart(mut self, slot: ChartSlot) -> Self {
        self.present.remove(&slot);
        self
    }

    pub fn without_date(mut self) -> Self {
        self.has_date = false;
        self
    }

    pub fn without_cancellation_rate(mut self) -> Self {
        self.has_rate = false;
        self
    }

    pub fn image(&self, slot: ChartSlot) -> Option<&str> {
        self.images.get(&slot).map(String::as_str)
    }

    pub fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }

    pub fn cancellation_rate(&self) -> Option<&str> {
        self.cancellation_rate.as_deref()
    }
}

impl Default for MemoryDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSurface for MemoryDashboard {
    fn set_date_label(&mut self, text: &str) -> bool {
        if !self.has_date {
            return false;
        }
        self.date_label = Some(text.to_string());
        true
    }

    fn set_chart_image(&mut self, slot: ChartSlot, data_uri: &str) -> bool {
        if !self.present.contains(&slot) {
            return false;
        }
        self.images.insert(slot, data_uri.to_string());
        true
    }

    fn set_cancellation_rate(&mut self, text: &str) -> bool {
        if !self.has_rate {
            return false;
        }
        self.cancellation_rate = Some(text.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_by_id() {
        let mut transcript = MemoryTranscript::new();
        let a = transcript.append(ChatMessage::user("a"));
        let b = transcript.append(ChatMessage::loading("Thinking"));

        assert!(transcript.remove(b));
        assert!(!transcript.remove(b));
        assert_eq!(transcript.entries()[0].0, a);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_remove_loading_only_touches_placeholders() {
        let mut transcript = MemoryTranscript::new();
        transcript.append(ChatMessage::user("a"));
        transcript.append(ChatMessage::loading("Thinking"));
        transcript.append(ChatMessage::bot("b"));
        transcript.append(ChatMessage::loading("Thinking"));

        assert_eq!(transcript.remove_loading(), 2);
        let texts: Vec<_> = transcript.messages().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_scroll_tracking() {
        let mut transcript = MemoryTranscript::new();
        assert!(transcript.is_scrolled_to_end());
        transcript.append(ChatMessage::user("a"));
        assert!(!transcript.is_scrolled_to_end());
        transcript.scroll_to_end();
        assert!(transcript.is_scrolled_to_end());
    }

    #[test]
    fn test_html_export_escapes() {
        let mut transcript = MemoryTranscript::new();
        transcript.append(ChatMessage::user("<script>alert(1)</script>"));
        let html = transcript.to_html();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_missing_dashboard_elements_are_skipped() {
        let mut dashboard = MemoryDashboard::new()
            .without_chart(ChartSlot::Gauge)
            .without_date();

        assert!(!dashboard.set_chart_image(ChartSlot::Gauge, "data:x"));
        assert!(dashboard.set_chart_image(ChartSlot::Revenue, "data:y"));
        assert!(!dashboard.set_date_label("Monday"));

        assert_eq!(dashboard.image(ChartSlot::Gauge), None);
        assert_eq!(dashboard.image(ChartSlot::Revenue), Some("data:y"));
        assert_eq!(dashboard.date_label(), None);
    }
}
