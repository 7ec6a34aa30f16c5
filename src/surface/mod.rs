//! UI surfaces
//!
//! The controllers never touch a DOM directly. A host hands them a surface
//! that knows how to show transcript entries, chart images and labels: Leptos
//! signals in the browser, stdout in the terminal, plain vectors in tests.

mod memory;

pub use memory::{MemoryDashboard, MemoryTranscript};

use crate::chat::ChatMessage;
use crate::dashboard::ChartSlot;

/// Handle to one transcript entry, issued by the surface on append
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The chat widget: transcript, text input and send control
pub trait ChatSurface {
    /// Current contents of the text input
    fn input(&self) -> String;

    fn clear_input(&mut self);

    /// Append an entry at the end of the transcript
    fn append(&mut self, message: ChatMessage) -> EntryId;

    /// Remove one entry; returns false if it was already gone
    fn remove(&mut self, id: EntryId) -> bool;

    /// Remove every loading placeholder, returning how many were removed
    fn remove_loading(&mut self) -> usize;

    fn scroll_to_end(&mut self);

    fn send_enabled(&self) -> bool;

    fn set_send_enabled(&mut self, enabled: bool);
}

/// The dashboard: date label, chart images and cancellation-rate label
///
/// Each setter returns false when the target element does not exist; that
/// is not an error.
pub trait DashboardSurface {
    fn set_date_label(&mut self, text: &str) -> bool;

    fn set_chart_image(&mut self, slot: ChartSlot, data_uri: &str) -> bool;

    fn set_cancellation_rate(&mut self, text: &str) -> bool;
}

impl<S: ChatSurface + ?Sized> ChatSurface for &mut S {
    fn input(&self) -> String {
        (**self).input()
    }

    fn clear_input(&mut self) {
        (**self).clear_input()
    }

    fn append(&mut self, message: ChatMessage) -> EntryId {
        (**self).append(message)
    }

    fn remove(&mut self, id: EntryId) -> bool {
        (**self).remove(id)
    }

    fn remove_loading(&mut self) -> usize {
        (**self).remove_loading()
    }

    fn scroll_to_end(&mut self) {
        (**self).scroll_to_end()
    }

    fn send_enabled(&self) -> bool {
        (**self).send_enabled()
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        (**self).set_send_enabled(enabled)
    }
}

impl<S: DashboardSurface + ?Sized> DashboardSurface for &mut S {
    fn set_date_label(&mut self, text: &str) -> bool {
        (**self).set_date_label(text)
    }

    fn set_chart_image(&mut self, slot: ChartSlot, data_uri: &str) -> bool {
        (**self).set_chart_image(slot, data_uri)
    }

    fn set_cancellation_rate(&mut self, text: &str) -> bool {
        (**self).set_cancellation_rate(text)
    }
}
