//! Chat Widget Component
//!
//! Transcript, input and send button. Message text is always rendered as a
//! text node, never as markup.

use leptos::*;

use hotelpulse::{ChatController, ChatMessage, TurnOutcome};

use crate::api;
use crate::state::ChatState;

/// Chat widget component
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = use_context::<ChatState>().expect("ChatState not found");
    let messages_ref = create_node_ref::<html::Div>();

    // Scroll the transcript whenever a turn finishes
    create_effect(move |_| {
        chat.scroll_tick.get();
        if let Some(messages) = messages_ref.get() {
            messages.set_scroll_top(messages.scroll_height());
        }
    });

    let submit = move || {
        spawn_local(async move {
            let mut controller = ChatController::new(api::backend(), chat);
            if let TurnOutcome::Errored(e) = controller.send_message().await {
                web_sys::console::error_1(&format!("Chat error: {}", e).into());
            }
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 flex flex-col h-96">
            <h2 class="text-xl font-semibold mb-4">"Booking Assistant"</h2>

            <div node_ref=messages_ref class="chat-messages flex-1 overflow-y-auto space-y-2">
                <For
                    each=move || chat.entries.get()
                    key=|(id, _)| *id
                    children=move |(_, message)| view! { <ChatBubble message=message /> }
                />
            </div>

            <div class="flex space-x-2 mt-4">
                <input
                    id="message-input"
                    type="text"
                    placeholder="Ask about bookings..."
                    prop:value=move || chat.input.get()
                    on:input=move |ev| chat.input.set(event_target_value(&ev))
                    on:keypress=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            submit();
                        }
                    }
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    class="send-btn px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                    disabled=move || !chat.send_enabled.get()
                    on:click=move |_| submit()
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// A single transcript bubble
#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("{} visible", message.css_class());
    let text_class = if message.is_loading() { "loading-dots" } else { "" };

    view! {
        <div class=class>
            <p class=text_class>{message.text}</p>
        </div>
    }
}
