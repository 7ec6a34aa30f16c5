//! HotelPulse Dashboard
//!
//! Hotel bookings dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Six pre-rendered analytics charts and the cancellation rate
//! - Chat widget backed by the analytics server's `/ask` endpoint
//! - Offline mode with a canned chat reply
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Chat turns and analytics refreshes run through the
//! `hotelpulse` controllers; this crate only supplies signal-backed surfaces
//! and a `gloo-net` backend.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
