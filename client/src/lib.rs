//! Leptos bindings for the responsive layout engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `responsive` crate owns classification, media queries and style
//! composition. This crate connects it to the browser: a `ViewportHost`
//! backed by `web-sys` listeners, reactive viewport state, layout primitives
//! that inject their generated CSS, the mobile sidebar, gesture areas, and
//! the authenticated file/admin fetch helpers.
//!
//! Everything that touches the DOM sits behind `#[cfg(feature = "csr")]`;
//! native builds (tests) render against the default desktop snapshot.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
