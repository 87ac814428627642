//! Browser glue and small shared helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `web_host` and `timers` implement the engine's host traits on top of
//! `web-sys` and `gloo-timers`. `scoped_style` turns a primitive's style sheet
//! into a class name plus CSS. `storage` wraps `localStorage` token access.

pub mod scoped_style;
pub mod storage;
#[cfg(feature = "csr")]
pub mod timers;
#[cfg(feature = "csr")]
pub mod web_host;
