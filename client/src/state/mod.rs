//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `viewport` mirrors the live `ViewportObserver` snapshot into a signal;
//! `sidebar` holds the mobile navigation state machine.

pub mod sidebar;
pub mod viewport;
