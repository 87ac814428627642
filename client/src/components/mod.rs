//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout primitives read the breakpoint table from the viewport context and
//! inject their own scoped CSS. `mobile_sidebar` and `gesture_area` consume
//! the live snapshot and the gesture helpers respectively.

pub mod gesture_area;
pub mod layout;
pub mod mobile_sidebar;
