//! `ViewportHost` backed by the browser window.
//!
//! DESIGN
//! ======
//! Each `listen` call wraps the engine handler in a `Closure`, attaches it to
//! the right target (window, document, or `navigator.connection`) and keeps
//! the closure alive in a registry keyed by `ListenerId`. `unlisten` removes
//! the DOM listener and drops the closure. Dropping the host removes anything
//! still registered.
//!
//! The Network Information API is not in stable `web-sys`, so `connection`
//! and its `effectiveType` are read through `js_sys::Reflect`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use js_sys::Reflect;
use responsive::observer::{EventKind, Handler, ListenerId, ViewportHost};
use responsive::snapshot::{Connectivity, Dimensions, ScrollOffset};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{EventTarget, Window};

struct Registration {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn Fn()>,
}

impl Registration {
    fn detach(&self) {
        if self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("viewport: failed to remove {} listener", self.event);
        }
    }
}

pub struct WebViewportHost {
    window: Window,
    registry: RefCell<HashMap<ListenerId, Registration>>,
    next_id: Cell<u64>,
}

impl WebViewportHost {
    /// `None` outside a browser.
    pub fn new() -> Option<Self> {
        Some(Self { window: web_sys::window()?, registry: RefCell::new(HashMap::new()), next_id: Cell::new(0) })
    }

    fn connection(&self) -> Option<JsValue> {
        let navigator = self.window.navigator();
        let connection = Reflect::get(&navigator, &JsValue::from_str("connection")).ok()?;
        (!connection.is_undefined() && !connection.is_null()).then_some(connection)
    }

    fn target_for(&self, kind: EventKind) -> Option<EventTarget> {
        match kind {
            EventKind::VisibilityChange => self.window.document().map(Into::into),
            EventKind::ConnectionChange => self.connection()?.dyn_into::<EventTarget>().ok(),
            _ => Some(self.window.clone().into()),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn js_px(value: Result<JsValue, JsValue>) -> u32 {
    value.ok().and_then(|v| v.as_f64()).map_or(0, |px| px.max(0.0).round() as u32)
}

#[allow(clippy::cast_possible_truncation)]
fn js_offset(value: Result<f64, JsValue>) -> i32 {
    value.map_or(0, |px| px.round() as i32)
}

impl ViewportHost for WebViewportHost {
    fn dimensions(&self) -> Dimensions {
        Dimensions { width: js_px(self.window.inner_width()), height: js_px(self.window.inner_height()) }
    }

    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset { x: js_offset(self.window.scroll_x()), y: js_offset(self.window.scroll_y()) }
    }

    fn is_touch_device(&self) -> bool {
        let has_touch_events = Reflect::has(&self.window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        has_touch_events || self.window.navigator().max_touch_points() > 0
    }

    fn connectivity(&self) -> Connectivity {
        let connection_type = self
            .connection()
            .and_then(|c| Reflect::get(&c, &JsValue::from_str("effectiveType")).ok())
            .and_then(|v| v.as_string());
        Connectivity { online: self.window.navigator().on_line(), connection_type }
    }

    fn supports(&self, kind: EventKind) -> bool {
        kind != EventKind::ConnectionChange || self.connection().is_some()
    }

    fn listen(&self, kind: EventKind, handler: Handler) -> Option<ListenerId> {
        let target = self.target_for(kind)?;
        let event = kind.dom_name();
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn Fn()>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()).ok()?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.registry.borrow_mut().insert(id, Registration { target, event, closure });
        Some(id)
    }

    fn unlisten(&self, id: ListenerId) {
        let removed = self.registry.borrow_mut().remove(&id);
        if let Some(registration) = removed {
            registration.detach();
        }
    }
}

impl Drop for WebViewportHost {
    fn drop(&mut self) {
        for (_, registration) in self.registry.get_mut().drain() {
            registration.detach();
        }
    }
}
