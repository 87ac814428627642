//! Touch gesture surface.
//!
//! Wraps children in a `<div>` that turns pointer and touch events into
//! long-press, swipe, and double-tap callbacks using the engine's gesture
//! helpers. The long-press timer runs on `gloo-timers` and is cancelled when
//! the component unmounts, so a pending press never fires afterwards.

use leptos::prelude::*;
use responsive::gesture::{DoubleTap, SWIPE_THRESHOLD_PX, SwipeDetector, SwipeHandlers};

#[cfg(feature = "csr")]
use responsive::gesture::{LONG_PRESS_DELAY_MS, LongPress};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use crate::util::timers::WebTimers;

#[cfg(feature = "csr")]
fn touch_point(ev: &leptos::ev::TouchEvent, changed: bool) -> Option<(f64, f64)> {
    let list = if changed { ev.changed_touches() } else { ev.touches() };
    let touch = list.get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

#[cfg(not(feature = "csr"))]
fn touch_point(_ev: &leptos::ev::TouchEvent, _changed: bool) -> Option<(f64, f64)> {
    None
}

fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

fn boxed(callback: Option<Callback<()>>) -> Option<Box<dyn Fn()>> {
    callback.map(|cb| Box::new(move || cb.run(())) as Box<dyn Fn()>)
}

#[component]
pub fn GestureArea(
    #[prop(optional)] long_press_ms: Option<u32>,
    #[prop(optional)] on_long_press: Option<Callback<()>>,
    #[prop(optional)] swipe_threshold: Option<f64>,
    #[prop(optional)] on_swipe_left: Option<Callback<()>>,
    #[prop(optional)] on_swipe_right: Option<Callback<()>>,
    #[prop(optional)] on_swipe_up: Option<Callback<()>>,
    #[prop(optional)] on_swipe_down: Option<Callback<()>>,
    #[prop(optional)] on_double_tap: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let swipe = StoredValue::new(SwipeDetector::new(swipe_threshold.unwrap_or(SWIPE_THRESHOLD_PX)));
    let double_tap = StoredValue::new(DoubleTap::default());
    let handlers = StoredValue::new_local(SwipeHandlers {
        on_swipe_left: boxed(on_swipe_left),
        on_swipe_right: boxed(on_swipe_right),
        on_swipe_up: boxed(on_swipe_up),
        on_swipe_down: boxed(on_swipe_down),
    });

    #[cfg(feature = "csr")]
    let long_press = {
        let timers = Rc::new(WebTimers::default());
        let press = StoredValue::new_local(LongPress::new(timers, long_press_ms.unwrap_or(LONG_PRESS_DELAY_MS)));
        on_cleanup(move || press.update_value(LongPress::cancel));
        press
    };
    #[cfg(not(feature = "csr"))]
    let _ = (long_press_ms, on_long_press);

    #[cfg(feature = "csr")]
    let press_start = move || {
        if let Some(callback) = on_long_press {
            long_press.update_value(|p| p.press(move || callback.run(())));
        }
    };
    #[cfg(feature = "csr")]
    let press_end = move || {
        long_press.update_value(|p| {
            p.release();
        });
    };
    #[cfg(feature = "csr")]
    let press_cancel = move || long_press.update_value(LongPress::cancel);

    #[cfg(not(feature = "csr"))]
    let (press_start, press_end, press_cancel) = (|| {}, || {}, || {});

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some((x, y)) = touch_point(&ev, false) {
            swipe.update_value(|s| s.start(x, y));
        }
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        let direction = touch_point(&ev, true).and_then(|(x, y)| swipe.try_update_value(|s| s.end(x, y)).flatten());
        if let Some(direction) = direction {
            handlers.with_value(|h| h.dispatch(direction));
            return;
        }
        if let Some(callback) = on_double_tap {
            if double_tap.try_update_value(|d| d.tap(now_ms())).unwrap_or(false) {
                callback.run(());
            }
        }
    };
    let on_touch_cancel = move |_| swipe.update_value(SwipeDetector::reset);

    view! {
        <div
            class=format!("gesture-area {class}")
            on:pointerdown=move |_| press_start()
            on:pointerup=move |_| press_end()
            on:pointerleave=move |_| press_cancel()
            on:pointercancel=move |_| press_cancel()
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            {children()}
        </div>
    }
}
