//! Viewport signal and its browser observer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_viewport` is called once near the root. It publishes a
//! [`ViewportContext`] holding the breakpoint table and a signal. In the
//! browser it mounts a `ViewportObserver` on the real window right away, so
//! the first render already sees the sampled snapshot, and forwards every
//! change into the signal. The observer lives in local storage owned by the
//! calling component; `on_cleanup` removes every window/document listener.
//! Native builds (tests) keep the 1280x800 default snapshot.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;
use responsive::classify::DeviceClass;
use responsive::{BreakpointTable, QueryBuilder, ViewportSnapshot};

/// Context value published by [`provide_viewport`].
#[derive(Clone, Copy)]
pub struct ViewportContext {
    pub snapshot: RwSignal<ViewportSnapshot>,
    pub table: BreakpointTable,
}

impl ViewportContext {
    #[must_use]
    pub fn queries(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(&self.table)
    }

    /// Reactive: whether the current device class is `device`.
    pub fn is(&self, device: DeviceClass) -> bool {
        self.snapshot.with(|s| s.device_class() == device)
    }
}

/// Snapshot every consumer sees before the browser is sampled.
#[must_use]
pub fn initial_snapshot(table: &BreakpointTable) -> ViewportSnapshot {
    ViewportSnapshot::server_default(table)
}

/// Publish viewport state for the subtree and start observing the browser.
pub fn provide_viewport(table: BreakpointTable) -> ViewportContext {
    let ctx = ViewportContext { snapshot: RwSignal::new(initial_snapshot(&table)), table };
    provide_context(ctx);

    #[cfg(feature = "csr")]
    mount_observer(ctx);

    ctx
}

/// Read the nearest [`ViewportContext`].
///
/// Falls back to a detached default-table context when no provider exists,
/// so isolated components still render against the default snapshot.
pub fn use_viewport() -> ViewportContext {
    use_context::<ViewportContext>().unwrap_or_else(|| {
        leptos::logging::warn!("use_viewport called outside provide_viewport");
        let table = BreakpointTable::default();
        ViewportContext { snapshot: RwSignal::new(initial_snapshot(&table)), table }
    })
}

#[cfg(feature = "csr")]
fn mount_observer(ctx: ViewportContext) {
    use std::rc::Rc;

    use responsive::observer::{ViewportHost, ViewportObserver};

    use crate::util::web_host::WebViewportHost;

    let Some(host) = WebViewportHost::new() else {
        leptos::logging::warn!("viewport: no window, keeping default snapshot");
        return;
    };
    let host: Rc<dyn ViewportHost> = Rc::new(host);
    let observer = ViewportObserver::mount(host, ctx.table);
    ctx.snapshot.set(observer.snapshot());

    let signal = ctx.snapshot;
    let subscription = observer.subscribe(move |snapshot, _change| signal.set(snapshot.clone()));
    let mounted = StoredValue::new_local(Some((observer, subscription)));

    on_cleanup(move || {
        mounted.update_value(|slot| {
            if let Some((observer, subscription)) = slot.take() {
                drop(subscription);
                observer.unmount();
            }
        });
    });
}
