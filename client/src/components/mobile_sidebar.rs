//! Off-canvas navigation for narrow viewports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a toggle button on mobile. When open, the backdrop and panel are
//! portaled to `<body>` so they stack above every page layer. Closed and
//! off-mobile renders no nodes at all. Clicking the backdrop closes.

use leptos::portal::Portal;
use leptos::prelude::*;
use responsive::ViewportSnapshot;
use responsive::sidebar::{SidebarState, overlay_mounted, sidebar_visible};

use crate::state::sidebar::{close_sidebar, toggle_label};
use crate::state::viewport::use_viewport;

#[component]
pub fn MobileSidebar(#[prop(optional)] state: Option<RwSignal<SidebarState>>, children: ChildrenFn) -> impl IntoView {
    let viewport = use_viewport();
    let state = state
        .or_else(use_context::<RwSignal<SidebarState>>)
        .unwrap_or_else(|| RwSignal::new(SidebarState::default()));
    let children = StoredValue::new(children);

    let device = move || viewport.snapshot.with(ViewportSnapshot::device_class);
    let visible = move || sidebar_visible(device(), state.get());
    let overlay = move || overlay_mounted(device(), state.get());

    let on_toggle = move |_| state.update(SidebarState::toggle);
    let on_close = move |_| close_sidebar(state);

    view! {
        <Show when=visible>
            <button
                class="mobile-sidebar__toggle"
                type="button"
                aria-expanded=move || state.get().is_open().to_string()
                aria-label=move || toggle_label(state.get())
                on:click=on_toggle
            >
                <span class="mobile-sidebar__icon"></span>
            </button>
            <Show when=overlay>
                <Portal>
                    <div class="mobile-sidebar__backdrop" on:click=on_close></div>
                    <aside class="mobile-sidebar__panel" role="dialog" aria-modal="true">
                        <button
                            class="mobile-sidebar__close"
                            type="button"
                            aria-label="Close menu"
                            on:click=on_close
                        >
                            "×"
                        </button>
                        {children.with_value(|c| c())}
                    </aside>
                </Portal>
            </Show>
        </Show>
    }
}
