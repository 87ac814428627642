//! Root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs the breakpoint table and the shared viewport state before
//! any layout primitive renders, so every descendant reads one snapshot.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use responsive::layout::{FlexStyle, GridStyle, Responsive};
use responsive::{Breakpoint, BreakpointTable, DeviceClass};

use crate::components::gesture_area::GestureArea;
use crate::components::layout::{Container, DeviceOnly, Flex, Grid, Sidebar, Text};
use crate::components::mobile_sidebar::MobileSidebar;
use crate::state::sidebar::{close_sidebar, provide_sidebar};
use crate::state::viewport::{provide_viewport, use_viewport};

/// Application root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_viewport(BreakpointTable::default());
    let sidebar = provide_sidebar();
    let files_grid = GridStyle {
        columns: Responsive::uniform(1).with(Breakpoint::Sm, 2).with(Breakpoint::Lg, 4),
        ..GridStyle::default()
    };
    let open_menu = Callback::new(move |()| {
        sidebar.update(|s| {
            s.open();
        });
    });
    let close_menu = Callback::new(move |()| close_sidebar(sidebar));

    view! {
        <Title text="Files" />
        <MobileSidebar state=sidebar>
            <nav class="nav-links">
                <a href="/">"Files"</a>
                <a href="/admin">"Admin"</a>
            </nav>
        </MobileSidebar>
        <Flex>
            <Sidebar>
                <nav class="nav-links">
                    <a href="/">"Files"</a>
                    <a href="/admin">"Admin"</a>
                </nav>
            </Sidebar>
            <GestureArea on_swipe_right=open_menu on_swipe_left=close_menu>
                <Container>
                    <Flex config=FlexStyle::stack_on_mobile(12)>
                        <Text>"Files"</Text>
                        <ViewportBadge />
                    </Flex>
                    <DeviceOnly device=DeviceClass::Mobile>
                        <p class="hint">"Swipe right for the menu"</p>
                    </DeviceOnly>
                    <Grid config=files_grid>
                        <div class="file-list__placeholder">"No files yet"</div>
                    </Grid>
                </Container>
            </GestureArea>
        </Flex>
    }
}

/// Small readout of the current device class and width.
#[component]
fn ViewportBadge() -> impl IntoView {
    let viewport = use_viewport();
    let label = move || {
        let snapshot = viewport.snapshot.get();
        format!("{} · {}px", snapshot.device_class().name(), snapshot.width())
    };
    view! { <span class="viewport-badge">{label}</span> }
}
