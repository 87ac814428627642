//! Layout primitives.
//!
//! Each primitive composes its style configuration into a scoped class and
//! renders a `<style>` element next to its markup. Media queries do the
//! breakpoint work, so these components never re-render on resize.
//! `DeviceOnly` is the exception: it mounts children only while the live
//! device class matches.

use leptos::prelude::*;
use responsive::classify::DeviceClass;
use responsive::layout::{
    ContainerStyle, FlexStyle, GridStyle, ImageStyle, LayoutStyle, SidebarStyle, SpacerStyle, TextStyle,
};

use crate::state::viewport::use_viewport;
use crate::util::scoped_style::ScopedStyle;

fn scoped(kind: &str, style: &impl LayoutStyle) -> ScopedStyle {
    ScopedStyle::compose(kind, style, &use_viewport().table)
}

/// Centered, width-capped page column.
#[component]
pub fn Container(
    #[prop(optional)] config: Option<ContainerStyle>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = scoped("container", &config.unwrap_or_default());
    let class = style.class_with(&class);
    view! {
        <style>{style.css}</style>
        <div class=class>{children()}</div>
    }
}

/// CSS grid with per-breakpoint column counts.
#[component]
pub fn Grid(
    #[prop(optional)] config: Option<GridStyle>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = scoped("grid", &config.unwrap_or_default());
    let class = style.class_with(&class);
    view! {
        <style>{style.css}</style>
        <div class=class>{children()}</div>
    }
}

/// Flex row or column.
#[component]
pub fn Flex(
    #[prop(optional)] config: Option<FlexStyle>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = scoped("flex", &config.unwrap_or_default());
    let class = style.class_with(&class);
    view! {
        <style>{style.css}</style>
        <div class=class>{children()}</div>
    }
}

/// Paragraph with responsive font size and alignment.
#[component]
pub fn Text(
    #[prop(optional)] config: Option<TextStyle>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = scoped("text", &config.unwrap_or_default());
    let class = style.class_with(&class);
    view! {
        <style>{style.css}</style>
        <p class=class>{children()}</p>
    }
}

#[component]
pub fn Image(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] config: Option<ImageStyle>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let style = scoped("image", &config.unwrap_or_default());
    let class = style.class_with(&class);
    view! {
        <style>{style.css}</style>
        <img class=class src=src alt=alt loading="lazy" />
    }
}

/// Fixed gap along one axis.
#[component]
pub fn Spacer(#[prop(optional)] config: Option<SpacerStyle>) -> impl IntoView {
    let style = scoped("spacer", &config.unwrap_or_default());
    view! {
        <style>{style.css}</style>
        <div class=style.class aria-hidden="true"></div>
    }
}

/// Docked sidebar column; hidden below the mobile threshold by CSS.
#[component]
pub fn Sidebar(
    #[prop(optional)] config: Option<SidebarStyle>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = scoped("sidebar", &config.unwrap_or_default());
    let class = style.class_with(&class);
    view! {
        <style>{style.css}</style>
        <aside class=class>{children()}</aside>
    }
}

/// Mount `children` only while the viewport is `device`.
#[component]
pub fn DeviceOnly(device: DeviceClass, children: ChildrenFn) -> impl IntoView {
    let viewport = use_viewport();
    view! { <Show when=move || viewport.is(device)>{children()}</Show> }
}
