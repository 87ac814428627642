//! Class-scoped CSS for layout primitives.
//!
//! DESIGN
//! ======
//! A primitive's [`StyleSheet`] is hashed into a stable class name
//! (`rl-<kind>-<hash>`), then rendered against that class. Equal
//! configurations share a class, so repeated primitives emit identical
//! `<style>` text. Only raw bytes feed the hasher: `Hash` impls for `str`
//! and `Vec` mix in usize-width prefixes, which would give wasm32 and
//! native test builds different class names.

#[cfg(test)]
#[path = "scoped_style_test.rs"]
mod scoped_style_test;

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use responsive::layout::{LayoutStyle, StyleSheet};
use responsive::{BreakpointTable, QueryBuilder};

/// Class name and the CSS scoped to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedStyle {
    pub class: String,
    pub css: String,
}

impl ScopedStyle {
    /// Compose `style` against `table` and scope it to a generated class.
    pub fn compose(kind: &str, style: &impl LayoutStyle, table: &BreakpointTable) -> Self {
        let sheet = style.style(&QueryBuilder::new(table));
        Self::from_sheet(kind, &sheet)
    }

    #[must_use]
    pub fn from_sheet(kind: &str, sheet: &StyleSheet) -> Self {
        let class = class_name(kind, sheet);
        let css = sheet.to_css(&format!(".{class}"));
        Self { class, css }
    }

    /// `class` followed by any caller-supplied classes.
    #[must_use]
    pub fn class_with(&self, extra: &str) -> String {
        let extra = extra.trim();
        if extra.is_empty() { self.class.clone() } else { format!("{} {extra}", self.class) }
    }
}

fn class_name(kind: &str, sheet: &StyleSheet) -> String {
    let mut hasher = DefaultHasher::new();
    hasher.write(kind.as_bytes());
    hasher.write(&[0]);
    hasher.write(sheet.to_css("").as_bytes());
    format!("rl-{kind}-{:08x}", hasher.finish() & 0xffff_ffff)
}
