use super::*;
use responsive::Breakpoint;
use responsive::layout::{ContainerStyle, GridStyle, Responsive, SidebarStyle};

const TABLE: BreakpointTable = BreakpointTable::DEFAULT;

// =============================================================
// Class names
// =============================================================

#[test]
fn equal_configs_share_a_class() {
    let a = ScopedStyle::compose("grid", &GridStyle::default(), &TABLE);
    let b = ScopedStyle::compose("grid", &GridStyle::default(), &TABLE);
    assert_eq!(a, b);
}

#[test]
fn different_configs_get_different_classes() {
    let narrow = ScopedStyle::compose("grid", &GridStyle::default(), &TABLE);
    let wide = ScopedStyle::compose(
        "grid",
        &GridStyle { columns: Responsive::uniform(1).with(Breakpoint::Md, 6), ..GridStyle::default() },
        &TABLE,
    );
    assert_ne!(narrow.class, wide.class);
}

#[test]
fn kind_is_part_of_the_class() {
    let style = ScopedStyle::compose("container", &ContainerStyle::default(), &TABLE);
    assert!(style.class.starts_with("rl-container-"));
    assert_eq!(style.class.len(), "rl-container-".len() + 8);
}

#[test]
fn class_name_is_pinned_across_targets() {
    // SipHash-1-3 over raw bytes; must not depend on pointer width.
    let sheet = StyleSheet { base: vec!["display: grid;".to_owned()], conditional: Vec::new() };
    let style = ScopedStyle::from_sheet("grid", &sheet);
    assert_eq!(style.class, "rl-grid-1683b4e5");
    assert_eq!(style.css, ".rl-grid-1683b4e5 {\n  display: grid;\n}\n");
}

#[test]
fn table_changes_the_class() {
    let custom = BreakpointTable::new(400, 700, 1000, 1300, 1900).expect("valid table");
    let a = ScopedStyle::compose("sidebar", &SidebarStyle::default(), &TABLE);
    let b = ScopedStyle::compose("sidebar", &SidebarStyle::default(), &custom);
    assert_ne!(a.class, b.class);
}

// =============================================================
// CSS
// =============================================================

#[test]
fn css_is_scoped_to_the_class() {
    let style = ScopedStyle::compose("sidebar", &SidebarStyle::default(), &TABLE);
    let selector = format!(".{} {{", style.class);
    assert!(style.css.starts_with(&selector));
    assert!(style.css.contains("@media (max-width: 767px)"));
    assert!(style.css.contains("display: none;"));
}

#[test]
fn class_with_appends_extra_classes() {
    let style = ScopedStyle { class: "rl-grid-0".to_owned(), css: String::new() };
    assert_eq!(style.class_with(""), "rl-grid-0");
    assert_eq!(style.class_with("  files "), "rl-grid-0 files");
}
