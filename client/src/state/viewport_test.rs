use super::*;
use responsive::Breakpoint;

#[test]
fn initial_snapshot_is_desktop_default() {
    let snapshot = initial_snapshot(&BreakpointTable::default());
    assert_eq!(snapshot.width(), 1280);
    assert_eq!(snapshot.height(), 800);
    assert_eq!(snapshot.device_class(), DeviceClass::Desktop);
    assert_eq!(snapshot.screen_size(), Breakpoint::Xl);
    assert!(snapshot.is_online());
    assert!(!snapshot.is_touch_device());
}

#[test]
fn initial_snapshot_respects_custom_table() {
    let table = BreakpointTable::new(320, 600, 1400, 1600, 2000).expect("valid table");
    let snapshot = initial_snapshot(&table);
    assert_eq!(snapshot.device_class(), DeviceClass::Tablet);
    assert_eq!(snapshot.screen_size(), Breakpoint::Md);
}
