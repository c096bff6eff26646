#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn HeadlessDisplay___call_serially___runs_jobs_in_order() {
    let display = HeadlessDisplay::new(true).unwrap();
    let log = Arc::new(parking_lot::Mutex::new(Vec::new()));

    for i in 0..5 {
        let log = log.clone();
        display.call_serially(Box::new(move || log.lock().push(i)));
    }
    display.drain().unwrap();

    assert_eq!(*log.lock(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn HeadlessDisplay___refresh_current_form___is_counted() {
    let display = HeadlessDisplay::new(false).unwrap();
    assert_eq!(display.refresh_count(), 0);
    display.refresh_current_form();
    display.refresh_current_form();
    assert_eq!(display.refresh_count(), 2);
}

#[test_case(true)]
#[test_case(false)]
fn HeadlessDisplay___is_simulator___reflects_construction_flag(simulator: bool) {
    assert_eq!(
        HeadlessDisplay::new(simulator).unwrap().is_simulator(),
        simulator
    );
}

#[test]
fn HeadlessDisplay___property___returns_default_when_unset() {
    let display = HeadlessDisplay::new(true).unwrap();
    assert_eq!(display.property("missing", "fallback"), "fallback");
}

#[test]
fn HeadlessDisplay___set_property___overwrites_default() {
    let display = HeadlessDisplay::new(true).unwrap();
    display.set_property("ShowInstalledMessage", "true");
    assert_eq!(display.property("ShowInstalledMessage", "false"), "true");
}
