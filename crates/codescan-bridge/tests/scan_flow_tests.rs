//! End-to-end scan flow tests
//!
//! These tests drive the coordinator through the public API only, with
//! scripted stand-ins for the vendor picker and the picker activity, and
//! verify the one-outcome-per-scan contract across both platform paths.

use codescan_bridge::{
    ActivityLauncher, ActivityResult, CancelStatus, CodeScanner, ERR_SCAN_IN_PROGRESS,
    NativePicker, OutcomeHandler, OverlayConfig, PickerDelegate, PickerFactory, PickerIntent,
    PlatformServices, RecognizedCode, REQUEST_BARCODE_PICKER_ACTIVITY, ScanError, ScanOutcome,
    ScanResult, ScanSession, ScanSettings, SymbologySet,
};
use codescan_core::set_license_key;
use codescan_runtime::HeadlessDisplay;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Scripted vendor picker. `apply_settings` completes inline; the
/// present-animation completion is held until the test fires it.
struct FakePicker {
    delegate: Mutex<Option<PickerDelegate>>,
    pending_present: Mutex<Option<Box<dyn FnOnce() + Send>>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakePicker {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            delegate: Mutex::new(None),
            pending_present: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn finish_present(&self) {
        if let Some(completion) = self.pending_present.lock().take() {
            completion();
        }
    }

    fn recognize(&self, data: &str, symbology_name: &str) {
        let session = OkSession {
            code: RecognizedCode::new(data, symbology_name),
        };
        if let Some(delegate) = self.delegate.lock().as_ref() {
            (delegate.on_recognized)(&session);
        }
    }

    fn cancel(&self) {
        if let Some(delegate) = self.delegate.lock().as_ref() {
            (delegate.on_cancel)(CancelStatus(0));
        }
    }

    fn saw_call(&self, name: &str) -> bool {
        self.calls.lock().iter().any(|call| *call == name)
    }
}

impl NativePicker for FakePicker {
    fn apply_settings(&self, _settings: &ScanSettings, completion: Box<dyn FnOnce() + Send>) {
        self.calls.lock().push("apply_settings");
        completion();
    }

    fn start_scanning(&self) {
        self.calls.lock().push("start_scanning");
    }

    fn stop_scanning(&self) {
        self.calls.lock().push("stop_scanning");
    }

    fn present(&self, _animated: bool, completion: Box<dyn FnOnce() + Send>) {
        self.calls.lock().push("present");
        *self.pending_present.lock() = Some(completion);
    }

    fn dismiss(&self, _animated: bool) {
        self.calls.lock().push("dismiss");
    }

    fn configure_overlay(&self, _overlay: &OverlayConfig) {
        self.calls.lock().push("configure_overlay");
    }

    fn set_delegate(&self, delegate: PickerDelegate) {
        *self.delegate.lock() = Some(delegate);
    }

    fn release(&self) {
        self.calls.lock().push("release");
    }
}

struct OkSession {
    code: RecognizedCode,
}

impl ScanSession for OkSession {
    fn newly_recognized(&self) -> ScanResult<RecognizedCode> {
        Ok(self.code.clone())
    }
}

struct FakeFactory {
    picker: Arc<FakePicker>,
}

impl PickerFactory for FakeFactory {
    fn is_supported(&self) -> bool {
        true
    }

    fn create_picker(
        &self,
        _license_key: &str,
        _settings: &ScanSettings,
    ) -> ScanResult<Arc<dyn NativePicker>> {
        Ok(self.picker.clone())
    }
}

type ResultListener = Box<dyn Fn(ActivityResult) + Send + Sync>;

struct FakeLauncher {
    launched: Mutex<Vec<PickerIntent>>,
    app_keys: Mutex<Vec<String>>,
    listener: Mutex<Option<ResultListener>>,
}

impl FakeLauncher {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            launched: Mutex::new(Vec::new()),
            app_keys: Mutex::new(Vec::new()),
            listener: Mutex::new(None),
        })
    }

    fn deliver(&self, result: ActivityResult) {
        if let Some(listener) = self.listener.lock().as_ref() {
            listener(result);
        }
    }
}

impl ActivityLauncher for FakeLauncher {
    fn is_supported(&self) -> bool {
        true
    }

    fn set_app_key(&self, license_key: &str) {
        self.app_keys.lock().push(license_key.to_string());
    }

    fn start_for_result(
        &self,
        intent: PickerIntent,
        _request_code: i32,
        listener: Box<dyn Fn(ActivityResult) + Send + Sync>,
    ) {
        self.launched.lock().push(intent);
        *self.listener.lock() = Some(listener);
    }
}

struct IosHarness {
    scanner: Arc<CodeScanner>,
    picker: Arc<FakePicker>,
    display: Arc<HeadlessDisplay>,
}

fn ios_harness() -> IosHarness {
    let display = HeadlessDisplay::new(false).expect("display queue");
    let picker = FakePicker::new();
    let scanner = CodeScanner::new(PlatformServices {
        display: display.clone(),
        picker_factory: Some(Arc::new(FakeFactory {
            picker: picker.clone(),
        })),
        activity_launcher: None,
        installer: None,
    });
    IosHarness {
        scanner,
        picker,
        display,
    }
}

fn channel_handler() -> (OutcomeHandler, mpsc::Receiver<ScanOutcome>) {
    let (tx, rx) = mpsc::channel();
    let handler: OutcomeHandler = Box::new(move |outcome| {
        let _ = tx.send(outcome);
    });
    (handler, rx)
}

/// Poll until the picker records the named lifecycle call. The bridge runs
/// native calls on its own dispatch context, so arrival is asynchronous.
fn wait_for_call(picker: &FakePicker, name: &str) {
    let deadline = Instant::now() + RECV_TIMEOUT;
    while !picker.saw_call(name) {
        assert!(
            Instant::now() < deadline,
            "timed out waiting for picker call {name:?}"
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_ios_scan_delivers_recognized_code() {
    let harness = ios_harness();
    let (handler, rx) = channel_handler();

    harness.scanner.scan(&SymbologySet::qr_only(), handler);
    wait_for_call(&harness.picker, "present");
    harness.picker.finish_present();
    harness.picker.recognize("hello", "QR");

    assert_eq!(
        rx.recv_timeout(RECV_TIMEOUT).unwrap(),
        ScanOutcome::completed("hello", "QR")
    );
    assert_eq!(harness.display.refresh_count(), 1);
}

#[test]
fn test_ios_recognition_during_presentation_is_buffered() {
    let harness = ios_harness();
    let (handler, rx) = channel_handler();

    harness.scanner.scan(&SymbologySet::qr_only(), handler);
    wait_for_call(&harness.picker, "present");

    // Recognize while the presentation animation is still running.
    harness.picker.recognize("early", "EAN13");
    assert!(
        rx.recv_timeout(Duration::from_millis(300)).is_err(),
        "outcome must not be delivered before the animation completes"
    );

    harness.picker.finish_present();
    assert_eq!(
        rx.recv_timeout(RECV_TIMEOUT).unwrap(),
        ScanOutcome::completed("early", "EAN13")
    );
}

#[test]
fn test_ios_cancel_dismisses_and_allows_next_scan() {
    let harness = ios_harness();
    let (handler, rx) = channel_handler();

    harness.scanner.scan(&SymbologySet::qr_only(), handler);
    wait_for_call(&harness.picker, "present");
    harness.picker.finish_present();
    harness.picker.cancel();

    assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), ScanOutcome::Canceled);
    wait_for_call(&harness.picker, "dismiss");

    // The guard is clear again.
    let (handler2, rx2) = channel_handler();
    harness.scanner.scan(&SymbologySet::qr_only(), handler2);
    wait_for_call(&harness.picker, "present");
    harness.picker.finish_present();
    harness.picker.recognize("second", "QR");
    assert_eq!(
        rx2.recv_timeout(RECV_TIMEOUT).unwrap(),
        ScanOutcome::completed("second", "QR")
    );
}

#[test]
fn test_second_scan_rejected_while_first_pending() {
    let harness = ios_harness();
    let (first, rx_first) = channel_handler();

    harness.scanner.scan(&SymbologySet::qr_only(), first);
    wait_for_call(&harness.picker, "present");

    let (second, rx_second) = channel_handler();
    harness.scanner.scan(&SymbologySet::qr_only(), second);
    match rx_second.recv_timeout(RECV_TIMEOUT).unwrap() {
        ScanOutcome::Error { code, message } => {
            assert_eq!(code, ERR_SCAN_IN_PROGRESS);
            assert_eq!(message, ScanError::ScanInProgress.to_string());
        }
        other => panic!("expected in-progress rejection, got {other:?}"),
    }

    // The first scan is unaffected by the rejection.
    harness.picker.finish_present();
    harness.picker.recognize("kept", "QR");
    assert_eq!(
        rx_first.recv_timeout(RECV_TIMEOUT).unwrap(),
        ScanOutcome::completed("kept", "QR")
    );
}

#[test]
fn test_android_scan_round_trip() {
    let display = HeadlessDisplay::new(false).expect("display queue");
    let launcher = FakeLauncher::new();
    let scanner = CodeScanner::new(PlatformServices {
        display,
        picker_factory: None,
        activity_launcher: Some(launcher.clone()),
        installer: None,
    });

    set_license_key("integration-key");
    let (handler, rx) = channel_handler();
    scanner.scan(&SymbologySet::standard_barcodes(), handler);

    {
        let launched = launcher.launched.lock();
        assert_eq!(launched.len(), 1);
        assert!(launched[0].restrict_scanning_area);
        assert!((launched[0].scanning_area_height - 0.1).abs() < f32::EPSILON);
    }
    assert_eq!(
        launcher.app_keys.lock().clone(),
        vec!["integration-key".to_string()]
    );

    launcher.deliver(ActivityResult {
        request_code: REQUEST_BARCODE_PICKER_ACTIVITY,
        result_code: -1,
        barcode_recognized: true,
        barcode_data: Some("0123456789012".to_string()),
        barcode_symbology_name: Some("EAN13".to_string()),
    });

    assert_eq!(
        rx.recv_timeout(RECV_TIMEOUT).unwrap(),
        ScanOutcome::completed("0123456789012", "EAN13")
    );
}

#[test]
fn test_android_result_for_other_request_code_is_ignored() {
    let display = HeadlessDisplay::new(false).expect("display queue");
    let launcher = FakeLauncher::new();
    let scanner = CodeScanner::new(PlatformServices {
        display,
        picker_factory: None,
        activity_launcher: Some(launcher.clone()),
        installer: None,
    });

    let (handler, rx) = channel_handler();
    scanner.scan(&SymbologySet::qr_only(), handler);

    launcher.deliver(ActivityResult {
        request_code: 999,
        result_code: -1,
        barcode_recognized: true,
        barcode_data: Some("stray".to_string()),
        barcode_symbology_name: Some("QR".to_string()),
    });
    assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());

    launcher.deliver(ActivityResult {
        request_code: REQUEST_BARCODE_PICKER_ACTIVITY,
        result_code: 0,
        barcode_recognized: false,
        barcode_data: None,
        barcode_symbology_name: None,
    });
    assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), ScanOutcome::Canceled);
}

#[test]
fn test_scan_without_platform_reports_error() {
    let display = HeadlessDisplay::new(false).expect("display queue");
    let scanner = CodeScanner::new(PlatformServices {
        display,
        picker_factory: None,
        activity_launcher: None,
        installer: None,
    });

    assert!(!scanner.query_capability());
    let (handler, rx) = channel_handler();
    scanner.scan(&SymbologySet::qr_only(), handler);

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        ScanOutcome::Error { code, .. } => assert_ne!(code, ERR_SCAN_IN_PROGRESS),
        other => panic!("expected Error outcome, got {other:?}"),
    }
}
