//! iOS-style bridge: owns the native picker object graph and the
//! modal-buffering race handling.
//!
//! Recognition and cancel callbacks fire on an arbitrary native background
//! context. Both re-enter the native main context (a [`SerialQueue`])
//! before touching the picker; all bridge state is read and written only
//! on that context. Outcomes are delivered on the host display's
//! interactive thread.

use crate::native::{
    CancelStatus, NativePicker, OverlayConfig, PickerDelegate, PickerFactory, ScanSession,
    ScanSettings,
};
use crate::phase::ScanPhase;
use codescan_core::{
    OutcomeHandler, RecognizedCode, ScanError, ScanOutcome, ScanResult, SymbologySet,
};
use codescan_runtime::{HostDisplay, SerialQueue};
use parking_lot::Mutex;
use std::sync::Arc;

struct BridgeState {
    phase: ScanPhase,
    /// Holds a recognition that arrived before the presentation animation
    /// finished. Invariant: `Some` only while `phase` is `Presenting`.
    buffered: Option<RecognizedCode>,
    handler: Option<OutcomeHandler>,
}

impl BridgeState {
    /// Move to the next phase, validated against the scan-cycle state
    /// machine.
    fn advance(&mut self, next: ScanPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "invalid scan phase transition {} -> {next}",
            self.phase
        );
        self.phase = next;
    }
}

/// Bridge to the vendor's iOS picker.
///
/// Holds the lifetime-owned native picker, installs the two delegate
/// callbacks at construction, and runs the scan-cycle state machine
/// ([`ScanPhase`]). Overlapping scans are rejected with
/// [`ScanError::ScanInProgress`], not queued.
pub struct IosScanBridge {
    picker: Arc<dyn NativePicker>,
    main: SerialQueue,
    display: Arc<dyn HostDisplay>,
    state: Mutex<BridgeState>,
}

impl IosScanBridge {
    /// Construct the bridge: allocate the native picker (synchronously, on
    /// the native main context), configure its overlay, and install the
    /// delegate callbacks.
    ///
    /// Reads the process-wide license key; the vendor SDK validates it.
    pub fn new(
        factory: Arc<dyn PickerFactory>,
        display: Arc<dyn HostDisplay>,
    ) -> ScanResult<Arc<Self>> {
        tracing::info!("creating ios scan bridge");
        let main = SerialQueue::new("codescan-native-main")
            .map_err(|err| ScanError::NativeConstructionFailure(err.to_string()))?;

        let license_key = codescan_core::license_key().unwrap_or_default();
        let picker = main
            .dispatch_sync(move || {
                let picker = factory.create_picker(&license_key, &ScanSettings::default_settings())?;
                picker.configure_overlay(&OverlayConfig::default());
                Ok::<_, ScanError>(picker)
            })
            .map_err(|err| ScanError::NativeConstructionFailure(err.to_string()))??;

        let bridge = Arc::new(Self {
            picker,
            main,
            display,
            state: Mutex::new(BridgeState {
                phase: ScanPhase::Idle,
                buffered: None,
                handler: None,
            }),
        });
        bridge.install_delegate();
        Ok(bridge)
    }

    fn install_delegate(self: &Arc<Self>) {
        let recognized_bridge = Arc::downgrade(self);
        let cancel_bridge = Arc::downgrade(self);

        self.picker.set_delegate(PickerDelegate {
            on_recognized: Box::new(move |session: &dyn ScanSession| {
                let Some(bridge) = recognized_bridge.upgrade() else {
                    return;
                };
                // The session borrow cannot leave the native calling
                // context; extract here, decide on the main context.
                let extracted = session.newly_recognized();
                let main = bridge.main.clone();
                main.dispatch_async(move || bridge.handle_recognition(extracted));
            }),
            on_cancel: Box::new(move |status: CancelStatus| {
                let Some(bridge) = cancel_bridge.upgrade() else {
                    return;
                };
                tracing::debug!(status = status.0, "picker cancel delegate fired");
                let main = bridge.main.clone();
                main.dispatch_async(move || bridge.handle_cancel());
            }),
        });
    }

    /// Whether a scan cycle is currently running.
    pub fn in_progress(&self) -> bool {
        self.state.lock().phase.in_progress()
    }

    /// Start a scan for the given symbologies.
    ///
    /// If a scan is already in progress the handler immediately receives
    /// `Error(ERR_SCAN_IN_PROGRESS)` on the interactive thread and the
    /// running cycle is unaffected.
    pub fn scan(self: &Arc<Self>, symbologies: &SymbologySet, handler: OutcomeHandler) {
        {
            let mut state = self.state.lock();
            if state.phase.in_progress() {
                tracing::info!(phase = %state.phase, "scan rejected: already in progress");
                drop(state);
                self.deliver(handler, ScanError::ScanInProgress.into_outcome());
                return;
            }
            state.advance(ScanPhase::Armed);
            state.handler = Some(handler);
            state.buffered = None;
        }

        let settings = ScanSettings::with_symbologies(symbologies.clone());
        let bridge = self.clone();
        self.main.dispatch_async(move || {
            let completion_bridge = bridge.clone();
            bridge.picker.apply_settings(
                &settings,
                Box::new(move || {
                    let main = completion_bridge.main.clone();
                    main.dispatch_async(move || completion_bridge.begin_presentation());
                }),
            );
        });
    }

    /// Runs on the main context once the engine has taken the settings:
    /// start scanning and present the picker modally.
    fn begin_presentation(self: &Arc<Self>) {
        {
            let mut state = self.state.lock();
            if state.phase != ScanPhase::Armed {
                // Cycle was torn down before presentation started.
                return;
            }
            state.advance(ScanPhase::Presenting);
            state.buffered = None;
        }

        self.picker.start_scanning();
        tracing::debug!("presenting picker view controller");
        let bridge = self.clone();
        self.picker.present(
            true,
            Box::new(move || {
                let main = bridge.main.clone();
                main.dispatch_async(move || bridge.finish_presentation());
            }),
        );
    }

    /// Runs on the main context when the presentation animation completes.
    /// Delivers a buffered recognition, or arms the immediate path.
    fn finish_presentation(self: &Arc<Self>) {
        let buffered = {
            let mut state = self.state.lock();
            if state.phase != ScanPhase::Presenting {
                // Canceled while the animation was still running.
                return;
            }
            match state.buffered.take() {
                Some(code) => {
                    state.advance(ScanPhase::Idle);
                    Some((code, state.handler.take()))
                }
                None => {
                    state.advance(ScanPhase::Active);
                    None
                }
            }
        };

        if let Some((code, handler)) = buffered {
            self.picker.stop_scanning();
            self.picker.dismiss(true);
            if let Some(handler) = handler {
                self.deliver(handler, code.into_outcome());
            }
        }
    }

    /// Runs on the main context for every recognition event.
    fn handle_recognition(self: &Arc<Self>, extracted: ScanResult<RecognizedCode>) {
        enum Action {
            Ignore,
            Complete(RecognizedCode, Option<OutcomeHandler>),
            Fault(ScanError, Option<OutcomeHandler>),
        }

        let action = {
            let mut state = self.state.lock();
            // Ignore events outside a presented cycle, and repeat
            // recognitions of the same code while one is already buffered.
            if !matches!(state.phase, ScanPhase::Presenting | ScanPhase::Active)
                || state.buffered.is_some()
            {
                Action::Ignore
            } else {
                match extracted {
                    Ok(code) => {
                        tracing::info!(
                            symbology = %code.symbology_name,
                            data = %code.data,
                            "code recognized"
                        );
                        if state.phase.buffers_recognitions() {
                            // Animation still running; park the result for
                            // the presentation completion handler.
                            state.buffered = Some(code);
                            Action::Ignore
                        } else {
                            state.advance(ScanPhase::Idle);
                            Action::Complete(code, state.handler.take())
                        }
                    }
                    Err(fault) => {
                        state.advance(ScanPhase::Idle);
                        state.buffered = None;
                        Action::Fault(fault, state.handler.take())
                    }
                }
            }
        };

        match action {
            Action::Ignore => {}
            Action::Complete(code, handler) => {
                self.picker.stop_scanning();
                self.picker.dismiss(true);
                if let Some(handler) = handler {
                    self.deliver(handler, code.into_outcome());
                }
            }
            Action::Fault(fault, handler) => {
                if codescan_core::debug_enabled() {
                    tracing::error!(error = %fault, "failed to read recognized code");
                } else {
                    tracing::warn!("failed to read recognized code");
                }
                self.picker.stop_scanning();
                self.picker.dismiss(true);
                if let Some(handler) = handler {
                    self.deliver(handler, fault.into_outcome());
                }
            }
        }
    }

    /// Runs on the main context when the user dismisses the picker.
    fn handle_cancel(self: &Arc<Self>) {
        let handler = {
            let mut state = self.state.lock();
            // A stray cancel after the cycle already finished leaves the
            // state untouched.
            if state.phase.in_progress() {
                state.advance(ScanPhase::Idle);
            }
            state.buffered = None;
            state.handler.take()
        };

        self.picker.stop_scanning();
        self.picker.dismiss(true);
        // A stray cancel after completion finds the slot empty and
        // delivers nothing.
        if let Some(handler) = handler {
            self.deliver(handler, ScanOutcome::Canceled);
        }
    }

    /// Deliver an outcome to a handler on the interactive thread.
    fn deliver(&self, handler: OutcomeHandler, outcome: ScanOutcome) {
        self.display
            .call_serially(Box::new(move || handler(outcome)));
    }
}

impl Drop for IosScanBridge {
    fn drop(&mut self) {
        tracing::debug!("releasing native picker");
        self.picker.release();
    }
}
