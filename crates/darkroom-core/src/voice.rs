//! Voice capture for the revise-prompt field.
//!
//! The speech engine itself is an external collaborator behind
//! [`SpeechBackend`]; this module owns the control loop around it as an
//! explicit state machine. Recognition engines end runs on their own
//! (silence timeouts), so an `Ended` event while we still want to listen
//! triggers a restart; a user-requested stop goes through the `Stopping`
//! phase so that the confirming `Ended` does not restart.

use tracing::{debug, warn};

/// Boundary to a speech-to-text engine. Finalized text fragments, run
/// endings, and errors are reported back through [`VoiceCapture::handle`].
pub trait SpeechBackend {
    /// Whether this environment can capture speech at all. When false the
    /// UI hides the microphone control instead of surfacing an error.
    fn is_supported(&self) -> bool;
    /// Begin a recognition run.
    fn start(&mut self);
    /// Ask the current run to end; the engine confirms with `Ended`.
    fn stop(&mut self);
}

/// Stand-in for builds without a speech engine.
pub struct UnsupportedBackend;

impl SpeechBackend for UnsupportedBackend {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&mut self) {}

    fn stop(&mut self) {}
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SpeechEvent {
    /// A finalized chunk of recognized text.
    Fragment(String),
    /// The engine ended the current run (requested or not).
    Ended,
    Error(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoicePhase {
    Idle,
    Listening,
    /// Stop requested; waiting for the engine to confirm with `Ended`.
    Stopping,
}

/// The microphone control loop and its accumulating transcript.
pub struct VoiceCapture {
    backend: Box<dyn SpeechBackend>,
    phase: VoicePhase,
    transcript: String,
}

impl VoiceCapture {
    pub fn new(backend: Box<dyn SpeechBackend>) -> Self {
        Self {
            backend,
            phase: VoicePhase::Idle,
            transcript: String::new(),
        }
    }

    /// Capture without an engine; `is_supported` reports false.
    pub fn unsupported() -> Self {
        Self::new(Box::new(UnsupportedBackend))
    }

    pub fn is_supported(&self) -> bool {
        self.backend.is_supported()
    }

    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    pub fn is_listening(&self) -> bool {
        self.phase == VoicePhase::Listening
    }

    /// Everything recognized since the last `start`.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Begin listening. Clears the transcript. No-op unless idle.
    pub fn start(&mut self) {
        if !self.is_supported() {
            debug!("speech capture unsupported, start ignored");
            return;
        }
        if self.phase != VoicePhase::Idle {
            return;
        }
        self.transcript.clear();
        self.backend.start();
        self.phase = VoicePhase::Listening;
    }

    /// Request to stop listening. No-op unless currently listening.
    pub fn stop(&mut self) {
        if self.phase != VoicePhase::Listening {
            return;
        }
        self.backend.stop();
        self.phase = VoicePhase::Stopping;
    }

    /// Microphone button behavior: stop while listening, else start.
    pub fn toggle(&mut self) {
        if self.is_listening() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Feed one engine event through the state machine.
    pub fn handle(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Fragment(text) => {
                // Fragments finalized between a stop request and its
                // confirming end still count.
                if self.phase != VoicePhase::Idle {
                    self.transcript.push_str(&text);
                }
            }
            SpeechEvent::Ended => match self.phase {
                VoicePhase::Listening => {
                    debug!("speech run ended unexpectedly, restarting");
                    self.backend.start();
                }
                VoicePhase::Stopping => self.phase = VoicePhase::Idle,
                VoicePhase::Idle => {}
            },
            SpeechEvent::Error(reason) => {
                warn!(%reason, "speech recognition error");
                self.phase = VoicePhase::Idle;
            }
        }
    }
}
