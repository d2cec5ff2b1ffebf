use std::cell::RefCell;
use std::rc::Rc;

use darkroom_core::voice::{SpeechBackend, SpeechEvent, VoiceCapture, VoicePhase};

/// Backend that records the calls it receives.
struct ScriptedBackend {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl SpeechBackend for ScriptedBackend {
    fn is_supported(&self) -> bool {
        true
    }

    fn start(&mut self) {
        self.calls.borrow_mut().push("start");
    }

    fn stop(&mut self) {
        self.calls.borrow_mut().push("stop");
    }
}

fn capture() -> (VoiceCapture, Rc<RefCell<Vec<&'static str>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let backend = ScriptedBackend {
        calls: calls.clone(),
    };
    (VoiceCapture::new(Box::new(backend)), calls)
}

fn fragment(text: &str) -> SpeechEvent {
    SpeechEvent::Fragment(text.to_string())
}

#[test]
fn start_begins_listening_and_clears_the_transcript() {
    let (mut voice, calls) = capture();
    voice.start();
    assert_eq!(voice.phase(), VoicePhase::Listening);
    assert!(voice.is_listening());
    assert_eq!(*calls.borrow(), vec!["start"]);

    voice.handle(fragment("hello "));
    voice.stop();
    voice.handle(SpeechEvent::Ended);
    assert_eq!(voice.transcript(), "hello ");

    // A new run starts from an empty transcript.
    voice.start();
    assert_eq!(voice.transcript(), "");
    assert_eq!(*calls.borrow(), vec!["start", "stop", "start"]);
}

#[test]
fn fragments_accumulate_in_order() {
    let (mut voice, _) = capture();
    voice.start();
    voice.handle(fragment("make it "));
    voice.handle(fragment("warmer"));
    assert_eq!(voice.transcript(), "make it warmer");
}

#[test]
fn fragments_while_idle_are_dropped() {
    let (mut voice, _) = capture();
    voice.handle(fragment("ghost"));
    assert_eq!(voice.transcript(), "");
}

#[test]
fn unexpected_end_restarts_the_engine() {
    // Engines end runs on silence; the capture keeps listening until the
    // user asks it to stop.
    let (mut voice, calls) = capture();
    voice.start();
    voice.handle(SpeechEvent::Ended);
    assert_eq!(voice.phase(), VoicePhase::Listening);
    assert_eq!(*calls.borrow(), vec!["start", "start"]);
}

#[test]
fn requested_stop_suppresses_the_restart() {
    let (mut voice, calls) = capture();
    voice.start();
    voice.stop();
    assert_eq!(voice.phase(), VoicePhase::Stopping);
    assert!(!voice.is_listening());

    voice.handle(SpeechEvent::Ended);
    assert_eq!(voice.phase(), VoicePhase::Idle);
    assert_eq!(*calls.borrow(), vec!["start", "stop"]);
}

#[test]
fn fragments_between_stop_and_end_still_count() {
    let (mut voice, _) = capture();
    voice.start();
    voice.handle(fragment("make it "));
    voice.stop();
    voice.handle(fragment("blue"));
    voice.handle(SpeechEvent::Ended);
    assert_eq!(voice.transcript(), "make it blue");
    assert_eq!(voice.phase(), VoicePhase::Idle);
}

#[test]
fn engine_error_drops_back_to_idle() {
    let (mut voice, calls) = capture();
    voice.start();
    voice.handle(SpeechEvent::Error("no-speech".to_string()));
    assert_eq!(voice.phase(), VoicePhase::Idle);

    // No restart after an error, and late fragments are ignored.
    voice.handle(fragment("late"));
    assert_eq!(voice.transcript(), "");
    assert_eq!(*calls.borrow(), vec!["start"]);
}

#[test]
fn toggle_alternates_between_start_and_stop() {
    let (mut voice, calls) = capture();
    voice.toggle();
    assert!(voice.is_listening());
    voice.toggle();
    assert_eq!(voice.phase(), VoicePhase::Stopping);

    voice.handle(SpeechEvent::Ended);
    voice.toggle();
    assert!(voice.is_listening());
    assert_eq!(*calls.borrow(), vec!["start", "stop", "start"]);
}

#[test]
fn start_while_already_listening_is_a_no_op() {
    let (mut voice, calls) = capture();
    voice.start();
    voice.handle(fragment("keep me"));
    voice.start();
    assert_eq!(voice.transcript(), "keep me");
    assert_eq!(*calls.borrow(), vec!["start"]);
}

#[test]
fn stop_while_idle_is_a_no_op() {
    let (mut voice, calls) = capture();
    voice.stop();
    assert_eq!(voice.phase(), VoicePhase::Idle);
    assert!(calls.borrow().is_empty());
}

#[test]
fn unsupported_backend_never_starts() {
    let mut voice = VoiceCapture::unsupported();
    assert!(!voice.is_supported());
    voice.start();
    assert_eq!(voice.phase(), VoicePhase::Idle);
    voice.toggle();
    assert_eq!(voice.phase(), VoicePhase::Idle);
}
