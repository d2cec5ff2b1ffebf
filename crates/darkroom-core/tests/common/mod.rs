use darkroom_core::payload::ImagePayload;
use darkroom_core::session::Session;

/// Tiny payload with distinguishable bytes.
pub fn payload(tag: u8) -> ImagePayload {
    ImagePayload::new(vec![tag; 4], "image/png")
}

/// Session whose base image is an upload of `payload(tag)`.
pub fn session_with_upload(tag: u8) -> Session {
    let mut session = Session::new();
    session.upload(payload(tag));
    session
}

/// Drive one revise to a successful completion with `payload(tag)`.
pub fn revise_ok(session: &mut Session, prompt: &str, tag: u8) {
    let task = session.begin_revise(prompt).expect("revise should start");
    session.finish(task, Ok(payload(tag)));
}
