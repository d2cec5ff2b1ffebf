#[allow(dead_code)]
mod common;

use std::sync::Mutex;

use common::payload;
use darkroom_core::error::DarkroomError;
use darkroom_core::gateway::gemini::{ERR_EDIT_FAILED, ERR_GENERATE_FAILED};
use darkroom_core::gateway::{GatewayTask, ImageService};
use darkroom_core::payload::ImagePayload;
use darkroom_core::session::Session;

/// Service that answers from a script and records what it was asked.
struct ScriptedService {
    calls: Mutex<Vec<String>>,
    fail_with: Option<&'static str>,
}

impl ScriptedService {
    fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message),
        }
    }

    fn answer(&self, call: String, tag: u8) -> darkroom_core::error::Result<ImagePayload> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with {
            Some(message) => Err(DarkroomError::Gateway(message.to_string())),
            None => Ok(payload(tag)),
        }
    }
}

impl ImageService for ScriptedService {
    fn generate(&self, prompt: &str) -> darkroom_core::error::Result<ImagePayload> {
        self.answer(format!("generate:{prompt}"), 10)
    }

    fn edit(&self, source: &ImagePayload, prompt: &str) -> darkroom_core::error::Result<ImagePayload> {
        self.answer(format!("edit:{}:{prompt}", source.bytes()[0]), 20)
    }
}

#[test]
fn generate_task_dispatches_to_the_service() {
    let service = ScriptedService::ok();
    let task = GatewayTask::Generate {
        prompt: "a red barn".to_string(),
    };
    let result = task.run(&service).unwrap();
    assert_eq!(result, payload(10));
    assert_eq!(*service.calls.lock().unwrap(), vec!["generate:a red barn"]);
}

#[test]
fn edit_task_passes_source_and_prompt() {
    let service = ScriptedService::ok();
    let task = GatewayTask::Edit {
        source: payload(3),
        prompt: "warmer".to_string(),
    };
    let result = task.run(&service).unwrap();
    assert_eq!(result, payload(20));
    assert_eq!(*service.calls.lock().unwrap(), vec!["edit:3:warmer"]);
}

#[test]
fn task_accessors() {
    let generate = GatewayTask::Generate {
        prompt: "p".to_string(),
    };
    assert_eq!(generate.prompt(), "p");
    assert_eq!(generate.kind(), "generate");

    let edit = GatewayTask::Edit {
        source: payload(1),
        prompt: "q".to_string(),
    };
    assert_eq!(edit.prompt(), "q");
    assert_eq!(edit.kind(), "edit");
}

#[test]
fn session_round_trip_through_a_scripted_service() {
    // The full begin -> run -> finish cycle the GUI worker performs.
    let service = ScriptedService::ok();
    let mut session = Session::new();

    let task = session.begin_generate("a red barn").unwrap();
    let result = task.run(&service);
    session.finish(task, result);
    assert_eq!(session.current().unwrap().image(), &payload(10));

    let task = session.begin_revise("warmer").unwrap();
    let result = task.run(&service);
    session.finish(task, result);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.current().unwrap().image(), &payload(20));
    assert_eq!(
        *service.calls.lock().unwrap(),
        vec!["generate:a red barn", "edit:10:warmer"]
    );
}

#[test]
fn service_failure_surfaces_the_user_facing_message() {
    let service = ScriptedService::failing(ERR_GENERATE_FAILED);
    let mut session = Session::new();

    let task = session.begin_generate("a red barn").unwrap();
    let result = task.run(&service);
    session.finish(task, result);

    assert_eq!(session.error(), Some(ERR_GENERATE_FAILED));
    assert!(!session.is_loading());
    assert!(session.history().is_empty());
}

#[test]
fn failure_messages_read_as_plain_text() {
    assert_eq!(
        DarkroomError::Gateway(ERR_GENERATE_FAILED.to_string()).to_string(),
        "Failed to generate image. Please check your prompt or API key."
    );
    assert_eq!(
        DarkroomError::Gateway(ERR_EDIT_FAILED.to_string()).to_string(),
        "Failed to edit image. The revision might be too complex or there was an API issue."
    );
    assert!(DarkroomError::MissingApiKey.to_string().contains("GEMINI_API_KEY"));
}
