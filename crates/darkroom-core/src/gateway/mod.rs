pub mod gemini;

pub use gemini::GeminiClient;

use crate::error::Result;
use crate::payload::ImagePayload;

/// The generative-image service boundary.
///
/// Calls block until the service answers; the GUI drives them from its
/// worker thread, never from the UI thread.
pub trait ImageService: Send {
    /// Create an image from a text prompt.
    fn generate(&self, prompt: &str) -> Result<ImagePayload>;
    /// Produce an edited copy of `source` according to the prompt.
    fn edit(&self, source: &ImagePayload, prompt: &str) -> Result<ImagePayload>;
}

/// One prepared gateway call. Built by a session `begin_*` method,
/// executed by the worker, then handed back to `Session::finish` so the
/// outcome can be applied with the prompt that produced it.
#[derive(Clone, Debug)]
pub enum GatewayTask {
    Generate {
        prompt: String,
    },
    Edit {
        source: ImagePayload,
        prompt: String,
    },
}

impl GatewayTask {
    pub fn run(&self, service: &dyn ImageService) -> Result<ImagePayload> {
        match self {
            GatewayTask::Generate { prompt } => service.generate(prompt),
            GatewayTask::Edit { source, prompt } => service.edit(source, prompt),
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            GatewayTask::Generate { prompt } | GatewayTask::Edit { prompt, .. } => prompt,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayTask::Generate { .. } => "generate",
            GatewayTask::Edit { .. } => "edit",
        }
    }
}
