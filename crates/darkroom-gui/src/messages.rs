use std::path::PathBuf;
use std::time::Duration;

use darkroom_core::error::Result;
use darkroom_core::gateway::GatewayTask;
use darkroom_core::payload::ImagePayload;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read an image file from disk and validate that it decodes.
    LoadFile { path: PathBuf },

    /// Execute one prepared gateway call.
    RunTask { task: GatewayTask },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Upload read and validated; ready to become the session base.
    FileLoaded {
        path: PathBuf,
        payload: ImagePayload,
    },

    /// Reading or decoding an upload failed.
    FileFailed { message: String },

    /// A gateway task came back; the session applies the outcome.
    TaskFinished {
        task: GatewayTask,
        result: Result<ImagePayload>,
        elapsed: Duration,
    },

    Log {
        message: String,
    },
}
