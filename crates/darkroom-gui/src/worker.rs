use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use darkroom_core::config::GatewayConfig;
use darkroom_core::error::{DarkroomError, Result};
use darkroom_core::gateway::{GatewayTask, GeminiClient};
use darkroom_core::payload::ImagePayload;
use darkroom_core::session::ERR_UPLOAD_FAILED;
use tracing::{info, warn};

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    config: GatewayConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("darkroom-worker".into())
        .spawn(move || {
            worker_loop(config, cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn worker_loop(
    config: GatewayConfig,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    // A failed client build (bad TLS setup and the like) is kept and
    // surfaced per task rather than killing the app at startup.
    let client = GeminiClient::new(config);
    if let Err(ref e) = client {
        warn!(error = %e, "gateway client unavailable");
    }

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadFile { path } => {
                handle_load_file(&path, &tx, &ctx);
            }
            WorkerCommand::RunTask { task } => {
                handle_run_task(&client, task, &tx, &ctx);
            }
        }
    }
}

fn handle_load_file(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match read_image(path) {
        Ok(payload) => {
            info!(path = %path.display(), bytes = payload.len(), mime = payload.mime(), "upload read");
            send(
                tx,
                ctx,
                WorkerResult::FileLoaded {
                    path: path.to_path_buf(),
                    payload,
                },
            );
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "upload read failed");
            send(
                tx,
                ctx,
                WorkerResult::FileFailed {
                    message: ERR_UPLOAD_FAILED.to_string(),
                },
            );
        }
    }
}

/// Read an image file and infer its MIME type from the detected format.
/// A full decode pass rejects files whose signature is valid but whose
/// contents are not.
fn read_image(path: &Path) -> Result<ImagePayload> {
    let bytes =
        std::fs::read(path).map_err(|e| DarkroomError::InvalidPayload(e.to_string()))?;
    let format =
        image::guess_format(&bytes).map_err(|e| DarkroomError::InvalidPayload(e.to_string()))?;
    image::load_from_memory(&bytes).map_err(|e| DarkroomError::InvalidPayload(e.to_string()))?;
    Ok(ImagePayload::new(bytes, format.to_mime_type()))
}

fn handle_run_task(
    client: &Result<GeminiClient>,
    task: GatewayTask,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, format!("Sending {} request...", task.kind()));
    let start = Instant::now();
    let result = match client {
        Ok(service) => task.run(service),
        Err(e) => Err(DarkroomError::Gateway(e.to_string())),
    };
    let elapsed = start.elapsed();
    send(
        tx,
        ctx,
        WorkerResult::TaskFinished {
            task,
            result,
            elapsed,
        },
    );
}
